//! Grouping sentences into size-bounded chunks

use digduck_domain::chunk::DEFAULT_CHUNK_SIZE;
use digduck_domain::Chunk;

/// Groups sentences into chunks of at most `max_size`
pub struct ChunkWriter {
    max_size: usize,
}

impl ChunkWriter {
    /// Create a new chunk writer; a size of 0 is treated as 1
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size: max_size.max(1),
        }
    }

    /// Maximum sentences per chunk
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Chunk the given sentences
    ///
    /// Chunks are filled greedily in order. A chunk closes as soon as it holds
    /// `max_size` sentences; only the last chunk may be smaller. No chunk is
    /// empty, so an empty input yields no chunks.
    pub fn chunk(&self, sentences: Vec<String>) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current = Vec::with_capacity(self.max_size.min(sentences.len()));

        for sentence in sentences {
            current.push(sentence);

            if current.len() == self.max_size {
                chunks.push(Chunk::new(chunks.len() + 1, std::mem::take(&mut current)));
            }
        }

        if !current.is_empty() {
            chunks.push(Chunk::new(chunks.len() + 1, current));
        }

        chunks
    }
}

impl Default for ChunkWriter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}
