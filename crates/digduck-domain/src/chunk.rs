//! Chunk module - a bounded group of sentences written as one output file

/// Default number of sentences per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 200;

/// Default file name prefix for chunk files
pub const DEFAULT_FILE_PREFIX: &str = "processed_part_";

/// An ordered group of sentences materialized as one output unit
///
/// Chunks are numbered from 1 in the order they were filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based sequence number
    pub index: usize,

    /// Sentences in original order
    pub sentences: Vec<String>,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(index: usize, sentences: Vec<String>) -> Self {
        Self { index, sentences }
    }

    /// Number of sentences in the chunk
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Chunk holds no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Serialized file content: one sentence per line
    pub fn payload(&self) -> String {
        self.sentences.join("\n")
    }

    /// File name for this chunk, e.g. `processed_part_3.txt`
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}{}.txt", prefix, self.index)
    }
}
