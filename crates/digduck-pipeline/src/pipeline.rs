//! Core Pipeline implementation

use crate::archive::{build_archive, write_chunks};
use crate::chunking::ChunkWriter;
use crate::cleaner::clean_sentences;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::normalizer::TextNormalizer;
use crate::splitter::split_sentences;
use crate::table::Table;
use crate::types::{ExportMetadata, ExportMode, ExportResult};
use digduck_domain::{Article, Tagger};
use digduck_filter::{ArticleFilter, FilterConfig, FilterReport};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// The Pipeline turns table rows into chunked, cleaned sentences
pub struct Pipeline<T: Tagger> {
    filter: ArticleFilter<T>,
    normalizer: TextNormalizer,
    chunker: ChunkWriter,
    config: PipelineConfig,
}

impl<T> Pipeline<T>
where
    T: Tagger,
    T::Error: fmt::Display,
{
    /// Create a new Pipeline
    pub fn new(
        tagger: T,
        filter_config: FilterConfig,
        config: PipelineConfig,
    ) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        let filter = ArticleFilter::new(tagger, filter_config)?;

        Ok(Self {
            filter,
            normalizer: TextNormalizer::new(config.unwanted_symbols.iter().cloned()),
            chunker: ChunkWriter::new(config.chunk_size),
            config,
        })
    }

    /// Pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The relevance filter
    pub fn filter(&self) -> &ArticleFilter<T> {
        &self.filter
    }

    /// Articles from the configured text column
    ///
    /// Fails before any processing if the column is missing.
    pub fn load_articles(&self, table: &Table) -> Result<Vec<Article>, PipelineError> {
        table.articles(&self.config.text_column)
    }

    /// Run the relevance filter only
    pub fn score(&self, articles: &[Article]) -> FilterReport {
        self.filter.filter(articles)
    }

    /// Filter articles, then export the survivors
    pub fn export_filtered(&self, articles: &[Article]) -> ExportResult {
        let start = Instant::now();
        info!("Starting filtered export of {} articles", articles.len());

        let report = self.filter.filter(articles);
        let texts = report.kept.iter().map(|scored| scored.article.text.as_str());
        let exported_articles = report.kept_count();
        let (sentences, chunks) = self.sentences_and_chunks(texts);

        self.finish(
            ExportMode::Filtered,
            articles.len(),
            exported_articles,
            sentences,
            chunks,
            Some(report),
            start,
        )
    }

    /// Export every article without filtering
    pub fn export_bullets(&self, articles: &[Article]) -> ExportResult {
        let start = Instant::now();
        info!("Starting bullet export of {} articles", articles.len());

        let texts = articles.iter().map(|article| article.text.as_str());
        let (sentences, chunks) = self.sentences_and_chunks(texts);

        self.finish(
            ExportMode::Bullet,
            articles.len(),
            articles.len(),
            sentences,
            chunks,
            None,
            start,
        )
    }

    /// Normalize, split and clean article texts into one sentence list
    pub fn sentences<'a, I>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut all_sentences = Vec::new();
        for text in texts {
            let normalized = self.normalizer.normalize(text);
            all_sentences.extend(split_sentences(&normalized));
        }
        clean_sentences(all_sentences)
    }

    /// Package an export's chunks as a ZIP archive
    pub fn archive(&self, result: &ExportResult) -> Result<Vec<u8>, PipelineError> {
        build_archive(&result.chunks, &self.config.chunk_file_prefix)
    }

    /// Write an export's chunks as text files into `dir`
    pub fn write_chunk_files(
        &self,
        result: &ExportResult,
        dir: &Path,
    ) -> Result<Vec<PathBuf>, PipelineError> {
        write_chunks(&result.chunks, dir, &self.config.chunk_file_prefix)
    }

    fn sentences_and_chunks<'a, I>(&self, texts: I) -> (Vec<String>, Vec<digduck_domain::Chunk>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sentences = self.sentences(texts);
        let chunks = self.chunker.chunk(sentences.clone());
        debug!(
            "{} sentences in {} chunks of at most {}",
            sentences.len(),
            chunks.len(),
            self.chunker.max_size()
        );
        (sentences, chunks)
    }

    #[allow(clippy::too_many_arguments)]
    fn finish(
        &self,
        mode: ExportMode,
        total_articles: usize,
        exported_articles: usize,
        sentences: Vec<String>,
        chunks: Vec<digduck_domain::Chunk>,
        report: Option<FilterReport>,
        start: Instant,
    ) -> ExportResult {
        let metadata = ExportMetadata {
            total_articles,
            exported_articles,
            sentence_count: sentences.len(),
            chunk_count: chunks.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "{} export complete: {} of {} articles, {} sentences, {} chunks",
            mode,
            metadata.exported_articles,
            metadata.total_articles,
            metadata.sentence_count,
            metadata.chunk_count
        );

        ExportResult {
            mode,
            sentences,
            chunks,
            report,
            metadata,
        }
    }
}
