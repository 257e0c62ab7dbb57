//! Export result types

use digduck_domain::Chunk;
use digduck_filter::FilterReport;
use std::fmt;

/// Which articles an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Only articles that pass the relevance filter
    Filtered,
    /// Every article, unfiltered
    Bullet,
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportMode::Filtered => f.write_str("filtered"),
            ExportMode::Bullet => f.write_str("bullet"),
        }
    }
}

/// Result of an export operation
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Mode the export ran in
    pub mode: ExportMode,

    /// Cleaned sentences in output order
    pub sentences: Vec<String>,

    /// Sentences grouped into output units
    pub chunks: Vec<Chunk>,

    /// Per-article filter verdicts (filtered exports only)
    pub report: Option<FilterReport>,

    /// Metadata about the export
    pub metadata: ExportMetadata,
}

/// Metadata about an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMetadata {
    /// Articles read from the input
    pub total_articles: usize,

    /// Articles whose sentences were exported
    pub exported_articles: usize,

    /// Sentences after cleaning
    pub sentence_count: usize,

    /// Chunks produced
    pub chunk_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
