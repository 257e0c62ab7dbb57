//! digduck Pipeline
//!
//! Turns a table of article text into clean sentences grouped into
//! size-bounded files.
//!
//! # Overview
//!
//! Articles are read from one column of a CSV table, optionally passed through
//! the relevance filter, stripped of unwanted symbols, split into sentences on
//! `。！？`, cleaned of symbol-only sentences, and grouped into chunks of at
//! most 200 sentences. Chunks can be written as text files or packaged as one
//! ZIP archive.
//!
//! # Architecture
//!
//! ```text
//! CSV → Table → Articles → Filter → Normalizer → Splitter → Cleaner → ChunkWriter → ZIP
//! ```
//!
//! # Example Usage
//!
//! ```
//! use digduck_filter::FilterConfig;
//! use digduck_pipeline::{Pipeline, PipelineConfig, Table};
//! use digduck_tagger::MockTagger;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Table::from_csv_str("honbun\n●速報。本日は晴れ。\n")?;
//! let pipeline = Pipeline::new(
//!     MockTagger::default(),
//!     FilterConfig::default(),
//!     PipelineConfig::default(),
//! )?;
//!
//! let articles = pipeline.load_articles(&table)?;
//! let result = pipeline.export_bullets(&articles);
//! assert_eq!(result.sentences, vec!["速報", "本日は晴れ"]);
//!
//! let zip_bytes = pipeline.archive(&result)?;
//! assert!(!zip_bytes.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod archive;
mod chunking;
mod cleaner;
mod config;
mod error;
mod normalizer;
mod pipeline;
mod splitter;
mod table;
mod types;

#[cfg(test)]
mod tests;

pub use archive::{build_archive, default_archive_name, write_chunks};
pub use chunking::ChunkWriter;
pub use cleaner::{clean_sentences, has_content, is_japanese_script};
pub use config::{Encoding, PipelineConfig};
pub use error::PipelineError;
pub use normalizer::{strip_line_indent, TextNormalizer, UNWANTED_SYMBOLS};
pub use pipeline::Pipeline;
pub use splitter::split_sentences;
pub use table::Table;
pub use types::{ExportMetadata, ExportMode, ExportResult};
