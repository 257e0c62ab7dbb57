//! Error types for the pipeline

use digduck_filter::FilterError;
use thiserror::Error;

/// Errors that can occur while loading, processing or packaging articles
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested text column is not in the table
    #[error("Column '{column}' not found (available: {})", .available.join(", "))]
    ColumnNotFound {
        /// Requested column
        column: String,
        /// Columns present in the header row
        available: Vec<String>,
    },

    /// Input bytes are not valid in the selected encoding
    #[error("Input is not valid {0}")]
    Decode(String),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Archive creation error
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Filter setup error
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// TOML parsing or serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for PipelineError {
    fn from(e: toml::de::Error) -> Self {
        PipelineError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for PipelineError {
    fn from(e: toml::ser::Error) -> Self {
        PipelineError::Toml(e.to_string())
    }
}
