//! Filter error types

use thiserror::Error;

/// Errors that can occur while setting up a filter pass
#[derive(Error, Debug)]
pub enum FilterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing or serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for FilterError {
    fn from(e: toml::de::Error) -> Self {
        FilterError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for FilterError {
    fn from(e: toml::ser::Error) -> Self {
        FilterError::Toml(e.to_string())
    }
}
