//! Configuration for the pipeline

use crate::normalizer::UNWANTED_SYMBOLS;
use crate::PipelineError;
use digduck_domain::chunk::{DEFAULT_CHUNK_SIZE, DEFAULT_FILE_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character encoding of the input table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8, with or without a byte order mark
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    /// Shift_JIS
    #[serde(rename = "shift_jis")]
    ShiftJis,
}

impl Encoding {
    /// Canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::ShiftJis => "shift_jis",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "utf_8" | "utf8" => Ok(Encoding::Utf8),
            "shift_jis" | "shiftjis" | "sjis" => Ok(Encoding::ShiftJis),
            other => Err(format!("unsupported encoding '{}'", other)),
        }
    }
}

/// Configuration for loading and exporting articles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Column holding article bodies
    pub text_column: String,

    /// Input encoding
    pub encoding: Encoding,

    /// Maximum sentences per chunk file
    pub chunk_size: usize,

    /// File name prefix of chunk files
    pub chunk_file_prefix: String,

    /// Symbols removed from article text before splitting
    pub unwanted_symbols: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            text_column: "honbun".to_string(),
            encoding: Encoding::Utf8,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            unwanted_symbols: UNWANTED_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.text_column.is_empty() {
            return Err("text_column must not be empty".to_string());
        }
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.chunk_file_prefix.contains(['/', '\\']) {
            return Err("chunk_file_prefix must not contain path separators".to_string());
        }
        if self.unwanted_symbols.iter().any(|s| s.is_empty()) {
            return Err("unwanted_symbols must not contain empty strings".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, PipelineError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, PipelineError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.text_column, "honbun");
        assert_eq!(config.chunk_size, 200);
    }

    #[test]
    fn test_zero_chunk_size() {
        let mut config = PipelineConfig::default();
        config.chunk_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_prefix_with_separator() {
        let mut config = PipelineConfig::default();
        config.chunk_file_prefix = "../part_".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_encoding_labels() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("shift-jis".parse::<Encoding>().unwrap(), Encoding::ShiftJis);
        assert_eq!("sjis".parse::<Encoding>().unwrap(), Encoding::ShiftJis);
        assert!("latin1".parse::<Encoding>().is_err());
        assert_eq!(Encoding::ShiftJis.to_string(), "shift_jis");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = PipelineConfig::default();
        config.encoding = Encoding::ShiftJis;
        config.chunk_size = 50;

        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("encoding = \"shift_jis\""));
        assert_eq!(PipelineConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_toml() {
        let config = PipelineConfig::from_toml("text_column = \"body\"").unwrap();
        assert_eq!(config.text_column, "body");
        assert_eq!(config.encoding, Encoding::Utf8);
    }
}
