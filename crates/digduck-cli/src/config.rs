//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use digduck_filter::FilterConfig;
use digduck_pipeline::PipelineConfig;
use digduck_domain::{TaggedToken, Tagger};
use digduck_tagger::mecab::{default_rc_path, DEFAULT_COMMAND};
use digduck_tagger::{LinderaTagger, MecabTagger, TaggerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Relevance filter
    #[serde(default)]
    pub filter: FilterConfig,

    /// Loading and export
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Morphological analyzer
    #[serde(default)]
    pub tagger: TaggerSettings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Morphological analyzer backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaggerBackend {
    /// Lindera with the embedded IPADIC dictionary
    #[default]
    Lindera,
    /// An installed `mecab` binary
    Mecab,
}

/// How to run the morphological analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggerSettings {
    /// Analyzer backend
    #[serde(default)]
    pub backend: TaggerBackend,

    /// `mecab` executable
    #[serde(default = "default_command")]
    pub command: String,

    /// Extra `mecab` arguments, e.g. `["-d", "/path/to/dic"]`
    #[serde(default)]
    pub args: Vec<String>,

    /// Resource file passed with `-r`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mecabrc: Option<PathBuf>,
}

/// Analyzer selected by the configuration.
pub enum ConfiguredTagger {
    /// In-process Lindera
    Lindera(Box<LinderaTagger>),
    /// External `mecab` process
    Mecab(MecabTagger),
}

impl Tagger for ConfiguredTagger {
    type Error = TaggerError;

    fn tag(&self, sentence: &str) -> std::result::Result<Vec<TaggedToken>, TaggerError> {
        match self {
            ConfiguredTagger::Lindera(tagger) => tagger.tag(sentence),
            ConfiguredTagger::Mecab(tagger) => tagger.tag(sentence),
        }
    }
}

impl TaggerSettings {
    /// Build the configured analyzer.
    pub fn build(&self) -> Result<ConfiguredTagger> {
        match self.backend {
            TaggerBackend::Lindera => {
                debug!("Using Lindera with embedded IPADIC");
                Ok(ConfiguredTagger::Lindera(Box::new(LinderaTagger::new()?)))
            }
            TaggerBackend::Mecab => {
                debug!("Using {}", self.command);
                Ok(ConfiguredTagger::Mecab(self.mecab()))
            }
        }
    }

    /// The `mecab` adapter described by these settings.
    ///
    /// Without an explicit `mecabrc`, the platform default is passed only
    /// when it exists.
    pub fn mecab(&self) -> MecabTagger {
        let tagger = MecabTagger::new(&self.command).with_args(self.args.iter().cloned());
        match &self.mecabrc {
            Some(path) => tagger.with_rc_path(path),
            None => {
                let path = default_rc_path();
                if path.exists() {
                    tagger.with_rc_path(path)
                } else {
                    tagger
                }
            }
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".digduck").join("config.toml"))
    }

    /// Load configuration from a file, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the filter and pipeline sections.
    pub fn validate(&self) -> Result<()> {
        self.filter
            .validate()
            .map_err(|e| CliError::Config(format!("[filter] {}", e)))?;
        self.pipeline
            .validate()
            .map_err(|e| CliError::Config(format!("[pipeline] {}", e)))?;
        if self.tagger.backend == TaggerBackend::Mecab && self.tagger.command.trim().is_empty() {
            return Err(CliError::Config("[tagger] command must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for TaggerSettings {
    fn default() -> Self {
        Self {
            backend: TaggerBackend::Lindera,
            command: default_command(),
            args: Vec::new(),
            mecabrc: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use digduck_pipeline::Encoding;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.pipeline.text_column, "honbun");
        assert_eq!(config.tagger.backend, TaggerBackend::Lindera);
        assert_eq!(config.tagger.command, "mecab");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            format = "json"

            [filter]
            keywords = ["選挙"]

            [pipeline]
            encoding = "shift_jis"
            chunk_size = 50

            [tagger]
            backend = "mecab"
            mecabrc = "/usr/local/etc/mecabrc"
            "#,
        )
        .unwrap();

        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.filter.keywords, vec!["選挙"]);
        assert_eq!(config.filter.max_garbage_ratio, 0.018);
        assert_eq!(config.pipeline.encoding, Encoding::ShiftJis);
        assert_eq!(config.pipeline.chunk_size, 50);
        assert_eq!(config.tagger.backend, TaggerBackend::Mecab);
        assert_eq!(config.tagger.command, "mecab");
        assert_eq!(
            config.tagger.mecab().rc_path(),
            Some(Path::new("/usr/local/etc/mecabrc"))
        );
    }

    #[test]
    fn test_build_selects_backend() {
        let mut settings = TaggerSettings::default();
        assert!(matches!(settings.build().unwrap(), ConfiguredTagger::Lindera(_)));

        settings.backend = TaggerBackend::Mecab;
        settings.command = "/opt/mecab/bin/mecab".to_string();
        match settings.build().unwrap() {
            ConfiguredTagger::Mecab(tagger) => {
                assert_eq!(tagger.command(), "/opt/mecab/bin/mecab")
            }
            ConfiguredTagger::Lindera(_) => panic!("Expected the mecab backend"),
        }
    }

    #[test]
    fn test_empty_command_only_matters_for_mecab() {
        let mut config = Config::default();
        config.tagger.command = String::new();
        assert!(config.validate().is_ok());

        config.tagger.backend = TaggerBackend::Mecab;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.filter.keywords = vec!["国会".to_string()];
        config.tagger.args = vec!["-d".to_string(), "/opt/dic".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pipeline]\nchunk_size = 0\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.starts_with("[pipeline]")));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[filter\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));
    }
}
