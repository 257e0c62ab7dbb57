//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use digduck_pipeline::Encoding;
use std::path::PathBuf;

/// digduck - Filter Japanese news articles and export their sentences.
#[derive(Debug, Parser)]
#[command(name = "digduck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DIGDUCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export sentences of articles that pass the relevance filter
    Filter(FilterArgs),

    /// Export sentences of every article without filtering
    Bullet(BulletArgs),

    /// Show per-article filter diagnostics without exporting
    Score(ScoreArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Input table options shared by the processing commands.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// CSV file with one article per row
    pub input: PathBuf,

    /// Column holding the article text
    #[arg(long)]
    pub column: Option<String>,

    /// Encoding of the CSV file
    #[arg(short, long, value_enum)]
    pub encoding: Option<EncodingArg>,
}

/// Output options shared by the export commands.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// ZIP archive to write (defaults to <input stem>.zip in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the chunk text files into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print the exported sentences
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for the filter command.
#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Space-separated keywords; an article must contain one of them
    #[arg(short, long)]
    pub keywords: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the bullet command.
#[derive(Debug, Args)]
pub struct BulletArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the score command.
#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Space-separated keywords; an article must contain one of them
    #[arg(short, long)]
    pub keywords: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Input encoding argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum EncodingArg {
    /// UTF-8
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    /// Shift_JIS
    #[value(name = "shift-jis", alias = "shift_jis", alias = "sjis")]
    ShiftJis,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<EncodingArg> for Encoding {
    fn from(encoding: EncodingArg) -> Self {
        match encoding {
            EncodingArg::Utf8 => Encoding::Utf8,
            EncodingArg::ShiftJis => Encoding::ShiftJis,
        }
    }
}
