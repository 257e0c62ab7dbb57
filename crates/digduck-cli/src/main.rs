//! digduck CLI - filter Japanese news articles and export their sentences.

use clap::Parser;
use digduck_cli::commands;
use digduck_cli::{Cli, Command, Config, Formatter};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> digduck_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };

    // A broken file must not stop `config path` or `config init --force`.
    let config = match (Config::load_from(&config_path), &cli.command) {
        (Ok(config), _) => config,
        (Err(e), Command::Config(_)) => {
            warn!("Ignoring {}: {}", config_path.display(), e);
            Config::default()
        }
        (Err(e), _) => return Err(e),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Filter(args) => commands::execute_filter(args, &config, &formatter)?,
        Command::Bullet(args) => commands::execute_bullet(args, &config, &formatter)?,
        Command::Score(args) => commands::execute_score(args, &config, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config_path, &config, &formatter)?
        }
    }

    Ok(())
}
