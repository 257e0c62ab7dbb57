//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute a config action.
pub fn execute_config(
    args: ConfigArgs,
    path: &Path,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", run_config(&args.action, path, config, formatter)?);
    Ok(())
}

/// Run a config action against the file at `path`.
pub fn run_config(
    action: &ConfigAction,
    path: &Path,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    match action {
        ConfigAction::Show => formatter.config(config),
        ConfigAction::Path => Ok(path.display().to_string()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            Ok(formatter.success(&format!("Wrote default configuration to {}", path.display())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);
        let config = Config::default();

        let init = ConfigAction::Init { force: false };
        assert!(run_config(&init, &path, &config, &formatter).is_ok());
        assert!(matches!(
            run_config(&init, &path, &config, &formatter),
            Err(CliError::InvalidInput(_))
        ));

        let forced = ConfigAction::Init { force: true };
        assert!(run_config(&forced, &path, &config, &formatter).is_ok());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_show_and_path() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let path = Path::new("/tmp/digduck.toml");

        let shown = run_config(&ConfigAction::Show, path, &Config::default(), &formatter).unwrap();
        assert!(shown.contains("[pipeline]"));
        assert!(shown.contains("text_column = \"honbun\""));

        let printed =
            run_config(&ConfigAction::Path, path, &Config::default(), &formatter).unwrap();
        assert_eq!(printed, "/tmp/digduck.toml");
    }
}
