//! Config command implementation.

use std::path::Path;

use colored::Colorize;
use tracing::info;

use crate::cli::args::ConfigCommands;
use crate::config::{Config, Paths};
use crate::error::TasklineError;

/// Execute a config subcommand against the given paths.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or if
/// `init` would overwrite an existing file without `--force`.
pub fn config(paths: &Paths, command: ConfigCommands) -> Result<String, TasklineError> {
    match command {
        ConfigCommands::Show => Config::load_from_path(&paths.config_file)?.to_yaml(),
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(&paths.config_file, force),
    }
}

fn init(path: &Path, force: bool) -> Result<String, TasklineError> {
    if path.exists() && !force {
        return Err(TasklineError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to_path(path)?;
    info!(path = %path.display(), "wrote default config");
    Ok(format!("{} {}", "Wrote".green().bold(), path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let output = config(&paths, ConfigCommands::Path).unwrap();
        assert!(output.ends_with("config.yaml"));
    }

    #[test]
    fn test_config_show_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let output = config(&paths, ConfigCommands::Show).unwrap();
        assert!(output.contains("time_precedence: explicit"));
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("taskline"));

        config(&paths, ConfigCommands::Init { force: false }).unwrap();
        assert!(paths.config_file.exists());

        let err = config(&paths, ConfigCommands::Init { force: false }).unwrap_err();
        assert!(matches!(err, TasklineError::Config(_)));

        config(&paths, ConfigCommands::Init { force: true }).unwrap();
    }
}
