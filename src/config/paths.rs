//! Path resolution for taskline configuration files.
//!
//! Everything lives under `~/.taskline/` unless `TASKLINE_HOME` points
//! elsewhere:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::TasklineError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "TASKLINE_HOME";

/// Paths to taskline configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskline/`
    pub root: PathBuf,
    /// Config file: `~/.taskline/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `TASKLINE_HOME` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, TasklineError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            TasklineError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskline")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".taskline"))
        })
    }
}
