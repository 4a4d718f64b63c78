//! Error types for taskline.
//!
//! The parser itself never fails; these errors come from the layers around
//! it (configuration, CLI input, output encoding).

use thiserror::Error;

/// Errors produced by the taskline CLI and configuration layers.
#[derive(Debug, Error)]
pub enum TasklineError {
    /// Configuration could not be located, read, or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A date supplied on the command line was not `YYYY-MM-DD`.
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl TasklineError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDate(_) => 2,
            Self::Config(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TasklineError::Config("missing root".to_string());
        assert_eq!(err.to_string(), "config error: missing root");

        let err = TasklineError::InvalidDate("13/45".to_string());
        assert!(err.to_string().contains("13/45"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(TasklineError::InvalidDate("x".to_string()).exit_code(), 2);
        assert_eq!(TasklineError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TasklineError = io.into();
        assert!(matches!(err, TasklineError::Io(_)));
    }
}
