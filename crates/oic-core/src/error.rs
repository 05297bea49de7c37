//! Extension error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by concern
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The editor process could not be started. Carries the attempted
    /// command name so the diagnostic names the actual executable.
    #[error("Failed to launch '{command}': {reason}")]
    Spawn { command: String, reason: String },

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

impl Error {
    pub fn spawn(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Spawn {
            command: command.into(),
            reason: reason.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::spawn("code", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "Failed to launch 'code': No such file or directory"
        );

        let err = Error::logging("a global subscriber is already set");
        assert!(err.to_string().contains("already set"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::spawn("code", "test");
        let _ = Error::logging("test");
    }
}
