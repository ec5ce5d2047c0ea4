//! Error handling for the logger
//!
//! This module provides the error type and result alias shared by all
//! logger operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in logger operations
#[derive(Error, Debug)]
pub enum Error {
    /// Errors related to configuration, reported at construction time
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to I/O operations on the active file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to encoding a record as JSON
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Errors related to opening a replacement file during rotation
    #[error("Rotation error for {path:?}: {message}")]
    Rotation {
        path: PathBuf,
        message: String,
    },

    /// Write attempted after the logger was closed
    #[error("Logger is closed")]
    Closed,
}

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new rotation error
    pub fn rotation(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Rotation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if this is an encode error
    pub fn is_encode_error(&self) -> bool {
        matches!(self, Self::Encode(_))
    }

    /// Check if this is a rotation error
    pub fn is_rotation_error(&self) -> bool {
        matches!(self, Self::Rotation { .. })
    }

    /// Check if this error was caused by writing to a closed logger
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Get a user-friendly suggestion for resolving the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(_) => Some("Check the log directory path and the rotation limits".to_string()),
            Self::Io(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                Some("You don't have permission to write to the log directory".to_string())
            }
            Self::Rotation { .. } => {
                Some("Check available disk space and permissions on the log directory".to_string())
            }
            Self::Closed => Some("Create a new logger; a closed logger cannot be reused".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn test_error_creation() {
        let config_err = Error::config("max_lines must be positive");
        assert!(matches!(config_err, Error::Config(_)));
        assert!(config_err.is_config_error());

        let rotation_err = Error::rotation("/tmp/logs/app_0001.jsonl", "disk full");
        assert!(matches!(rotation_err, Error::Rotation { .. }));
        assert!(rotation_err.is_rotation_error());
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(err.is_io_error());

        let json_err = serde_json::Error::custom("key must be a string");
        let err = Error::from(json_err);
        assert!(err.is_encode_error());
    }

    #[test]
    fn test_error_suggestion() {
        let err = Error::Closed;
        assert!(err.is_closed());
        assert!(err.suggestion().unwrap().contains("closed"));

        let err = Error::rotation("/tmp/x", "disk full");
        assert!(err.suggestion().unwrap().contains("disk space"));
    }
}
