//! Configuration for the logger
//!
//! This module provides configuration options for the rotating
//! JSON-lines logger.

use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::error::{Result, Error};

/// Configuration options for a rotating JSON-lines logger
///
/// The configuration is immutable once a logger has been constructed
/// from it. Invalid values are rejected by [`validate`](Self::validate),
/// which runs during construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct LoggerConfig {
    /// Prefix for every log file name
    pub filename_prefix: String,
    /// Directory where log files are written; created if absent
    pub log_dir: PathBuf,
    /// Maximum number of lines per file before rotation
    pub max_lines: usize,
    /// Maximum age of a file before rotation
    pub rotation_time: Duration,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filename_prefix: "log".to_string(),
            log_dir: PathBuf::from("./logs"),
            max_lines: 10_000,
            rotation_time: Duration::from_secs(60 * 60), // 1 hour
        }
    }
}

impl LoggerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name prefix
    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    /// Set the log directory
    pub fn with_log_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.log_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the maximum number of lines per file
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the maximum age of a file before rotation
    pub fn with_rotation_time(mut self, rotation_time: Duration) -> Self {
        self.rotation_time = rotation_time;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.filename_prefix.is_empty() {
            return Err(Error::config("Filename prefix must not be empty"));
        }

        if self.filename_prefix.chars().any(std::path::is_separator) {
            return Err(Error::config(
                "Filename prefix must not contain path separators"
            ));
        }

        if self.max_lines == 0 {
            return Err(Error::config("Maximum lines per file must be at least 1"));
        }

        if self.rotation_time.is_zero() {
            return Err(Error::config("Rotation time must be greater than zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();

        assert_eq!(config.filename_prefix, "log");
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
        assert_eq!(config.max_lines, 10_000);
        assert_eq!(config.rotation_time, Duration::from_secs(3600));

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = LoggerConfig::new()
            .with_filename_prefix("example")
            .with_log_dir("/tmp/example-logs")
            .with_max_lines(100)
            .with_rotation_time(Duration::from_secs(30 * 60));

        assert_eq!(config.filename_prefix, "example");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/example-logs"));
        assert_eq!(config.max_lines, 100);
        assert_eq!(config.rotation_time, Duration::from_secs(1800));

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let invalid_configs = vec![
            LoggerConfig::new().with_filename_prefix(""), // Empty prefix
            LoggerConfig::new().with_filename_prefix("a/b"), // Path separator
            LoggerConfig::new().with_max_lines(0), // No lines allowed
            LoggerConfig::new().with_rotation_time(Duration::ZERO), // No age allowed
        ];

        for config in invalid_configs {
            let err = config.validate().unwrap_err();
            assert!(err.is_config_error());
        }
    }
}
