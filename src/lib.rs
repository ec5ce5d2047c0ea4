//! Rotating JSON-lines logger
//!
//! A process-local, concurrency-safe structured log writer. Records are
//! any [`serde::Serialize`] value, written one compact JSON object per
//! line (JSON-lines). The active file is rotated when it reaches a
//! configured line count or age, whichever comes first; rotation is
//! decided synchronously before each write, so no background timer is
//! involved.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use jsonl_logger::{Logger, LoggerConfig, Record};
//!
//! # fn main() -> jsonl_logger::Result<()> {
//! let config = LoggerConfig::new()
//!     .with_filename_prefix("example")
//!     .with_log_dir("./logs")
//!     .with_max_lines(100)
//!     .with_rotation_time(Duration::from_secs(30 * 60));
//!
//! let logger = Logger::new(config)?;
//!
//! let mut record = Record::new();
//! record.insert("message".to_string(), "Hello, Logger!".into());
//! logger.log(&record)?;
//!
//! logger.close()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod encoder;
mod error;
mod logger;
mod policy;
mod stats;
mod writer;

pub use config::LoggerConfig;
pub use encoder::{encode, Record};
pub use error::{Error, Result};
pub use logger::Logger;
pub use policy::RotationPolicy;
pub use stats::StatsSnapshot;
