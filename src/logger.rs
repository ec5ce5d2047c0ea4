//! The rotating JSON-lines logger
//!
//! The public façade combining the encoder, rotation policy, and file
//! writer under a single mutex. The whole check-rotate-encode-append
//! sequence runs inside one critical section, so concurrent callers never
//! interleave their bytes and never race on the rotation decision.

use std::fs;
use std::time::Instant;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::LoggerConfig;
use crate::encoder;
use crate::error::{Result, Error};
use crate::policy::RotationPolicy;
use crate::stats::{StatsCollector, StatsSnapshot};
use crate::writer::ActiveFile;

/// State guarded by the logger's mutex
///
/// `file` is `None` once the logger has been closed; every write path
/// checks that first.
#[derive(Debug)]
struct Inner {
    file: Option<ActiveFile>,
    sequence: u64,
}

/// A process-local, concurrency-safe rotating JSON-lines logger
///
/// Each instance owns its files exclusively; multiple independent loggers
/// can coexist, including over different prefixes in the same directory.
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
    policy: RotationPolicy,
    stats: StatsCollector,
    inner: Mutex<Inner>,
}

impl Logger {
    /// Construct a logger, validating the configuration and opening the
    /// initial output file
    ///
    /// The log directory is created if absent. A directory that cannot be
    /// created or written to fails construction with a configuration
    /// error.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        config.validate()?;

        fs::create_dir_all(&config.log_dir).map_err(|e| {
            Error::config(format!(
                "Failed to create log directory {}: {}",
                config.log_dir.display(),
                e
            ))
        })?;

        let (file, used_seq) = ActiveFile::open(&config, 0).map_err(|e| {
            Error::config(format!(
                "Log directory {} is not writable: {}",
                config.log_dir.display(),
                e
            ))
        })?;

        let policy = RotationPolicy::from_config(&config);

        Ok(Self {
            config,
            policy,
            stats: StatsCollector::new(),
            inner: Mutex::new(Inner {
                file: Some(file),
                sequence: used_seq + 1,
            }),
        })
    }

    /// Write one record as a single JSON line
    ///
    /// Thread-safe; the rotation check, any rotation, encoding, and the
    /// append execute as one atomic unit per call. A record that cannot
    /// be encoded fails this call only; the logger stays usable and
    /// nothing is written for it.
    pub fn log<T: Serialize + ?Sized>(&self, record: &T) -> Result<()> {
        let mut inner = self.inner.lock();

        let file = inner.file.as_ref().ok_or(Error::Closed)?;
        if self
            .policy
            .should_rotate(file.line_count(), file.opened_at(), Instant::now())
        {
            self.rotate(&mut inner)?;
        }

        let line = match encoder::encode(record) {
            Ok(line) => line,
            Err(e) => {
                self.stats.increment_encode_failures();
                return Err(e);
            }
        };

        let file = inner.file.as_mut().ok_or(Error::Closed)?;
        file.append(&line)?;
        self.stats.record_line(line.len());

        Ok(())
    }

    /// Flush and close the current file
    ///
    /// Terminal and idempotent-safe: the first call closes the file,
    /// later calls are no-ops. Subsequent [`log`](Self::log) calls fail
    /// with a closed error rather than silently dropping data. Because
    /// close takes the same mutex as `log`, it happens-after any
    /// in-flight write.
    pub fn close(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        match inner.file.take() {
            Some(file) => file.close(),
            None => Ok(()),
        }
    }

    /// Check whether the logger still accepts records
    pub fn is_open(&self) -> bool {
        self.inner.lock().file.is_some()
    }

    /// Get the logger's configuration
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Get a point-in-time snapshot of the logger's counters
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Replace the active file with a freshly opened one
    ///
    /// If the new file cannot be opened, the pending record is not lost:
    /// the current file stays active and the failure is surfaced as a
    /// warning plus a degraded-rotation count. The file may then exceed
    /// `max_lines` until a later rotation succeeds.
    fn rotate(&self, inner: &mut Inner) -> Result<()> {
        match ActiveFile::open(&self.config, inner.sequence) {
            Ok((new_file, used_seq)) => {
                inner.sequence = used_seq + 1;
                if let Some(old) = inner.file.replace(new_file) {
                    debug!(from = %old.path().display(), "rotating log file");
                    old.close()?;
                }
                self.stats.increment_rotations();
                Ok(())
            }
            Err(e) => {
                warn!(
                    error = %e,
                    dir = %self.config.log_dir.display(),
                    "rotation failed, continuing with current file"
                );
                self.stats.increment_degraded_rotations();
                Ok(())
            }
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "error closing logger");
        }
    }
}
