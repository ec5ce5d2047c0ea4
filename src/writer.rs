//! Active file management
//!
//! Owns the single open output file: create, append, close. File names
//! combine the configured prefix, a UTC timestamp, and a sequence number,
//! so names are unique within a run (monotonic sequence) and across
//! process restarts sharing a directory (timestamp component, with a
//! sequence retry on the rare collision).

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use chrono::Utc;
use tracing::debug;

use crate::config::LoggerConfig;
use crate::error::{Result, Error};

// Sequence retries before giving up on a name collision
const MAX_OPEN_ATTEMPTS: u64 = 128;

/// The currently open output file
///
/// At most one `ActiveFile` exists per logger at any instant. The line
/// count and open time feed the rotation decision before each write.
#[derive(Debug)]
pub(crate) struct ActiveFile {
    path: PathBuf,
    line_count: usize,
    opened_at: Instant,
    writer: BufWriter<File>,
}

impl ActiveFile {
    /// Open a fresh output file for the given sequence number
    ///
    /// Returns the file and the sequence number actually used; the caller
    /// continues numbering from the next value. `create_new` guards
    /// against clobbering a file left by an earlier run in the same
    /// second, in which case the next sequence number is tried.
    pub fn open(config: &LoggerConfig, sequence: u64) -> Result<(Self, u64)> {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S");

        for seq in sequence..sequence.saturating_add(MAX_OPEN_ATTEMPTS) {
            let name = format!("{}_{}_{:04}.jsonl", config.filename_prefix, timestamp, seq);
            let path = config.log_dir.join(name);

            match OpenOptions::new().append(true).create_new(true).open(&path) {
                Ok(file) => {
                    debug!(path = %path.display(), "opened log file");
                    return Ok((
                        Self {
                            path,
                            line_count: 0,
                            opened_at: Instant::now(),
                            writer: BufWriter::new(file),
                        },
                        seq,
                    ));
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }

        Err(Error::rotation(
            &config.log_dir,
            format!("could not find an unused file name after {} attempts", MAX_OPEN_ATTEMPTS),
        ))
    }

    /// Append one encoded line plus the newline terminator
    pub fn append(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.line_count += 1;
        Ok(())
    }

    /// Flush buffered data and close the file
    pub fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        debug!(path = %self.path.display(), lines = self.line_count, "closed log file");
        Ok(())
    }

    /// Number of lines written to this file so far
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Instant at which this file was opened
    pub fn opened_at(&self) -> Instant {
        self.opened_at
    }

    /// Path of this file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
