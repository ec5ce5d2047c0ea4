//! Logger counters
//!
//! Cheap atomic counters updated on every operation, exposed as a
//! point-in-time snapshot through [`Logger::stats`](crate::Logger::stats).

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counter collector for a single logger instance
#[derive(Debug, Default)]
pub(crate) struct StatsCollector {
    /// Number of lines written across all files
    lines_written: AtomicUsize,
    /// Number of bytes written, newline terminators included
    bytes_written: AtomicUsize,
    /// Number of completed rotations
    rotations: AtomicUsize,
    /// Number of rotations that failed to open a new file and fell back
    /// to the current one
    degraded_rotations: AtomicUsize,
    /// Number of records rejected because they could not be encoded
    encode_failures: AtomicUsize,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one appended line of the given encoded length
    pub fn record_line(&self, encoded_len: usize) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
        // +1 for the newline terminator
        self.bytes_written.fetch_add(encoded_len + 1, Ordering::Relaxed);
    }

    /// Increment the rotation count
    pub fn increment_rotations(&self) {
        self.rotations.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the degraded rotation count
    pub fn increment_degraded_rotations(&self) {
        self.degraded_rotations.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the encode failure count
    pub fn increment_encode_failures(&self) {
        self.encode_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lines_written: self.lines_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            degraded_rotations: self.degraded_rotations.load(Ordering::Relaxed),
            encode_failures: self.encode_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of a logger's counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct StatsSnapshot {
    /// Number of lines written across all files
    pub lines_written: usize,
    /// Number of bytes written, newline terminators included
    pub bytes_written: usize,
    /// Number of completed rotations
    pub rotations: usize,
    /// Number of degraded rotations (new file could not be opened)
    pub degraded_rotations: usize,
    /// Number of records rejected as not JSON-representable
    pub encode_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let stats = StatsCollector::new();

        stats.record_line(10);
        stats.record_line(20);
        stats.increment_rotations();
        stats.increment_encode_failures();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.lines_written, 2);
        assert_eq!(snapshot.bytes_written, 32); // 10+1 + 20+1
        assert_eq!(snapshot.rotations, 1);
        assert_eq!(snapshot.degraded_rotations, 0);
        assert_eq!(snapshot.encode_failures, 1);
    }
}
