//! Rotation policy
//!
//! A pure decision function over the active file's line count and age.
//! The check runs synchronously before each write rather than on a
//! background timer, so rotation is deterministic relative to call order
//! and a write can never race a timer firing.

use std::time::{Duration, Instant};

use crate::config::LoggerConfig;

/// Size-or-time rotation predicate
#[derive(Debug, Clone, Copy)]
pub struct RotationPolicy {
    max_lines: usize,
    rotation_time: Duration,
}

impl RotationPolicy {
    /// Create a policy from a validated configuration
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            max_lines: config.max_lines,
            rotation_time: config.rotation_time,
        }
    }

    /// Decide whether to rotate before accepting the next record
    ///
    /// Returns true iff `line_count >= max_lines` or the file's age has
    /// reached `rotation_time`. When both conditions hold at once the
    /// caller performs a single rotation, not two.
    pub fn should_rotate(&self, line_count: usize, opened_at: Instant, now: Instant) -> bool {
        line_count >= self.max_lines
            || now.saturating_duration_since(opened_at) >= self.rotation_time
    }
}
