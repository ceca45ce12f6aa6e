//! Session metrics tracking.

use crate::error::CommandError;
use crate::interpreter::Command;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for one interactive session.
///
/// Cheap to clone; clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    lines_total: Arc<AtomicU64>,
    commands_total: Arc<AtomicU64>,
    rejected_total: Arc<AtomicU64>,
}

impl SessionMetrics {
    /// Create a new metrics tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track one input line and its parse outcome.
    pub fn track_line(&self, outcome: &Result<Command, CommandError>) {
        self.lines_total.fetch_add(1, Ordering::Relaxed);
        match outcome {
            Ok(_) => {
                self.commands_total.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.rejected_total.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(error = %e, "input line rejected");
            }
        }
    }

    /// Total input lines seen.
    pub fn lines_total(&self) -> u64 {
        self.lines_total.load(Ordering::Relaxed)
    }

    /// Lines that parsed to a command.
    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    /// Lines rejected as malformed or unknown.
    pub fn rejected_total(&self) -> u64 {
        self.rejected_total.load(Ordering::Relaxed)
    }

    /// Summary of all counters, suitable for an end-of-session log line.
    pub fn summary(&self) -> String {
        format!(
            "lines: {}, commands: {}, rejected: {}",
            self.lines_total(),
            self.commands_total(),
            self.rejected_total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = SessionMetrics::new();
        assert_eq!(metrics.lines_total(), 0);
        assert_eq!(metrics.commands_total(), 0);
        assert_eq!(metrics.rejected_total(), 0);
    }

    #[test]
    fn test_track_line_splits_by_outcome() {
        let metrics = SessionMetrics::new();
        metrics.track_line(&Command::parse("hello"));
        metrics.track_line(&Command::parse("foobar"));
        metrics.track_line(&Command::parse("add John"));

        assert_eq!(metrics.lines_total(), 3);
        assert_eq!(metrics.commands_total(), 1);
        assert_eq!(metrics.rejected_total(), 2);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = SessionMetrics::new();
        let clone = metrics.clone();
        clone.track_line(&Command::parse("hello"));

        assert_eq!(metrics.lines_total(), 1);
    }

    #[test]
    fn test_summary_format() {
        let metrics = SessionMetrics::new();
        metrics.track_line(&Command::parse("hello"));
        assert_eq!(metrics.summary(), "lines: 1, commands: 1, rejected: 0");
    }
}
