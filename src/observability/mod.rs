//! Observability module for monitoring the interactive session.

pub mod metrics;

pub use metrics::SessionMetrics;
