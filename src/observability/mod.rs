//! Observability: metrics counters and operation timing.
//!
//! Logging itself goes through `tracing`; the subscriber is installed in
//! `main.rs` and writes to stderr.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
