//! # scadgen-observability
//!
//! Tracing subscriber setup, span and event definitions for pipeline
//! stages, and a per-run degradation tracker.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::DegradationTracker;
pub use tracing_setup::{init_tracing, init_tracing_json, init_tracing_with};
