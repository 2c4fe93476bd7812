//! Degradation tracking for a single pipeline run.

pub mod tracker;

pub use tracker::DegradationTracker;
