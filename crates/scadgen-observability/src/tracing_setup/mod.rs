//! Tracing setup: subscriber initialisation, span definitions, event helpers.

pub mod events;
pub mod setup;
pub mod spans;

pub use setup::{default_directive, init_tracing, init_tracing_json, init_tracing_with, LOG_ENV};
