//! CodeGenerator: one backend call with transport retry and backoff.

mod code_generator;

pub use code_generator::{CodeGenerator, GeneratedResponse, RetryPolicy};
