//! # scadgen-generation
//!
//! Prompt composition, pluggable generation backends, the bounded
//! generate → validate → repair loop, and `GenerationPipeline`, which runs a
//! design request end to end.

pub mod backends;
pub mod composer;
pub mod engine;
pub mod generator;
pub mod repair;

pub use backends::create_backend;
pub use composer::{system_prompt, PromptComposer};
pub use engine::{GenerationPipeline, PreparedPrompt};
pub use generator::{CodeGenerator, GeneratedResponse, RetryPolicy};
pub use repair::{fallback_template, RepairOutcome, RepairState, Repairer};
