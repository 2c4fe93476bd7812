//! Span definitions per pipeline stage: run, retrieval, generation,
//! validation, repair.

/// Create the span wrapping one full pipeline run.
#[macro_export]
macro_rules! pipeline_span {
    ($run_id:expr, $prompt_chars:expr) => {
        tracing::info_span!("scadgen.pipeline", run_id = %$run_id, prompt_chars = $prompt_chars)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($store:expr) => {
        tracing::info_span!("scadgen.retrieval", store = %$store)
    };
}

/// Create a span for one backend call.
#[macro_export]
macro_rules! generation_span {
    ($backend:expr, $attempt:expr) => {
        tracing::info_span!("scadgen.generation", backend = %$backend, attempt = $attempt)
    };
}

/// Create a validation span.
#[macro_export]
macro_rules! validation_span {
    ($attempt:expr) => {
        tracing::debug_span!("scadgen.validation", attempt = $attempt)
    };
}

/// Create a repair span.
#[macro_export]
macro_rules! repair_span {
    ($attempt:expr, $issues:expr) => {
        tracing::info_span!("scadgen.repair", attempt = $attempt, issues = $issues)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "scadgen.pipeline";
    pub const RETRIEVAL: &str = "scadgen.retrieval";
    pub const GENERATION: &str = "scadgen.generation";
    pub const VALIDATION: &str = "scadgen.validation";
    pub const REPAIR: &str = "scadgen.repair";
}
