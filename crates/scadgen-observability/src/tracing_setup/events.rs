//! Structured log events for pipeline milestones.

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a generation attempt rejected by validation.
pub fn attempt_rejected(attempt: u32, issues: usize) {
    tracing::info!(
        event = "attempt_rejected",
        attempt = attempt,
        issues = issues,
        "attempt rejected, repairing"
    );
}

/// Log an accepted artifact.
pub fn artifact_accepted(attempt: u32, complexity: u32) {
    tracing::info!(
        event = "artifact_accepted",
        attempt = attempt,
        complexity = complexity,
        "artifact accepted"
    );
}

/// Log that the fallback template was emitted.
pub fn fallback_emitted(attempts: usize) {
    tracing::warn!(
        event = "fallback_emitted",
        attempts = attempts,
        "repair budget exhausted, emitting fallback template"
    );
}
