use serde::Serialize;

use super::attempt::GenerationAttempt;
use super::complexity::ComplexityReport;
use super::degradation_event::DegradationEvent;
use super::design_request::DesignRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactOutcome {
    /// Code from a backend attempt that passed validation.
    Accepted,
    /// Deterministic template used after every attempt failed validation.
    Fallback,
}

/// Final result of the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArtifact {
    pub code: String,
    pub request: DesignRequest,
    /// Attempt that produced the code; 0 for the fallback template.
    pub attempt_index: u32,
    pub outcome: ArtifactOutcome,
    pub complexity: ComplexityReport,
    pub attempts: Vec<GenerationAttempt>,
    pub degradations: Vec<DegradationEvent>,
}

impl GeneratedArtifact {
    pub fn is_fallback(&self) -> bool {
        self.outcome == ArtifactOutcome::Fallback
    }
}
