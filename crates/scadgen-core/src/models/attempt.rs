use serde::{Deserialize, Serialize};

use super::validation::{ValidationIssue, ValidationReport};

/// Record of one generate/validate round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationAttempt {
    /// 1-based attempt number.
    pub index: u32,
    pub prompt: String,
    /// blake3 of the prompt, for comparing runs.
    pub prompt_hash: String,
    pub response: String,
    pub code: String,
    pub issues: Vec<ValidationIssue>,
}

impl GenerationAttempt {
    pub fn new(index: u32, prompt: String, response: String, report: ValidationReport) -> Self {
        let prompt_hash = blake3::hash(prompt.as_bytes()).to_hex().to_string();
        Self {
            index,
            prompt,
            prompt_hash,
            response,
            code: report.code,
            issues: report.issues,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.issues.is_empty()
    }
}
