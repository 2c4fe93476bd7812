use std::collections::BTreeSet;

use scadgen_core::constants::MAX_REPAIR_ATTEMPTS;
use scadgen_core::errors::BackendError;
use scadgen_core::models::{DegradationEvent, GenerationAttempt};
use scadgen_core::traits::ICodeValidator;
use scadgen_observability::tracing_setup::events;
use scadgen_observability::{generation_span, repair_span, validation_span};
use tracing::debug;

use super::state::RepairState;
use crate::composer::PromptComposer;
use crate::generator::CodeGenerator;

/// Result of a finished repair loop.
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    /// `Accepted` or `Exhausted`.
    pub state: RepairState,
    /// Every attempt, in index order.
    pub attempts: Vec<GenerationAttempt>,
    /// Every state entered after the initial `Generating`.
    pub transitions: Vec<RepairState>,
    /// Transport failures absorbed by the generator.
    pub degradations: Vec<DegradationEvent>,
}

impl RepairOutcome {
    /// The accepted attempt, if the loop ended in `Accepted`.
    pub fn accepted(&self) -> Option<&GenerationAttempt> {
        match self.state {
            RepairState::Accepted => self.attempts.last(),
            _ => None,
        }
    }
}

/// Drives the repair state machine for one base prompt.
pub struct Repairer<'a> {
    generator: &'a CodeGenerator,
    validator: &'a dyn ICodeValidator,
    composer: PromptComposer,
    max_attempts: u32,
}

impl<'a> Repairer<'a> {
    /// `max_attempts` is clamped to `1..=MAX_REPAIR_ATTEMPTS`.
    pub fn new(
        generator: &'a CodeGenerator,
        validator: &'a dyn ICodeValidator,
        max_attempts: u32,
    ) -> Self {
        Self {
            generator,
            validator,
            composer: PromptComposer::new(),
            max_attempts: max_attempts.clamp(1, MAX_REPAIR_ATTEMPTS),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run until an attempt validates cleanly or the budget is spent.
    ///
    /// Only an unrecoverable backend error escapes; transport retries
    /// happen inside the generator and never count as attempts.
    pub fn run(
        &self,
        base_prompt: &str,
        libraries: &BTreeSet<String>,
    ) -> Result<RepairOutcome, BackendError> {
        let mut state = RepairState::Generating;
        let mut index = 1u32;
        let mut prompt = base_prompt.to_string();
        let mut response = String::new();
        let mut attempts: Vec<GenerationAttempt> = Vec::new();
        let mut transitions = Vec::new();
        let mut degradations = Vec::new();

        while !state.is_terminal() {
            state = match state {
                RepairState::Generating => {
                    let _span = generation_span!(self.generator.backend_name(), index).entered();
                    let generated = self.generator.generate(&prompt)?;
                    degradations.extend(generated.degradations);
                    response = generated.text;
                    RepairState::Validating
                }
                RepairState::Validating => {
                    let _span = validation_span!(index).entered();
                    let report = self.validator.validate(&response, libraries);
                    let attempt = GenerationAttempt::new(
                        index,
                        prompt.clone(),
                        std::mem::take(&mut response),
                        report,
                    );
                    let next = RepairState::after_validation(
                        attempt.is_accepted(),
                        index,
                        self.max_attempts,
                    );
                    if !attempt.is_accepted() {
                        events::attempt_rejected(index, attempt.issues.len());
                    }
                    attempts.push(attempt);
                    next
                }
                RepairState::NeedsRepair => {
                    // NeedsRepair is only entered right after an attempt was pushed.
                    if let Some(failed) = attempts.last() {
                        let _span = repair_span!(index, failed.issues.len()).entered();
                        prompt = self.composer.compose_correction(base_prompt, failed);
                    }
                    index += 1;
                    RepairState::Generating
                }
                RepairState::Accepted | RepairState::Exhausted => state,
            };
            debug!(state = %state, attempt = index, "repair transition");
            transitions.push(state);
        }

        Ok(RepairOutcome {
            state,
            attempts,
            transitions,
            degradations,
        })
    }
}
