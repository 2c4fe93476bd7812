//! GenerationPipeline: a design request in, a GeneratedArtifact out.

use std::sync::Arc;

use scadgen_core::config::ScadgenConfig;
use scadgen_core::errors::ScadgenResult;
use scadgen_core::models::{
    ArtifactOutcome, DegradationEvent, DesignRequest, GeneratedArtifact,
};
use scadgen_core::traits::{IGenerationBackend, IRetrievalStore};
use scadgen_observability::tracing_setup::events;
use scadgen_observability::{pipeline_span, retrieval_span, DegradationTracker};
use scadgen_retrieval::{create_store, LexicalStore, RetrievalEngine, RetrievalOutput};
use scadgen_validation::{ComplexityAnalyzer, Validator};
use tracing::{info, warn};
use uuid::Uuid;

use crate::backends::create_backend;
use crate::composer::PromptComposer;
use crate::generator::CodeGenerator;
use crate::repair::{fallback_template, Repairer};

/// Retrieval output and the composed first-attempt prompt.
#[derive(Debug, Clone)]
pub struct PreparedPrompt {
    pub retrieval: RetrievalOutput,
    pub prompt: String,
}

pub struct GenerationPipeline {
    store_name: String,
    retrieval: RetrievalEngine,
    composer: PromptComposer,
    generator: CodeGenerator,
    validator: Validator,
    complexity: ComplexityAnalyzer,
    max_attempts: u32,
    max_prompt_chars: usize,
    /// Failures absorbed while building the pipeline, reported on every run.
    setup_degradations: Vec<DegradationEvent>,
}

impl GenerationPipeline {
    pub fn new(
        store: Arc<dyn IRetrievalStore>,
        backend: Arc<dyn IGenerationBackend>,
        config: &ScadgenConfig,
    ) -> Self {
        Self {
            store_name: store.name().to_string(),
            retrieval: RetrievalEngine::new(store, &config.retrieval),
            composer: PromptComposer::new(),
            generator: CodeGenerator::from_config(backend, &config.generation),
            validator: Validator::new(),
            complexity: ComplexityAnalyzer::new(config.complexity.clone()),
            max_attempts: config.repair.max_attempts,
            max_prompt_chars: config.request.max_prompt_chars,
            setup_degradations: Vec::new(),
        }
    }

    /// Validate the configuration and build the configured store and backend.
    pub fn from_config(config: &ScadgenConfig) -> ScadgenResult<Self> {
        config.validate()?;
        let backend = create_backend(&config.generation)?;
        Self::with_backend(config, backend)
    }

    /// Build the configured store around an existing backend.
    ///
    /// A store that cannot be built is replaced by an empty one, so runs
    /// proceed without reference code and carry a `retrieval` degradation.
    pub fn with_backend(
        config: &ScadgenConfig,
        backend: Arc<dyn IGenerationBackend>,
    ) -> ScadgenResult<Self> {
        config.validate()?;
        let mut setup_degradations = Vec::new();
        let store: Arc<dyn IRetrievalStore> = match create_store(&config.retrieval.store) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "retrieval store unavailable, continuing without context");
                setup_degradations.push(DegradationEvent::new(
                    "retrieval",
                    e.to_string(),
                    "empty store",
                ));
                Arc::new(LexicalStore::from_documents(Vec::<(String, String, String)>::new()))
            }
        };
        let mut pipeline = Self::new(store, backend, config);
        pipeline.setup_degradations = setup_degradations;
        Ok(pipeline)
    }

    /// Retrieval plus prompt composition, without calling the backend.
    pub fn prepare(&self, request: &DesignRequest) -> ScadgenResult<PreparedPrompt> {
        request.check_length(self.max_prompt_chars)?;
        let retrieval = {
            let _span = retrieval_span!(self.store_name).entered();
            self.retrieval.run(request)
        };
        let prompt = self.composer.compose(
            request,
            &retrieval.requirements,
            retrieval.method,
            &retrieval.context,
        );
        Ok(PreparedPrompt { retrieval, prompt })
    }

    /// Run the whole pipeline.
    ///
    /// Fails only on a malformed request or an unrecoverable backend
    /// error. Exhausting the repair budget yields a fallback artifact.
    pub fn run(&self, request: &DesignRequest) -> ScadgenResult<GeneratedArtifact> {
        let run_id = Uuid::new_v4();
        let span = pipeline_span!(run_id, request.text().chars().count());
        let _enter = span.enter();

        let prepared = self.prepare(request)?;
        let mut tracker = DegradationTracker::new();
        tracker.record_all(self.setup_degradations.iter().cloned());
        tracker.record_all(prepared.retrieval.degradations.iter().cloned());

        let repairer = Repairer::new(&self.generator, &self.validator, self.max_attempts);
        let outcome = repairer.run(&prepared.prompt, request.libraries())?;
        tracker.record_all(outcome.degradations.iter().cloned());

        let (code, attempt_index, result) = match outcome.accepted() {
            Some(attempt) => (attempt.code.clone(), attempt.index, ArtifactOutcome::Accepted),
            None => {
                events::fallback_emitted(outcome.attempts.len());
                tracker.record(DegradationEvent::new(
                    "repair",
                    format!(
                        "{} attempt(s) failed validation",
                        outcome.attempts.len()
                    ),
                    "fallback template",
                ));
                (
                    fallback_template(
                        request.text(),
                        &prepared.retrieval.requirements,
                        request.libraries(),
                    ),
                    0,
                    ArtifactOutcome::Fallback,
                )
            }
        };

        let complexity = self.complexity.analyze(&code);
        if result == ArtifactOutcome::Accepted {
            events::artifact_accepted(attempt_index, complexity.score.round() as u32);
        }
        info!(
            run_id = %run_id,
            attempts = outcome.attempts.len(),
            fallback = result == ArtifactOutcome::Fallback,
            score = complexity.score,
            bucket = ?complexity.bucket,
            "pipeline finished"
        );

        Ok(GeneratedArtifact {
            code,
            request: request.clone(),
            attempt_index,
            outcome: result,
            complexity,
            attempts: outcome.attempts,
            degradations: tracker.into_events(),
        })
    }
}
