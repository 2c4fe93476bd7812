//! RetrievalEngine: analyze → plan → retrieve → rank for one design request.

use std::sync::Arc;

use scadgen_core::config::RetrievalConfig;
use scadgen_core::models::{
    DegradationEvent, DesignRequest, ExtractedRequirements, ManufacturingMethod, RankedContext,
    RetrievalQuery,
};
use scadgen_core::traits::IRetrievalStore;
use tracing::info;

use crate::analysis::PromptAnalyzer;
use crate::planning::QueryPlanner;
use crate::ranking::ContextRanker;
use crate::search::MultiQueryRetriever;

/// Everything the generation stage needs from retrieval.
#[derive(Debug, Clone)]
pub struct RetrievalOutput {
    pub requirements: ExtractedRequirements,
    /// Explicit request method, else the one named in the prompt, else none.
    pub method: ManufacturingMethod,
    pub queries: Vec<RetrievalQuery>,
    pub context: RankedContext,
    pub degradations: Vec<DegradationEvent>,
}

pub struct RetrievalEngine {
    analyzer: PromptAnalyzer,
    planner: QueryPlanner,
    retriever: MultiQueryRetriever,
    ranker: ContextRanker,
}

impl RetrievalEngine {
    pub fn new(store: Arc<dyn IRetrievalStore>, config: &RetrievalConfig) -> Self {
        Self {
            analyzer: PromptAnalyzer::new(),
            planner: QueryPlanner::new(),
            retriever: MultiQueryRetriever::new(store, config.effective_top_k()),
            ranker: ContextRanker::new(config.context_budget_chars),
        }
    }

    /// Never fails: store errors degrade to less context.
    pub fn run(&self, request: &DesignRequest) -> RetrievalOutput {
        let requirements = self.analyzer.analyze(request);
        let method = request
            .method()
            .or(requirements.detected_method)
            .unwrap_or_default();
        let queries = self.planner.plan(request.text(), &requirements, method);
        let batch = self.retriever.retrieve(&queries, request.libraries());
        let context = self.ranker.rank(batch.chunks);

        info!(
            queries = queries.len(),
            context_chunks = context.len(),
            context_chars = context.total_chars(),
            degraded = batch.degradations.len(),
            method = %method,
            "retrieval complete"
        );

        RetrievalOutput {
            requirements,
            method,
            queries,
            context,
            degradations: batch.degradations,
        }
    }
}
