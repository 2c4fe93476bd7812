//! Parallel per-query fan-out against a retrieval store.

use std::collections::BTreeSet;
use std::sync::Arc;

use rayon::prelude::*;
use scadgen_core::constants::{MAX_TOP_K, MIN_PREFERRED_LIBRARY_HITS};
use scadgen_core::models::{DegradationEvent, RetrievalQuery, RetrievedChunk, StoreHit};
use scadgen_core::traits::IRetrievalStore;
use tracing::{debug, warn};

/// Candidates from every query plus any per-query failures that were absorbed.
#[derive(Debug, Clone, Default)]
pub struct RetrievalBatch {
    pub chunks: Vec<RetrievedChunk>,
    pub degradations: Vec<DegradationEvent>,
}

pub struct MultiQueryRetriever {
    store: Arc<dyn IRetrievalStore>,
    top_k: usize,
}

impl MultiQueryRetriever {
    pub fn new(store: Arc<dyn IRetrievalStore>, top_k: usize) -> Self {
        Self {
            store,
            top_k: top_k.clamp(1, MAX_TOP_K),
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Run every query. A failing query contributes no chunks and one
    /// degradation event; it never aborts the batch.
    ///
    /// When `libraries` is non-empty and a query returns at least
    /// [`MIN_PREFERRED_LIBRARY_HITS`] hits from them, that query keeps only
    /// those hits.
    pub fn retrieve(&self, queries: &[RetrievalQuery], libraries: &BTreeSet<String>) -> RetrievalBatch {
        let preferred: BTreeSet<String> = libraries.iter().map(|l| l.to_lowercase()).collect();
        let results: Vec<Result<Vec<RetrievedChunk>, DegradationEvent>> = queries
            .par_iter()
            .map(|query| self.retrieve_one(query, &preferred))
            .collect();

        let mut batch = RetrievalBatch::default();
        for result in results {
            match result {
                Ok(chunks) => batch.chunks.extend(chunks),
                Err(event) => batch.degradations.push(event),
            }
        }
        debug!(
            queries = queries.len(),
            chunks = batch.chunks.len(),
            failed = batch.degradations.len(),
            "retrieval fan-out complete"
        );
        batch
    }

    fn retrieve_one(
        &self,
        query: &RetrievalQuery,
        preferred: &BTreeSet<String>,
    ) -> Result<Vec<RetrievedChunk>, DegradationEvent> {
        // Over-fetch so the preferred subset can still fill top_k.
        let fetch = if preferred.is_empty() {
            self.top_k
        } else {
            (self.top_k * 2).min(MAX_TOP_K)
        };
        match self.store.search(&query.text, fetch) {
            Ok(mut hits) => {
                hits.sort_by(|a, b| b.score.total_cmp(&a.score));
                prefer_libraries(&mut hits, preferred);
                hits.truncate(self.top_k);
                Ok(hits
                    .into_iter()
                    .map(|hit| RetrievedChunk::from_hit(hit, query))
                    .collect())
            }
            Err(e) => {
                warn!(
                    store = self.store.name(),
                    query = %query.text,
                    error = %e,
                    "retrieval query failed, continuing without it"
                );
                Err(DegradationEvent::new(
                    "retrieval",
                    format!("query {:?} failed: {e}", query.text),
                    "empty result for query",
                ))
            }
        }
    }
}

/// Keep only hits from `preferred` (lowercased names) when enough of them matched.
fn prefer_libraries(hits: &mut Vec<StoreHit>, preferred: &BTreeSet<String>) {
    if preferred.is_empty() {
        return;
    }
    let is_preferred = |hit: &StoreHit| preferred.contains(&hit.library.to_lowercase());
    let matching = hits.iter().filter(|h| is_preferred(h)).count();
    if matching >= MIN_PREFERRED_LIBRARY_HITS {
        hits.retain(is_preferred);
        debug!(kept = matching, "restricted query hits to requested libraries");
    }
}
