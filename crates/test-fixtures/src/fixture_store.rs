use std::collections::HashSet;

use scadgen_core::errors::RetrievalError;
use scadgen_core::models::StoreHit;
use scadgen_core::traits::IRetrievalStore;
use serde::Deserialize;

/// Hits returned for any query containing `keyword`.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureEntry {
    pub keyword: String,
    pub hits: Vec<StoreHit>,
}

/// Deterministic in-memory store keyed by query keywords.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureStore {
    entries: Vec<FixtureEntry>,
    /// Queries containing any of these keywords fail as unavailable.
    #[serde(default)]
    fail_on: Vec<String>,
}

impl FixtureStore {
    pub fn new(entries: Vec<FixtureEntry>) -> Self {
        Self {
            entries,
            fail_on: Vec::new(),
        }
    }

    pub fn failing_on(mut self, keyword: impl Into<String>) -> Self {
        self.fail_on.push(keyword.into().to_lowercase());
        self
    }
}

impl IRetrievalStore for FixtureStore {
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<StoreHit>, RetrievalError> {
        let lower = query.to_lowercase();
        if let Some(keyword) = self.fail_on.iter().find(|k| lower.contains(k.as_str())) {
            return Err(RetrievalError::StoreUnavailable {
                store: self.name().to_string(),
                reason: format!("scripted failure on {keyword:?}"),
            });
        }
        let mut hits: Vec<StoreHit> = self
            .entries
            .iter()
            .filter(|e| lower.contains(&e.keyword.to_lowercase()))
            .flat_map(|e| e.hits.iter().cloned())
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.chunk_id.cmp(&b.chunk_id))
        });
        let mut seen = HashSet::new();
        hits.retain(|h| seen.insert(h.chunk_id.clone()));
        hits.truncate(top_k);
        Ok(hits)
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
