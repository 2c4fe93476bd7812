use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::chunk::RetrievedChunk;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedChunk {
    pub chunk: RetrievedChunk,
    pub combined_score: f64,
}

/// Ordered, deduplicated, budget-bounded context for prompt composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedContext {
    entries: Vec<RankedChunk>,
    /// Character budget the context was truncated to.
    pub budget_chars: usize,
    /// Unique candidates dropped by the budget.
    pub dropped: usize,
}

impl RankedContext {
    pub fn new(entries: Vec<RankedChunk>, budget_chars: usize, dropped: usize) -> Self {
        Self {
            entries,
            budget_chars,
            dropped,
        }
    }

    pub fn entries(&self) -> &[RankedChunk] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_chars(&self) -> usize {
        self.entries.iter().map(|e| e.chunk.code.chars().count()).sum()
    }

    pub fn chunk_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.chunk.chunk_id.as_str()).collect()
    }

    /// Libraries the context draws from.
    pub fn libraries(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.chunk.library.as_str()).collect()
    }
}
