//! Cross-query merge: weight, dedup by chunk id, deterministic sort, budget.

use std::cmp::Ordering;
use std::collections::HashMap;

use scadgen_core::models::{RankedChunk, RankedContext, RetrievedChunk};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ContextRanker {
    budget_chars: usize,
}

impl ContextRanker {
    pub fn new(budget_chars: usize) -> Self {
        Self { budget_chars }
    }

    pub fn rank(&self, chunks: Vec<RetrievedChunk>) -> RankedContext {
        let mut best: HashMap<String, RankedChunk> = HashMap::new();
        for chunk in chunks {
            let candidate = RankedChunk {
                combined_score: chunk.combined_score(),
                chunk,
            };
            match best.get(&candidate.chunk.chunk_id) {
                Some(existing) if compare(existing, &candidate) != Ordering::Greater => {}
                _ => {
                    best.insert(candidate.chunk.chunk_id.clone(), candidate);
                }
            }
        }

        let mut ordered: Vec<RankedChunk> = best.into_values().collect();
        ordered.sort_by(compare);

        let unique = ordered.len();
        let mut used = 0usize;
        let kept: Vec<RankedChunk> = ordered
            .into_iter()
            .take_while(|entry| {
                used += entry.chunk.code.chars().count();
                used <= self.budget_chars
            })
            .collect();
        let dropped = unique - kept.len();

        debug!(
            unique,
            kept = kept.len(),
            dropped,
            budget = self.budget_chars,
            "ranked retrieval context"
        );
        RankedContext::new(kept, self.budget_chars, dropped)
    }
}

/// Score descending, then query priority, then chunk id.
/// `Less` means `a` ranks before `b`.
fn compare(a: &RankedChunk, b: &RankedChunk) -> Ordering {
    b.combined_score
        .total_cmp(&a.combined_score)
        .then_with(|| a.chunk.query.priority.cmp(&b.chunk.query.priority))
        .then_with(|| a.chunk.chunk_id.cmp(&b.chunk.chunk_id))
}
