//! In-process term-frequency index with cosine similarity.
//!
//! Lets the pipeline run without an external vector store.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use scadgen_core::errors::RetrievalError;
use scadgen_core::models::StoreHit;
use scadgen_core::traits::IRetrievalStore;
use tracing::{debug, warn};

use super::metadata::load_metadata;

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "of", "to", "in", "on", "a", "an", "is", "it", "be", "as", "at",
    "by", "or", "that", "this",
];

struct Document {
    id: String,
    library: String,
    text: String,
    weights: HashMap<String, f64>,
    norm: f64,
}

pub struct LexicalStore {
    documents: Vec<Document>,
}

impl LexicalStore {
    /// Index `(chunk_id, library, text)` triples.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = (String, String, String)>,
    {
        let documents = documents
            .into_iter()
            .map(|(id, library, text)| {
                let weights = term_frequencies(&text);
                let norm = norm(&weights);
                Document {
                    id,
                    library,
                    text,
                    weights,
                    norm,
                }
            })
            .collect();
        Self { documents }
    }

    /// Index every chunk named in the metadata file. Chunk files that
    /// cannot be read are skipped.
    pub fn load(metadata_path: &Path, chunks_dir: &Path) -> Result<Self, RetrievalError> {
        let records = load_metadata(metadata_path)?;
        let mut documents = Vec::with_capacity(records.len());
        for record in records {
            let path = chunks_dir.join(&record.chunk_file);
            match std::fs::read_to_string(&path) {
                Ok(text) => documents.push((record.chunk_id(), record.library, text)),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable chunk"),
            }
        }
        debug!(chunks = documents.len(), "lexical store loaded");
        Ok(Self::from_documents(documents))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl IRetrievalStore for LexicalStore {
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<StoreHit>, RetrievalError> {
        let query_weights = term_frequencies(query);
        let query_norm = norm(&query_weights);
        if query_norm == 0.0 {
            return Ok(Vec::new());
        }

        let mut hits: Vec<StoreHit> = self
            .documents
            .iter()
            .filter(|doc| doc.norm > 0.0)
            .filter_map(|doc| {
                let dot: f64 = query_weights
                    .iter()
                    .filter_map(|(term, qw)| doc.weights.get(term).map(|dw| qw * dw))
                    .sum();
                let score = dot / (query_norm * doc.norm);
                (score > 0.0).then(|| StoreHit {
                    chunk_id: doc.id.clone(),
                    text: doc.text.clone(),
                    library: doc.library.clone(),
                    score: score.min(1.0),
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.chunk_id.cmp(&b.chunk_id))
        });
        hits.truncate(top_k);
        Ok(hits)
    }

    fn name(&self) -> &str {
        "lexical"
    }
}

fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(str::to_lowercase)
        .filter(|t| !STOPWORDS.contains(&t.as_str()))
    {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn norm(weights: &HashMap<String, f64>) -> f64 {
    weights.values().map(|w| w * w).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LexicalStore {
        LexicalStore::from_documents(vec![
            ("gear_a".into(), "BOSL2".into(), "module spur_gear(teeth=20) { gear(teeth); }".into()),
            ("box_a".into(), "YAPP_Box".into(), "module box(width, height) { cube([width, 10, height]); }".into()),
            ("empty".into(), "none".into(), "".into()),
        ])
    }

    #[test]
    fn best_match_ranks_first() {
        let hits = store().search("spur gear teeth", 5).unwrap();
        assert_eq!(hits[0].chunk_id, "gear_a");
        assert!(hits.iter().all(|h| h.score > 0.0 && h.score <= 1.0));
    }

    #[test]
    fn unrelated_query_returns_nothing() {
        assert!(store().search("zzz qqq", 5).unwrap().is_empty());
    }

    #[test]
    fn top_k_bounds_results() {
        assert!(store().search("module", 1).unwrap().len() <= 1);
    }
}
