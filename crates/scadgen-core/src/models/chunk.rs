use serde::{Deserialize, Serialize};

use super::query::RetrievalQuery;

/// Raw result returned by a retrieval store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreHit {
    pub chunk_id: String,
    pub text: String,
    pub library: String,
    /// Similarity in [0.0, 1.0].
    pub score: f64,
}

/// A store hit annotated with the query that found it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub chunk_id: String,
    pub library: String,
    pub code: String,
    pub similarity: f64,
    pub query: RetrievalQuery,
}

impl RetrievedChunk {
    pub fn from_hit(hit: StoreHit, query: &RetrievalQuery) -> Self {
        Self {
            chunk_id: hit.chunk_id,
            library: hit.library,
            code: hit.text,
            similarity: hit.score.clamp(0.0, 1.0),
            query: query.clone(),
        }
    }

    /// Similarity weighted by the originating query.
    pub fn combined_score(&self) -> f64 {
        self.similarity * self.query.weight
    }
}

/// One record of the chunk metadata file (JSON lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub chunk_file: String,
    pub library: String,
    #[serde(default)]
    pub chunk_index: usize,
    #[serde(default)]
    pub source_path: String,
}

impl ChunkMetadata {
    /// Stable identifier: the chunk file name without its extension.
    pub fn chunk_id(&self) -> String {
        let name = self
            .chunk_file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.chunk_file);
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => name.to_string(),
        }
    }
}
