//! Chroma vector store over HTTP.
//!
//! Queries are embedded through an OpenAI-compatible embeddings endpoint,
//! then sent to the collection's query API.

use std::sync::OnceLock;
use std::time::Duration;

use scadgen_core::config::StoreConfig;
use scadgen_core::errors::RetrievalError;
use scadgen_core::models::StoreHit;
use scadgen_core::traits::IRetrievalStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

const STORE_NAME: &str = "chroma";

pub struct ChromaStore {
    client: reqwest::blocking::Client,
    base_url: String,
    collection: String,
    embedding_endpoint: String,
    embedding_model: String,
    api_key: Option<String>,
    collection_id: OnceLock<String>,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct CollectionResponse {
    id: String,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query_embeddings: [&'a [f32]; 1],
    n_results: usize,
    include: [&'static str; 3],
}

#[derive(Deserialize)]
struct QueryResponse {
    ids: Vec<Vec<String>>,
    #[serde(default)]
    documents: Option<Vec<Vec<Option<String>>>>,
    #[serde(default)]
    metadatas: Option<Vec<Vec<Option<ChunkLibrary>>>>,
    #[serde(default)]
    distances: Option<Vec<Vec<f64>>>,
}

#[derive(Deserialize)]
struct ChunkLibrary {
    #[serde(default)]
    library: Option<String>,
}

fn unavailable(reason: impl Into<String>) -> RetrievalError {
    RetrievalError::StoreUnavailable {
        store: STORE_NAME.to_string(),
        reason: reason.into(),
    }
}

fn failed(reason: impl Into<String>) -> RetrievalError {
    RetrievalError::SearchFailed {
        reason: reason.into(),
    }
}

impl ChromaStore {
    /// The embedding key is read from the configured environment variable.
    /// A missing key is tolerated for local endpoints that need none.
    pub fn new(config: &StoreConfig) -> Result<Self, RetrievalError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| unavailable(e.to_string()))?;
        let api_key = config
            .api_key_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty());
        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            collection: config.collection.clone(),
            embedding_endpoint: config.embedding_endpoint.clone(),
            embedding_model: config.embedding_model.clone(),
            api_key,
            collection_id: OnceLock::new(),
        })
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let mut request = self
            .client
            .post(&self.embedding_endpoint)
            .json(&EmbeddingRequest {
                model: &self.embedding_model,
                input: [text],
            });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request
            .send()
            .map_err(|e| unavailable(format!("embedding request: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(failed(format!("embedding endpoint returned {status}: {body}")));
        }
        let parsed: EmbeddingResponse = response
            .json()
            .map_err(|e| failed(format!("embedding response: {e}")))?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| failed("embedding response had no data"))
    }

    fn collection_id(&self) -> Result<&str, RetrievalError> {
        if let Some(id) = self.collection_id.get() {
            return Ok(id);
        }
        let url = format!("{}/api/v1/collections/{}", self.base_url, self.collection);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!(
                "collection {} lookup returned {status}",
                self.collection
            )));
        }
        let parsed: CollectionResponse = response
            .json()
            .map_err(|e| failed(format!("collection response: {e}")))?;
        debug!(collection = %self.collection, id = %parsed.id, "resolved chroma collection");
        Ok(self.collection_id.get_or_init(|| parsed.id))
    }
}

impl IRetrievalStore for ChromaStore {
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<StoreHit>, RetrievalError> {
        let embedding = self.embed(query)?;
        let url = format!(
            "{}/api/v1/collections/{}/query",
            self.base_url,
            self.collection_id()?
        );
        let response = self
            .client
            .post(&url)
            .json(&QueryRequest {
                query_embeddings: [embedding.as_slice()],
                n_results: top_k,
                include: ["documents", "metadatas", "distances"],
            })
            .send()
            .map_err(|e| unavailable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(failed(format!("query returned {status}: {body}")));
        }
        let parsed: QueryResponse = response
            .json()
            .map_err(|e| failed(format!("query response: {e}")))?;
        Ok(into_hits(parsed))
    }

    fn name(&self) -> &str {
        STORE_NAME
    }
}

/// Flatten the single-query response. Cosine distance becomes similarity.
fn into_hits(response: QueryResponse) -> Vec<StoreHit> {
    let ids = response.ids.into_iter().next().unwrap_or_default();
    let documents = response
        .documents
        .and_then(|d| d.into_iter().next())
        .unwrap_or_default();
    let metadatas = response
        .metadatas
        .and_then(|m| m.into_iter().next())
        .unwrap_or_default();
    let distances = response
        .distances
        .and_then(|d| d.into_iter().next())
        .unwrap_or_default();

    let mut hits: Vec<StoreHit> = ids
        .into_iter()
        .enumerate()
        .filter_map(|(i, chunk_id)| {
            let text = documents.get(i).cloned().flatten()?;
            let library = metadatas
                .get(i)
                .and_then(Option::as_ref)
                .and_then(|m| m.library.clone())
                .unwrap_or_else(|| "unknown".to_string());
            let distance = distances.get(i).copied().unwrap_or(1.0);
            Some(StoreHit {
                chunk_id,
                text,
                library,
                score: (1.0 - distance).clamp(0.0, 1.0),
            })
        })
        .collect();
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_response_flattens_to_sorted_hits() {
        let json = r#"{
            "ids": [["a", "b", "c"]],
            "documents": [["module a() {}", null, "module c() {}"]],
            "metadatas": [[{"library": "BOSL2"}, null, {"chunk_index": 2}]],
            "distances": [[0.4, 0.1, 0.2]]
        }"#;
        let parsed: QueryResponse = serde_json::from_str(json).unwrap();
        let hits = into_hits(parsed);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].chunk_id, "c");
        assert_eq!(hits[0].library, "unknown");
        assert!((hits[1].score - 0.6).abs() < 1e-9);
    }
}
