use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_TOP_K;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// In-process term-frequency index over chunk files on disk.
    #[default]
    Lexical,
    /// Remote Chroma collection queried over HTTP.
    Chroma,
}

/// Retrieval store location and credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub kind: StoreKind,
    /// JSON-lines chunk metadata file.
    pub metadata_path: String,
    /// Directory holding chunk source files.
    pub chunks_dir: String,
    pub url: String,
    pub collection: String,
    pub embedding_model: String,
    pub embedding_endpoint: String,
    /// Environment variable holding the embedding API key.
    pub api_key_env: Option<String>,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            metadata_path: defaults::DEFAULT_METADATA_PATH.to_string(),
            chunks_dir: defaults::DEFAULT_CHUNKS_DIR.to_string(),
            url: defaults::DEFAULT_CHROMA_URL.to_string(),
            collection: defaults::DEFAULT_CHROMA_COLLECTION.to_string(),
            embedding_model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            api_key_env: Some("OPENAI_API_KEY".to_string()),
            timeout_secs: defaults::DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Results requested per query. Clamped to `1..=MAX_TOP_K`.
    pub top_k: usize,
    /// Character budget for ranked context.
    pub context_budget_chars: usize,
    pub store: StoreConfig,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            context_budget_chars: defaults::DEFAULT_CONTEXT_BUDGET_CHARS,
            store: StoreConfig::default(),
        }
    }
}

impl RetrievalConfig {
    pub fn effective_top_k(&self) -> usize {
        self.top_k.clamp(1, MAX_TOP_K)
    }
}
