use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{BackendKind, GenerationOptions};

/// Generation backend configuration. API keys are read from the
/// environment variable named here, never from the file itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub backend: BackendKind,
    /// Model variant. Unset uses the backend's default.
    pub variant: Option<String>,
    /// Unset means 0.2.
    pub temperature: Option<f32>,
    pub max_tokens: u32,
    /// Unset uses the backend's public endpoint.
    pub endpoint: Option<String>,
    pub api_key_env: Option<String>,
    pub timeout_secs: u64,
    /// Retries for transport failures within one attempt.
    pub transport_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            variant: None,
            temperature: None,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            endpoint: None,
            api_key_env: None,
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            transport_retries: defaults::DEFAULT_TRANSPORT_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
        }
    }
}

impl GenerationConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.backend.default_endpoint())
    }

    pub fn api_key_env(&self) -> Option<&str> {
        self.api_key_env
            .as_deref()
            .or_else(|| self.backend.default_api_key_env())
    }

    /// Resolve unset fields into concrete per-call options.
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            backend: self.backend,
            variant: self
                .variant
                .clone()
                .unwrap_or_else(|| self.backend.default_variant().to_string()),
            temperature: self.temperature.unwrap_or(defaults::DEFAULT_TEMPERATURE),
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
