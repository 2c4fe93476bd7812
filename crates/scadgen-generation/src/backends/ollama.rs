//! Local Ollama `/api/generate` backend.

use reqwest::blocking::Client;
use scadgen_core::errors::BackendError;
use scadgen_core::models::GenerationOptions;
use scadgen_core::traits::IGenerationBackend;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http::{build_client, send_json};
use crate::composer::system_prompt;

const NAME: &str = "ollama";

#[derive(Debug, Serialize)]
struct SamplingOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'static str,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

pub struct OllamaBackend {
    client: Client,
    endpoint: String,
    /// Only sent when a proxy in front of Ollama wants one.
    api_key: Option<String>,
}

impl OllamaBackend {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self, BackendError> {
        Ok(Self {
            client: build_client(NAME)?,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

fn request_body<'a>(prompt: &'a str, options: &'a GenerationOptions) -> GenerateRequest<'a> {
    GenerateRequest {
        model: &options.variant,
        prompt,
        system: system_prompt(),
        stream: false,
        options: SamplingOptions {
            temperature: options.temperature,
            num_predict: options.max_tokens,
        },
    }
}

impl IGenerationBackend for OllamaBackend {
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, BackendError> {
        debug!(model = %options.variant, prompt_chars = prompt.len(), "ollama request");
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&request_body(prompt, options));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response: GenerateResponse = send_json(NAME, request, options.timeout)?;
        Ok(response.response)
    }

    fn name(&self) -> &str {
        NAME
    }
}
