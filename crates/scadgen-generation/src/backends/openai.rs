//! OpenAI-compatible chat completions backend.

use reqwest::blocking::Client;
use scadgen_core::errors::BackendError;
use scadgen_core::models::GenerationOptions;
use scadgen_core::traits::IGenerationBackend;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http::{build_client, send_json};
use crate::composer::system_prompt;

const NAME: &str = "openai";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiBackend {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiBackend {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, BackendError> {
        Ok(Self {
            client: build_client(NAME)?,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

fn request_body<'a>(prompt: &'a str, options: &'a GenerationOptions) -> ChatRequest<'a> {
    ChatRequest {
        model: &options.variant,
        messages: [
            ChatMessage {
                role: "system",
                content: system_prompt(),
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        temperature: options.temperature,
        max_tokens: options.max_tokens,
    }
}

impl IGenerationBackend for OpenAiBackend {
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, BackendError> {
        debug!(model = %options.variant, prompt_chars = prompt.len(), "openai request");
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body(prompt, options));
        let response: ChatResponse = send_json(NAME, request, options.timeout)?;
        // No choices is an empty answer; the validator reports it.
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        NAME
    }
}
