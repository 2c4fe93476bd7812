//! Anthropic Messages API backend.

use reqwest::blocking::Client;
use scadgen_core::errors::BackendError;
use scadgen_core::models::GenerationOptions;
use scadgen_core::traits::IGenerationBackend;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http::{build_client, send_json};
use crate::composer::system_prompt;

const NAME: &str = "anthropic";
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    system: &'static str,
    messages: [Message<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

pub struct AnthropicBackend {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl AnthropicBackend {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, BackendError> {
        Ok(Self {
            client: build_client(NAME)?,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

fn request_body<'a>(prompt: &'a str, options: &'a GenerationOptions) -> MessagesRequest<'a> {
    MessagesRequest {
        model: &options.variant,
        system: system_prompt(),
        messages: [Message {
            role: "user",
            content: prompt,
        }],
        max_tokens: options.max_tokens,
        temperature: options.temperature,
    }
}

/// Text blocks joined in order; tool or other block types are skipped.
fn response_text(response: MessagesResponse) -> String {
    response
        .content
        .into_iter()
        .filter_map(|block| block.text)
        .collect::<Vec<_>>()
        .join("")
}

impl IGenerationBackend for AnthropicBackend {
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, BackendError> {
        debug!(model = %options.variant, prompt_chars = prompt.len(), "anthropic request");
        let request = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request_body(prompt, options));
        let response: MessagesResponse = send_json(NAME, request, options.timeout)?;
        Ok(response_text(response))
    }

    fn name(&self) -> &str {
        NAME
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use scadgen_core::models::BackendKind;

    use super::*;

    #[test]
    fn system_prompt_is_a_top_level_field() {
        let opts = GenerationOptions {
            backend: BackendKind::Anthropic,
            variant: "claude-3-5-sonnet-latest".to_string(),
            temperature: 0.2,
            max_tokens: 1000,
            timeout: Duration::from_secs(5),
        };
        let body = serde_json::to_value(request_body("a bracket", &opts)).unwrap();
        assert!(body["system"].as_str().unwrap().contains("OpenSCAD"));
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
    }

    #[test]
    fn text_blocks_are_concatenated() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"cube(1);"},{"type":"tool_use"},{"type":"text","text":"\nsphere(1);"}]}"#,
        )
        .unwrap();
        assert_eq!(response_text(parsed), "cube(1);\nsphere(1);");
    }
}
