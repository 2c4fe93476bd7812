//! Generation backend adapters, selected by configuration.

mod anthropic;
mod http;
mod ollama;
mod openai;

pub use anthropic::AnthropicBackend;
pub use ollama::OllamaBackend;
pub use openai::OpenAiBackend;

use std::sync::Arc;

use scadgen_core::config::GenerationConfig;
use scadgen_core::errors::BackendError;
use scadgen_core::models::BackendKind;
use scadgen_core::traits::IGenerationBackend;
use tracing::info;

/// Build the backend named by `config.backend`. Keys are read from the
/// environment here, once.
pub fn create_backend(
    config: &GenerationConfig,
) -> Result<Arc<dyn IGenerationBackend>, BackendError> {
    let endpoint = config.endpoint().to_string();
    let backend: Arc<dyn IGenerationBackend> = match config.backend {
        BackendKind::OpenAi => {
            let key = http::required_key(BackendKind::OpenAi, config.api_key_env())?;
            Arc::new(OpenAiBackend::new(endpoint, key)?)
        }
        BackendKind::Anthropic => {
            let key = http::required_key(BackendKind::Anthropic, config.api_key_env())?;
            Arc::new(AnthropicBackend::new(endpoint, key)?)
        }
        BackendKind::Ollama => {
            let key = http::optional_key(config.api_key_env());
            Arc::new(OllamaBackend::new(endpoint, key)?)
        }
    };
    info!(
        backend = backend.name(),
        endpoint = config.endpoint(),
        "generation backend ready"
    );
    Ok(backend)
}
