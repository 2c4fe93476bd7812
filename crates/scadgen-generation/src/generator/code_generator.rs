use std::sync::Arc;
use std::time::Duration;

use scadgen_core::config::GenerationConfig;
use scadgen_core::errors::BackendError;
use scadgen_core::models::{DegradationEvent, GenerationOptions};
use scadgen_core::traits::IGenerationBackend;
use tracing::{debug, warn};

/// Transport retry schedule. Backoff doubles after each failure up to
/// `max_backoff`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            max_retries: config.transport_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}

/// Raw backend text plus the transport failures absorbed to get it.
#[derive(Debug, Clone)]
pub struct GeneratedResponse {
    pub text: String,
    pub transport_failures: u32,
    pub degradations: Vec<DegradationEvent>,
}

pub struct CodeGenerator {
    backend: Arc<dyn IGenerationBackend>,
    options: GenerationOptions,
    retry: RetryPolicy,
}

impl CodeGenerator {
    pub fn new(
        backend: Arc<dyn IGenerationBackend>,
        options: GenerationOptions,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            backend,
            options,
            retry,
        }
    }

    pub fn from_config(backend: Arc<dyn IGenerationBackend>, config: &GenerationConfig) -> Self {
        Self::new(backend, config.options(), RetryPolicy::from_config(config))
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Call the backend, retrying transport failures and timeouts.
    ///
    /// Any text the backend returns, empty included, is a success here, and
    /// an undecodable response becomes empty text. Other non-retryable
    /// errors return at once; retryable ones return
    /// `RetriesExhausted` after `max_retries + 1` tries.
    pub fn generate(&self, prompt: &str) -> Result<GeneratedResponse, BackendError> {
        let mut backoff = self.retry.initial_backoff;
        let mut degradations = Vec::new();
        let mut last_err = String::new();

        for attempt in 0..=self.retry.max_retries {
            if attempt > 0 {
                debug!(
                    backend = self.backend.name(),
                    "retry attempt {}/{} after {:?}",
                    attempt,
                    self.retry.max_retries,
                    backoff
                );
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.retry.max_backoff);
            }

            match self.backend.generate(prompt, &self.options) {
                Ok(text) => {
                    return Ok(GeneratedResponse {
                        text,
                        transport_failures: attempt,
                        degradations,
                    });
                }
                Err(e) if e.is_retryable() => {
                    warn!(backend = self.backend.name(), error = %e, "transport failure");
                    degradations.push(DegradationEvent::new(
                        "generation",
                        e.to_string(),
                        "retry after backoff",
                    ));
                    last_err = e.to_string();
                }
                Err(e @ BackendError::InvalidResponse { .. }) => {
                    // Undecodable output still spends a repair attempt as empty text.
                    warn!(backend = self.backend.name(), error = %e, "unreadable backend response");
                    degradations.push(DegradationEvent::new(
                        "generation",
                        e.to_string(),
                        "empty response passed to validation",
                    ));
                    return Ok(GeneratedResponse {
                        text: String::new(),
                        transport_failures: attempt,
                        degradations,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Err(BackendError::RetriesExhausted {
            backend: self.backend.name().to_string(),
            attempts: self.retry.max_retries + 1,
            last: last_err,
        })
    }
}
