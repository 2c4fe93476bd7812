use super::{BackendError, ConfigError, RequestError, RetrievalError};

/// Top-level error for the generation pipeline.
///
/// Only request and backend failures are meant to reach a caller;
/// retrieval and validation problems are recovered inside the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ScadgenError {
    #[error("malformed request: {0}")]
    Request(#[from] RequestError),

    #[error("generation backend failure: {0}")]
    Backend(#[from] BackendError),

    #[error("retrieval failure: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ScadgenError {
    /// Whether retrying the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Backend(e) => e.is_retryable(),
            Self::Retrieval(RetrievalError::StoreUnavailable { .. }) => true,
            _ => false,
        }
    }
}
