/// Generation backend errors.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{backend}: transport failure: {reason}")]
    Transport { backend: String, reason: String },

    #[error("{backend}: timed out after {after_ms}ms")]
    Timeout { backend: String, after_ms: u64 },

    #[error("{backend}: request rejected with status {status}: {body}")]
    Rejected {
        backend: String,
        status: u16,
        body: String,
    },

    #[error("{backend}: unreadable response: {reason}")]
    InvalidResponse { backend: String, reason: String },

    #[error("{backend}: all {attempts} transport attempts failed, last error: {last}")]
    RetriesExhausted {
        backend: String,
        attempts: u32,
        last: String,
    },

    #[error("{backend}: API key variable {variable} is not set")]
    MissingApiKey { backend: String, variable: String },
}

impl BackendError {
    /// Transport failures and timeouts may succeed on a later try.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}
