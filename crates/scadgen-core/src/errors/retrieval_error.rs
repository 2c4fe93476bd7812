/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("store {store} unavailable: {reason}")]
    StoreUnavailable { store: String, reason: String },

    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("chunk metadata line {line}: {reason}")]
    MetadataParse { line: usize, reason: String },
}
