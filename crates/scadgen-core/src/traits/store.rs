use crate::errors::RetrievalError;
use crate::models::StoreHit;

/// Similarity search over the library chunk corpus.
pub trait IRetrievalStore: Send + Sync {
    /// Return at most `top_k` hits for `query`, best first.
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<StoreHit>, RetrievalError>;

    /// Human-readable store name.
    fn name(&self) -> &str;
}
