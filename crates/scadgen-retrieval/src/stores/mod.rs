//! RetrievalStore adapters.

mod chroma;
mod lexical;
pub mod metadata;

pub use chroma::ChromaStore;
pub use lexical::LexicalStore;

use std::path::Path;
use std::sync::Arc;

use scadgen_core::config::{StoreConfig, StoreKind};
use scadgen_core::errors::RetrievalError;
use scadgen_core::traits::IRetrievalStore;
use tracing::info;

/// Build the store selected by configuration.
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn IRetrievalStore>, RetrievalError> {
    let store: Arc<dyn IRetrievalStore> = match config.kind {
        StoreKind::Lexical => Arc::new(LexicalStore::load(
            Path::new(&config.metadata_path),
            Path::new(&config.chunks_dir),
        )?),
        StoreKind::Chroma => Arc::new(ChromaStore::new(config)?),
    };
    info!(store = store.name(), "retrieval store ready");
    Ok(store)
}
