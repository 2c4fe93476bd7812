//! # scadgen-retrieval
//!
//! Turns a design request into ranked reference context:
//! analyze → plan → retrieve (parallel, per query) → rank.

pub mod analysis;
pub mod engine;
pub mod planning;
pub mod ranking;
pub mod search;
pub mod stores;

pub use analysis::PromptAnalyzer;
pub use engine::{RetrievalEngine, RetrievalOutput};
pub use planning::QueryPlanner;
pub use ranking::ContextRanker;
pub use search::{MultiQueryRetriever, RetrievalBatch};
pub use stores::{create_store, ChromaStore, LexicalStore};
