mod retriever;

pub use retriever::{MultiQueryRetriever, RetrievalBatch};
