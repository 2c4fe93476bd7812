mod ranker;

pub use ranker::ContextRanker;
