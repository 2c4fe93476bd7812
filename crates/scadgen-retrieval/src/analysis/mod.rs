//! Heuristic requirement extraction from free-text prompts.

mod analyzer;
pub mod lexicon;
mod patterns;

pub use analyzer::PromptAnalyzer;
