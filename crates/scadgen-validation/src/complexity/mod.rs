mod analyzer;
mod suggestions;

pub use analyzer::ComplexityAnalyzer;
