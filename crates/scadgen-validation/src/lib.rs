//! # scadgen-validation
//!
//! Lightweight structural linter for generated OpenSCAD code and a static
//! render-complexity estimator. Neither is a full grammar parser: both run
//! over a small comment- and string-aware token stream.

pub mod checks;
pub mod complexity;
pub mod engine;
pub mod extraction;
pub mod lexer;
pub mod libraries;

pub use complexity::ComplexityAnalyzer;
pub use engine::Validator;
pub use extraction::extract_code;
