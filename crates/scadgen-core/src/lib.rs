//! # scadgen-core
//!
//! Foundation crate for the scadgen pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScadgenConfig;
pub use errors::{ScadgenError, ScadgenResult};
pub use models::{
    ComplexityReport, DesignRequest, ExtractedRequirements, GeneratedArtifact, GenerationAttempt,
    ManufacturingMethod, RankedContext, RetrievalQuery, RetrievedChunk, ValidationIssue,
};
