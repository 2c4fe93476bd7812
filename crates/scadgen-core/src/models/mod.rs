pub mod artifact;
pub mod attempt;
pub mod chunk;
pub mod complexity;
pub mod context;
pub mod degradation_event;
pub mod design_request;
pub mod generation_options;
pub mod manufacturing;
pub mod query;
pub mod requirements;
pub mod validation;

pub use artifact::{ArtifactOutcome, GeneratedArtifact};
pub use attempt::GenerationAttempt;
pub use chunk::{ChunkMetadata, RetrievedChunk, StoreHit};
pub use complexity::{ComplexityReport, RenderBucket, Suggestion};
pub use context::{RankedChunk, RankedContext};
pub use degradation_event::DegradationEvent;
pub use design_request::DesignRequest;
pub use generation_options::{BackendKind, GenerationOptions};
pub use manufacturing::ManufacturingMethod;
pub use query::{QueryTag, RetrievalQuery};
pub use requirements::{ExtractedRequirements, Requirement, RequirementCategory, RequirementValue};
pub use validation::{IssueKind, IssueLocation, ValidationIssue, ValidationReport};
