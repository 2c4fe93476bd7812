use crate::errors::BackendError;
use crate::models::GenerationOptions;

/// A text-generation service that turns a composed prompt into a raw response.
pub trait IGenerationBackend: Send + Sync {
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, BackendError>;

    fn name(&self) -> &str;
}
