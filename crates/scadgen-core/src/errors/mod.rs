mod backend_error;
mod config_error;
mod request_error;
mod retrieval_error;
mod scadgen_error;

pub use backend_error::BackendError;
pub use config_error::ConfigError;
pub use request_error::RequestError;
pub use retrieval_error::RetrievalError;
pub use scadgen_error::ScadgenError;

/// Convenience alias used throughout the workspace.
pub type ScadgenResult<T> = Result<T, ScadgenError>;
