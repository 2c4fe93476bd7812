mod backend;
mod store;
mod validator;

pub use backend::IGenerationBackend;
pub use store::IRetrievalStore;
pub use validator::ICodeValidator;
