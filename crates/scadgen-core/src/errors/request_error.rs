/// Rejections raised before the pipeline starts.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("design prompt is empty")]
    EmptyPrompt,

    #[error("design prompt is {length} characters, limit is {limit}")]
    PromptTooLong { length: usize, limit: usize },

    #[error("unknown manufacturing method: {value}")]
    UnknownManufacturingMethod { value: String },
}
