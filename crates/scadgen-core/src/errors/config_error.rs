/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },

    #[error("unknown {field} value: {value}")]
    UnknownVariant { field: String, value: String },
}
