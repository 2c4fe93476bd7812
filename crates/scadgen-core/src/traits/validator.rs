use std::collections::BTreeSet;

use crate::models::ValidationReport;

/// Static checks over a raw backend response.
pub trait ICodeValidator: Send + Sync {
    /// Extract code from `raw` and report every issue found.
    /// `libraries` are the libraries the request asked for.
    fn validate(&self, raw: &str, libraries: &BTreeSet<String>) -> ValidationReport;
}
