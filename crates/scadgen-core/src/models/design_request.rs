use std::collections::BTreeSet;

use serde::Serialize;

use super::manufacturing::ManufacturingMethod;
use crate::errors::RequestError;

/// A natural-language design request. The pipeline's entry point.
///
/// Construction validates the prompt text; the request is not modified
/// once the pipeline has started.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignRequest {
    text: String,
    method: Option<ManufacturingMethod>,
    libraries: BTreeSet<String>,
}

impl DesignRequest {
    /// Create a request from raw prompt text. Surrounding whitespace is trimmed.
    pub fn new(text: impl Into<String>) -> Result<Self, RequestError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(RequestError::EmptyPrompt);
        }
        Ok(Self {
            text,
            method: None,
            libraries: BTreeSet::new(),
        })
    }

    /// Set the target manufacturing method.
    pub fn with_method(mut self, method: Option<ManufacturingMethod>) -> Self {
        self.method = method;
        self
    }

    /// Set library preferences. Blank names, and names that cannot appear
    /// inside a `use <...>` path, are ignored.
    pub fn with_libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.libraries = libraries
            .into_iter()
            .map(Into::into)
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty() && l.chars().all(is_library_char))
            .collect();
        self
    }

    /// Reject prompts longer than `limit` characters.
    pub fn check_length(&self, limit: usize) -> Result<(), RequestError> {
        let length = self.text.chars().count();
        if length > limit {
            return Err(RequestError::PromptTooLong { length, limit });
        }
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Manufacturing method explicitly chosen by the caller, if any.
    pub fn method(&self) -> Option<ManufacturingMethod> {
        self.method
    }

    pub fn libraries(&self) -> &BTreeSet<String> {
        &self.libraries
    }
}

fn is_library_char(c: char) -> bool {
    !c.is_control() && !matches!(c, '<' | '>' | '/' | '\\')
}
