//! Validator: extract the code region, then run every structural check.

use std::collections::BTreeSet;

use scadgen_core::models::{IssueKind, ValidationIssue, ValidationReport};
use scadgen_core::traits::ICodeValidator;
use tracing::debug;

use crate::checks::{declarations, delimiters, imports, syntax};
use crate::extraction::extract_code;
use crate::lexer::tokenize;

#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Check code that has already been extracted.
    pub fn check_code(&self, code: &str, libraries: &BTreeSet<String>) -> Vec<ValidationIssue> {
        let lexed = tokenize(code);
        if lexed.tokens.is_empty() {
            return vec![ValidationIssue::new(
                IssueKind::EmptyOutput,
                "no OpenSCAD code found in the response",
            )];
        }
        let mut issues = lexed.issues;
        issues.extend(delimiters::check(&lexed.tokens));
        issues.extend(syntax::check(&lexed.tokens));
        issues.extend(declarations::check(&lexed.tokens));
        issues.extend(imports::check(&lexed.tokens, libraries));
        issues
    }
}

impl ICodeValidator for Validator {
    fn validate(&self, raw: &str, libraries: &BTreeSet<String>) -> ValidationReport {
        let code = extract_code(raw);
        let issues = self.check_code(&code, libraries);
        debug!(
            code_chars = code.len(),
            issues = issues.len(),
            "validated generated code"
        );
        ValidationReport { code, issues }
    }
}
