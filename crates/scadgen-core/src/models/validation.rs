use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    SyntaxError,
    UnbalancedDelimiter,
    UndeclaredVariableUse,
    MissingLibraryImport,
    EmptyOutput,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax-error",
            Self::UnbalancedDelimiter => "unbalanced-delimiter",
            Self::UndeclaredVariableUse => "undeclared-variable-use",
            Self::MissingLibraryImport => "missing-library-import",
            Self::EmptyOutput => "empty-output",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLocation {
    Line(usize),
    Module(String),
}

impl fmt::Display for IssueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(n) => write!(f, "line {n}"),
            Self::Module(name) => write!(f, "module `{name}`"),
        }
    }
}

/// A single problem found in generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub location: Option<IssueLocation>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            location: None,
            message: message.into(),
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.location = Some(IssueLocation::Line(line));
        self
    }

    pub fn in_module(mut self, name: impl Into<String>) -> Self {
        self.location = Some(IssueLocation::Module(name.into()));
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "[{}] {}: {}", self.kind, loc, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

/// Extracted code plus every issue found in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub code: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_accepted(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }
}
