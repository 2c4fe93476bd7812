use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderBucket {
    Quick,
    Moderate,
    Heavy,
}

impl RenderBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }
}

impl fmt::Display for RenderBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An optimisation hint tied to the pattern that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub pattern: String,
    pub message: String,
}

impl Suggestion {
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Estimated render cost of a piece of OpenSCAD code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub modules: usize,
    pub primitives: usize,
    pub boolean_ops: usize,
    pub score: f64,
    pub bucket: RenderBucket,
    pub suggestions: Vec<Suggestion>,
}
