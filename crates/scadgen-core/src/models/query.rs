use serde::{Deserialize, Serialize};

/// What a retrieval query was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTag {
    Feature,
    Prompt,
    Manufacturing,
}

impl QueryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Prompt => "prompt",
            Self::Manufacturing => "manufacturing",
        }
    }
}

/// One search query produced by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalQuery {
    pub text: String,
    pub tag: QueryTag,
    /// Multiplier applied to store similarity when ranking.
    pub weight: f64,
    /// Plan position. Lower is earlier; used to break ranking ties.
    pub priority: usize,
}

impl RetrievalQuery {
    pub fn new(text: impl Into<String>, tag: QueryTag, weight: f64, priority: usize) -> Self {
        Self {
            text: text.into(),
            tag,
            weight,
            priority,
        }
    }
}
