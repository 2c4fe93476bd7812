use serde::{Deserialize, Serialize};

use super::defaults;

/// Limits applied to incoming design requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Longest accepted prompt, in characters.
    pub max_prompt_chars: usize,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: defaults::DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}
