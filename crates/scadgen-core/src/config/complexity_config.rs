use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights and bucket thresholds for render-cost scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityConfig {
    pub module_weight: f64,
    pub primitive_weight: f64,
    pub boolean_weight: f64,
    /// Scores below this are a quick render.
    pub quick_below: f64,
    /// Scores above this are a heavy render.
    pub heavy_above: f64,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            module_weight: defaults::DEFAULT_MODULE_WEIGHT,
            primitive_weight: defaults::DEFAULT_PRIMITIVE_WEIGHT,
            boolean_weight: defaults::DEFAULT_BOOLEAN_WEIGHT,
            quick_below: defaults::DEFAULT_QUICK_BELOW,
            heavy_above: defaults::DEFAULT_HEAVY_ABOVE,
        }
    }
}
