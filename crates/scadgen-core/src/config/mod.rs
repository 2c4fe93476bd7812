pub mod complexity_config;
pub mod defaults;
pub mod generation_config;
pub mod observability_config;
pub mod repair_config;
pub mod request_config;
pub mod retrieval_config;

pub use complexity_config::ComplexityConfig;
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use repair_config::RepairConfig;
pub use request_config::RequestConfig;
pub use retrieval_config::{RetrievalConfig, StoreConfig, StoreKind};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_REPAIR_ATTEMPTS;
use crate::errors::ConfigError;

/// Top-level scadgen configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScadgenConfig {
    pub request: RequestConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
    pub repair: RepairConfig,
    pub complexity: ComplexityConfig,
    pub observability: ObservabilityConfig,
}

impl ScadgenConfig {
    /// Parse and validate config from a TOML string. Missing fields use defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Invalid {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repair.max_attempts == 0 || self.repair.max_attempts > MAX_REPAIR_ATTEMPTS {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "repair.max_attempts must be between 1 and {MAX_REPAIR_ATTEMPTS}, got {}",
                    self.repair.max_attempts
                ),
            });
        }
        if self.retrieval.context_budget_chars == 0 {
            return Err(ConfigError::Invalid {
                reason: "retrieval.context_budget_chars must be positive".to_string(),
            });
        }
        if self.request.max_prompt_chars == 0 {
            return Err(ConfigError::Invalid {
                reason: "request.max_prompt_chars must be positive".to_string(),
            });
        }
        if let Some(t) = self.generation.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::Invalid {
                    reason: format!("generation.temperature must be within 0.0..=2.0, got {t}"),
                });
            }
        }
        if self.complexity.quick_below > self.complexity.heavy_above {
            return Err(ConfigError::Invalid {
                reason: "complexity.quick_below must not exceed complexity.heavy_above"
                    .to_string(),
            });
        }
        Ok(())
    }
}
