//! Configuration for the extraction pipeline

use crate::error::IntelError;
use corpintel_domain::ModelTier;
use serde::{Deserialize, Serialize};

/// Default model for [`ModelTier::Fast`]
pub const DEFAULT_FAST_MODEL: &str = "gpt-3.5-turbo";

/// Default model for [`ModelTier::Strong`]
pub const DEFAULT_STRONG_MODEL: &str = "gpt-4.1-mini";

/// Configuration for the extraction pipeline
///
/// Operations choose a model tier, token budget and temperature themselves.
/// This only decides which model identifier each tier resolves to, and how
/// many per-company lookups the analyzer may run at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelConfig {
    /// Model used for the fast tier
    #[serde(default = "default_fast_model")]
    pub fast_model: String,

    /// Model used for the strong tier
    #[serde(default = "default_strong_model")]
    pub strong_model: String,

    /// Upper bound on concurrent per-company lookups in the analyzer
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

fn default_fast_model() -> String {
    DEFAULT_FAST_MODEL.to_string()
}

fn default_strong_model() -> String {
    DEFAULT_STRONG_MODEL.to_string()
}

fn default_max_concurrency() -> usize {
    4
}

impl IntelConfig {
    /// Model identifier for a tier
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast_model,
            ModelTier::Strong => &self.strong_model,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), IntelError> {
        if self.fast_model.trim().is_empty() {
            return Err(IntelError::Config("fast_model must not be empty".to_string()));
        }
        if self.strong_model.trim().is_empty() {
            return Err(IntelError::Config("strong_model must not be empty".to_string()));
        }
        if self.max_concurrency == 0 {
            return Err(IntelError::Config(
                "max_concurrency must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, IntelError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| IntelError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, IntelError> {
        toml::to_string_pretty(self)
            .map_err(|e| IntelError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for IntelConfig {
    fn default() -> Self {
        Self {
            fast_model: default_fast_model(),
            strong_model: default_strong_model(),
            max_concurrency: default_max_concurrency(),
        }
    }
}
