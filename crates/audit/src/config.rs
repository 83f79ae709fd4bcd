use pwdist_core::Unit;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Thresholds deciding when two passwords count as trivial variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Pairs at or below this edit distance are variants.
    pub max_distance: usize,
    /// Pairs at or above this similarity ratio are variants.
    pub min_similarity: f32,
    /// Passwords shorter than this are only ever identical or distinct.
    pub min_length: usize,
    pub unit: Unit,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_distance: 3,
            min_similarity: 0.75,
            min_length: 4,
            unit: Unit::Char,
        }
    }
}

impl AuditConfig {
    pub fn from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        let config: AuditConfig = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_similarity.is_finite() || !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(ConfigError::Invalid(format!(
                "min_similarity must be within 0.0..=1.0, got {}",
                self.min_similarity
            )));
        }
        Ok(())
    }
}
