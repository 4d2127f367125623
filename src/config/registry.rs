//! Registry configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::RegistryOptions;

/// Identifier allocation settings
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Prefix of allocated display names
    #[serde(default = "default_display_prefix")]
    pub display_prefix: String,

    /// Prefix of allocated group ids
    #[serde(default = "default_group_prefix")]
    pub group_prefix: String,
}

impl RegistryConfig {
    /// Validate registry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_prefix("display", &self.display_prefix)?;
        validate_prefix("group", &self.group_prefix)?;
        if self.display_prefix == self.group_prefix {
            return Err(ValidationError::DuplicatePrefix);
        }
        Ok(())
    }
}

fn validate_prefix(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidPrefix {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            display_prefix: default_display_prefix(),
            group_prefix: default_group_prefix(),
        }
    }
}

impl From<&RegistryConfig> for RegistryOptions {
    fn from(config: &RegistryConfig) -> Self {
        Self {
            display_prefix: config.display_prefix.clone(),
            group_prefix: config.group_prefix.clone(),
        }
    }
}

fn default_display_prefix() -> String {
    "d".to_string()
}

fn default_group_prefix() -> String {
    "g".to_string()
}
