pub mod client_config;
pub mod entitlement_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use client_config::ClientConfig;
pub use entitlement_config::EntitlementConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CaelinusConfig {
    pub entitlements: EntitlementConfig,
    pub client: ClientConfig,
    pub observability: ObservabilityConfig,
}

impl CaelinusConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.client.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
            }
        }
        if let Some(secs) = self.client.timeout_secs {
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout { secs });
            }
        }
        Ok(())
    }
}
