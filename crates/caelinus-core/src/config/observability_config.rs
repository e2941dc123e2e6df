//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive used when `CAELINUS_LOG` is unset. Default: "info".
    pub log_level: Option<String>,
    /// Emit JSON lines instead of human-readable output. Default: false.
    pub json_logs: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn effective_json_logs(&self) -> bool {
        self.json_logs.unwrap_or(false)
    }
}
