//! Subscription backend client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the subscription REST client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, e.g. "https://api.caelinus.app". Required before any request.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds. Default: 10.
    pub timeout_secs: Option<u64>,
    /// Bearer token sent with every request. The only local state this crate keeps.
    pub auth_token: Option<String>,
    /// Path for the subscription snapshot. Default: "/subscription-status".
    pub status_path: Option<String>,
    /// Path for the plan list. Default: "/plans".
    pub plans_path: Option<String>,
    /// Path for plan upgrades. Default: "/upgrade".
    pub upgrade_path: Option<String>,
    /// Path for invite-code redemption. Default: "/redeem-invite".
    pub redeem_path: Option<String>,
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Returns the effective timeout, defaulting to 10 seconds.
    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(10)
    }

    pub fn effective_status_path(&self) -> &str {
        self.status_path.as_deref().unwrap_or("/subscription-status")
    }

    pub fn effective_plans_path(&self) -> &str {
        self.plans_path.as_deref().unwrap_or("/plans")
    }

    pub fn effective_upgrade_path(&self) -> &str {
        self.upgrade_path.as_deref().unwrap_or("/upgrade")
    }

    pub fn effective_redeem_path(&self) -> &str {
        self.redeem_path.as_deref().unwrap_or("/redeem-invite")
    }

    /// Join the base URL and a path, tolerating slashes on either side.
    /// Returns `None` when no base URL is configured.
    pub fn endpoint(&self, path: &str) -> Option<String> {
        let base = self.base_url.as_deref()?.trim_end_matches('/');
        Some(format!("{}/{}", base, path.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.effective_timeout_secs(), 10);
        assert_eq!(cfg.effective_status_path(), "/subscription-status");
        assert_eq!(cfg.effective_redeem_path(), "/redeem-invite");
        assert_eq!(cfg.endpoint("/plans"), None);
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let cfg = ClientConfig::default().with_base_url("https://api.example.test/v1/");
        assert_eq!(
            cfg.endpoint("/plans").as_deref(),
            Some("https://api.example.test/v1/plans")
        );
        assert_eq!(
            cfg.endpoint("upgrade").as_deref(),
            Some("https://api.example.test/v1/upgrade")
        );
    }
}
