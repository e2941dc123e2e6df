//! Entitlement tables: feature requirements, content limits, daily limits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entitlements::features::{content, daily, feature};
use crate::entitlements::{Limit, Plan};

/// Static gating configuration. Built once, then shared read-only.
///
/// A config file only overrides: every entry it names replaces the built-in
/// one, key by key, and everything it leaves out keeps the built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EntitlementOverrides")]
pub struct EntitlementConfig {
    /// Feature key → minimum plan.
    pub features: BTreeMap<String, Plan>,
    /// Plan → content type → cap.
    pub content_limits: BTreeMap<Plan, BTreeMap<String, Limit>>,
    /// Plan → daily limit key → cap.
    pub daily_limits: BTreeMap<Plan, BTreeMap<String, Limit>>,
}

/// The `[entitlements]` section as written in the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EntitlementOverrides {
    features: BTreeMap<String, Plan>,
    content_limits: BTreeMap<Plan, BTreeMap<String, Limit>>,
    daily_limits: BTreeMap<Plan, BTreeMap<String, Limit>>,
}

impl From<EntitlementOverrides> for EntitlementConfig {
    fn from(overrides: EntitlementOverrides) -> Self {
        Self::default().merged(overrides)
    }
}

impl EntitlementConfig {
    /// A config with no entries at all. Every lookup hits its default.
    pub fn empty() -> Self {
        Self {
            features: BTreeMap::new(),
            content_limits: BTreeMap::new(),
            daily_limits: BTreeMap::new(),
        }
    }

    pub fn with_feature(mut self, key: impl Into<String>, plan: Plan) -> Self {
        self.features.insert(key.into(), plan);
        self
    }

    pub fn with_content_limit(mut self, plan: Plan, content_type: impl Into<String>, limit: Limit) -> Self {
        self.content_limits
            .entry(plan)
            .or_default()
            .insert(content_type.into(), limit);
        self
    }

    pub fn with_daily_limit(mut self, plan: Plan, limit_key: impl Into<String>, limit: Limit) -> Self {
        self.daily_limits
            .entry(plan)
            .or_default()
            .insert(limit_key.into(), limit);
        self
    }

    fn merged(mut self, overrides: EntitlementOverrides) -> Self {
        self.features.extend(overrides.features);
        for (plan, row) in overrides.content_limits {
            self.content_limits.entry(plan).or_default().extend(row);
        }
        for (plan, row) in overrides.daily_limits {
            self.daily_limits.entry(plan).or_default().extend(row);
        }
        self
    }

    /// One content type's cap for each plan.
    fn with_content_row(self, content_type: &str, row: [(Plan, Limit); 4]) -> Self {
        row.into_iter()
            .fold(self, |cfg, (plan, limit)| cfg.with_content_limit(plan, content_type, limit))
    }

    fn with_daily_row(self, limit_key: &str, row: [(Plan, Limit); 4]) -> Self {
        row.into_iter()
            .fold(self, |cfg, (plan, limit)| cfg.with_daily_limit(plan, limit_key, limit))
    }
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        use Limit::{Capped, Unlimited};
        use Plan::{Free, Initiate, Oracle, Soul};

        Self::empty()
            .with_feature(feature::UNLIMITED_QUERY, Initiate)
            .with_feature(feature::RITUAL_LIBRARY, Initiate)
            .with_feature(feature::DEEP_ANALYSIS, Soul)
            .with_feature(feature::VOICE_MODE, Soul)
            .with_feature(feature::PERSONAL_RITUAL, Soul)
            .with_feature(feature::ORACLE_CHAMBER, Oracle)
            .with_content_row(
                content::CITIES_LIST,
                [(Free, Capped(20)), (Initiate, Capped(60)), (Soul, Unlimited), (Oracle, Unlimited)],
            )
            .with_content_row(
                content::RITUALS_LIST,
                [(Free, Capped(3)), (Initiate, Capped(12)), (Soul, Unlimited), (Oracle, Unlimited)],
            )
            .with_daily_row(
                daily::SANRI_QUERY,
                [(Free, Capped(3)), (Initiate, Capped(25)), (Soul, Capped(100)), (Oracle, Unlimited)],
            )
            .with_daily_row(
                daily::RITUAL_AUDIO,
                [(Free, Capped(1)), (Initiate, Capped(5)), (Soul, Unlimited), (Oracle, Unlimited)],
            )
    }
}
