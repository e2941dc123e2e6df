//! EntitlementEvaluator: pure decisions over an `EntitlementConfig`.
//!
//! Every query is total: unconfigured keys resolve to the defaults below
//! instead of failing. The two defaults point in opposite directions.
//! An unknown feature is open to everyone, an unknown content type or daily
//! key shows nothing. Both are kept as-is and pinned by tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::features;
use super::limit::Limit;
use super::plan::Plan;
use crate::config::EntitlementConfig;

/// Required plan for a feature key missing from the table.
pub const DEFAULT_FEATURE_PLAN: Plan = Plan::Free;
/// Cap for a content type missing from a plan's table.
pub const DEFAULT_CONTENT_LIMIT: Limit = Limit::Capped(0);
/// Cap for a daily limit key missing from a plan's table.
pub const DEFAULT_DAILY_LIMIT: Limit = Limit::Capped(0);

/// Result of a daily usage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLimitCheck {
    pub allowed: bool,
    /// Uses left today. `Unlimited` serializes as `-1`.
    pub remaining: Limit,
    pub limit: Limit,
}

/// Result of a feature gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureAccess {
    Allowed,
    Denied {
        feature: String,
        required_plan: Plan,
        current_plan: Plan,
    },
}

impl FeatureAccess {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Upgrade prompt text for a denied feature.
    pub fn denial_message(&self) -> Option<String> {
        match self {
            Self::Allowed => None,
            Self::Denied {
                feature,
                required_plan,
                ..
            } => Some(format!(
                "{} requires the {} plan.",
                features::describe(feature).unwrap_or(feature.as_str()),
                required_plan.display_name()
            )),
        }
    }
}

/// A plan-limited view of a list: what to show and how many are locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentWindow<'a, T> {
    pub visible: &'a [T],
    pub locked: usize,
}

impl<T> ContentWindow<'_, T> {
    pub fn has_locked(&self) -> bool {
        self.locked > 0
    }
}

/// Stateless entitlement authority. Cheap to clone, safe to share.
#[derive(Debug, Clone)]
pub struct EntitlementEvaluator {
    config: Arc<EntitlementConfig>,
}

impl EntitlementEvaluator {
    pub fn new(config: EntitlementConfig) -> Self {
        Self::from_shared(Arc::new(config))
    }

    pub fn from_shared(config: Arc<EntitlementConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EntitlementConfig {
        &self.config
    }

    /// Minimum plan for `feature_key`, or `DEFAULT_FEATURE_PLAN` if unconfigured.
    pub fn required_plan(&self, feature_key: &str) -> Plan {
        self.config
            .features
            .get(feature_key)
            .copied()
            .unwrap_or(DEFAULT_FEATURE_PLAN)
    }

    pub fn has_feature(&self, plan: Plan, feature_key: &str) -> bool {
        plan.is_at_least(self.required_plan(feature_key))
    }

    /// Like `has_feature`, but keeps the plans involved for an upgrade prompt.
    pub fn check_feature(&self, plan: Plan, feature_key: &str) -> FeatureAccess {
        let required = self.required_plan(feature_key);
        if plan.is_at_least(required) {
            FeatureAccess::Allowed
        } else {
            debug!(
                feature = feature_key,
                plan = plan.as_str(),
                required = required.as_str(),
                "feature denied"
            );
            FeatureAccess::Denied {
                feature: feature_key.to_string(),
                required_plan: required,
                current_plan: plan,
            }
        }
    }

    /// Configured feature keys `plan` unlocks, sorted.
    pub fn features_for_plan(&self, plan: Plan) -> Vec<String> {
        self.config
            .features
            .iter()
            .filter(|(_, required)| plan.is_at_least(**required))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Cap for `(plan, content_type)`, or `DEFAULT_CONTENT_LIMIT` if unconfigured.
    pub fn content_limit(&self, plan: Plan, content_type: &str) -> Limit {
        lookup(&self.config.content_limits, plan, content_type).unwrap_or(DEFAULT_CONTENT_LIMIT)
    }

    /// Split `items` into the prefix `plan` may see and the locked remainder.
    pub fn apply_content_limit<'a, T>(
        &self,
        plan: Plan,
        content_type: &str,
        items: &'a [T],
    ) -> ContentWindow<'a, T> {
        let shown = self.content_limit(plan, content_type).visible_count(items.len());
        ContentWindow {
            visible: &items[..shown],
            locked: items.len() - shown,
        }
    }

    /// Cap for `(plan, limit_key)`, or `DEFAULT_DAILY_LIMIT` if unconfigured.
    pub fn daily_limit(&self, plan: Plan, limit_key: &str) -> Limit {
        lookup(&self.config.daily_limits, plan, limit_key).unwrap_or(DEFAULT_DAILY_LIMIT)
    }

    pub fn check_daily_limit(&self, plan: Plan, limit_key: &str, usage: u32) -> DailyLimitCheck {
        match self.daily_limit(plan, limit_key) {
            Limit::Unlimited => DailyLimitCheck {
                allowed: true,
                remaining: Limit::Unlimited,
                limit: Limit::Unlimited,
            },
            Limit::Capped(cap) => {
                let remaining = cap.saturating_sub(usage);
                DailyLimitCheck {
                    allowed: remaining > 0,
                    remaining: Limit::Capped(remaining),
                    limit: Limit::Capped(cap),
                }
            }
        }
    }

    pub fn is_plan_at_least(&self, plan_a: Plan, plan_b: Plan) -> bool {
        plan_a.is_at_least(plan_b)
    }
}

impl Default for EntitlementEvaluator {
    fn default() -> Self {
        Self::new(EntitlementConfig::default())
    }
}

fn lookup(table: &BTreeMap<Plan, BTreeMap<String, Limit>>, plan: Plan, key: &str) -> Option<Limit> {
    table.get(&plan).and_then(|row| row.get(key)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> EntitlementEvaluator {
        EntitlementEvaluator::new(
            EntitlementConfig::empty()
                .with_feature("unlimited_query", Plan::Initiate)
                .with_content_limit(Plan::Free, "cities_list", Limit::Capped(20))
                .with_daily_limit(Plan::Free, "sanri_query", Limit::Capped(3))
                .with_daily_limit(Plan::Oracle, "sanri_query", Limit::Unlimited),
        )
    }

    #[test]
    fn required_plan_defaults_to_free() {
        assert_eq!(evaluator().required_plan("nonexistent_feature"), Plan::Free);
    }

    #[test]
    fn check_feature_reports_plans_on_denial() {
        let access = evaluator().check_feature(Plan::Free, "unlimited_query");
        assert_eq!(
            access,
            FeatureAccess::Denied {
                feature: "unlimited_query".to_string(),
                required_plan: Plan::Initiate,
                current_plan: Plan::Free,
            }
        );
        assert_eq!(
            access.denial_message().as_deref(),
            Some("Unlimited SANRI queries requires the Initiate plan.")
        );
    }

    #[test]
    fn unknown_feature_denial_message_uses_raw_key() {
        let eval = EntitlementEvaluator::new(
            EntitlementConfig::empty().with_feature("moon_reading", Plan::Soul),
        );
        let msg = eval.check_feature(Plan::Free, "moon_reading").denial_message();
        assert_eq!(msg.as_deref(), Some("moon_reading requires the Soul plan."));
    }

    #[test]
    fn content_window_on_empty_list() {
        let items: [u8; 0] = [];
        let window = evaluator().apply_content_limit(Plan::Free, "cities_list", &items);
        assert!(window.visible.is_empty());
        assert!(!window.has_locked());
    }

    #[test]
    fn daily_limit_under_cap() {
        let check = evaluator().check_daily_limit(Plan::Free, "sanri_query", 1);
        assert!(check.allowed);
        assert_eq!(check.remaining, Limit::Capped(2));
        assert_eq!(check.limit, Limit::Capped(3));
    }

    #[test]
    fn daily_limit_check_serializes_sentinel() {
        let check = evaluator().check_daily_limit(Plan::Oracle, "sanri_query", 7);
        let json = serde_json::to_value(check).unwrap();
        assert_eq!(json, serde_json::json!({"allowed": true, "remaining": -1, "limit": -1}));
    }
}
