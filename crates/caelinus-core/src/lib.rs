//! # caelinus-core
//!
//! Foundation crate for CAELINUS premium gating.
//! Defines the plan hierarchy, entitlement config and evaluator, subscription
//! snapshot types, errors, config loading and tracing setup.
//! `caelinus-client` builds the async subscription service on top of this.

pub mod config;
pub mod entitlements;
pub mod errors;
pub mod subscription;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{CaelinusConfig, ClientConfig, EntitlementConfig, ObservabilityConfig};
pub use entitlements::{
    ContentWindow, DailyLimitCheck, EntitlementEvaluator, FeatureAccess, Limit, Plan,
};
pub use errors::error_code::ErrorCode;
pub use subscription::{ActionResult, PlanInfo, SessionUsage, SubscriptionSnapshot, UpgradePrompt};
