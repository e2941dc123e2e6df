//! Premium feature gating: plan hierarchy, limits and the evaluator.
//!
//! ## Plans
//! - **Free** (0): base content, small daily allowances
//! - **Initiate** (1): unlimited queries, ritual library
//! - **Soul** (2): deep analysis, voice mode, personal rituals
//! - **Oracle** (3): invite-only chamber, no daily caps on queries
//!
//! ## Components
//! - **plan**: canonical `Plan` enum and its level table
//! - **limit**: `Limit` with the `-1` = unlimited sentinel
//! - **features**: well-known feature, content and daily keys
//! - **evaluator**: `EntitlementEvaluator`: has_feature, content_limit, check_daily_limit

pub mod evaluator;
pub mod features;
pub mod limit;
pub mod plan;

pub use evaluator::{
    ContentWindow, DailyLimitCheck, EntitlementEvaluator, FeatureAccess, DEFAULT_CONTENT_LIMIT,
    DEFAULT_DAILY_LIMIT, DEFAULT_FEATURE_PLAN,
};
pub use limit::{Limit, UNLIMITED_SENTINEL};
pub use plan::{is_plan_name_at_least, Plan};
