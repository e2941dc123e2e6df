//! Subscription state as reported by the backend, plus the session usage counter.

pub mod snapshot;
pub mod usage;

pub use snapshot::{ActionResult, PlanInfo, Price, SubscriptionSnapshot, UpgradePrompt};
pub use usage::SessionUsage;
