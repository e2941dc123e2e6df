//! PremiumService: the cached subscription snapshot plus the evaluator over it.
//!
//! The snapshot is replaced wholesale by every refresh. Concurrent refreshes
//! are not sequenced: whichever response lands last wins. A failed status
//! fetch installs the free snapshot rather than surfacing an error.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use tracing::{info, warn};

use caelinus_core::entitlements::{ContentWindow, DailyLimitCheck, FeatureAccess};
use caelinus_core::{
    ActionResult, CaelinusConfig, EntitlementEvaluator, ErrorCode, Limit, Plan, PlanInfo,
    SessionUsage, SubscriptionSnapshot, UpgradePrompt,
};

use crate::backend::SubscriptionBackend;
use crate::error::ClientError;
use crate::http::HttpBackend;

pub struct PremiumService<B> {
    backend: B,
    evaluator: EntitlementEvaluator,
    snapshot: RwLock<SubscriptionSnapshot>,
    plans: RwLock<Vec<PlanInfo>>,
    in_flight: AtomicUsize,
    usage: SessionUsage,
}

/// Counts a request as in flight until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl PremiumService<HttpBackend> {
    /// HTTP-backed service from a loaded config.
    pub fn from_config(config: &CaelinusConfig) -> Result<Self, ClientError> {
        let backend = HttpBackend::new(config.client.clone())?;
        Ok(Self::new(
            backend,
            EntitlementEvaluator::new(config.entitlements.clone()),
        ))
    }
}

impl<B: SubscriptionBackend> PremiumService<B> {
    /// Starts on the free snapshot; call `refresh` to fetch the real one.
    pub fn new(backend: B, evaluator: EntitlementEvaluator) -> Self {
        Self {
            backend,
            evaluator,
            snapshot: RwLock::new(SubscriptionSnapshot::free()),
            plans: RwLock::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            usage: SessionUsage::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn evaluator(&self) -> &EntitlementEvaluator {
        &self.evaluator
    }

    pub fn usage(&self) -> &SessionUsage {
        &self.usage
    }

    /// True while any backend request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn snapshot(&self) -> SubscriptionSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The plan gating decisions are made against.
    pub fn plan(&self) -> Plan {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .effective_plan()
    }

    pub fn upgrade_prompt(&self) -> Option<UpgradePrompt> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .upgrade_prompt
            .clone()
    }

    /// Cached plan list from the last successful `load_plans`.
    pub fn plans(&self) -> Vec<PlanInfo> {
        self.plans
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ─── Backend operations ─────────────────────────────────────────────

    /// Fetch the snapshot and install it. On failure installs the free snapshot.
    pub async fn refresh(&self) -> SubscriptionSnapshot {
        let fetched = {
            let _guard = InFlight::start(&self.in_flight);
            self.backend.fetch_status().await
        };

        let snapshot = match fetched {
            Ok(snapshot) => {
                info!(
                    plan = snapshot.plan.as_str(),
                    active = snapshot.is_active,
                    "subscription refreshed"
                );
                snapshot
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "subscription fetch failed, using free plan");
                SubscriptionSnapshot::free()
            }
        };

        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot.clone();
        snapshot
    }

    /// Fetch the plan list. On failure keeps and returns the previous list.
    pub async fn load_plans(&self) -> Vec<PlanInfo> {
        let fetched = {
            let _guard = InFlight::start(&self.in_flight);
            self.backend.fetch_plans().await
        };

        match fetched {
            Ok(plans) => {
                *self.plans.write().unwrap_or_else(PoisonError::into_inner) = plans.clone();
                plans
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "plan list fetch failed, keeping cached list");
                self.plans()
            }
        }
    }

    /// Ask the backend to move to `target`. Refreshes the snapshot on success.
    pub async fn upgrade(&self, target: Plan) -> ActionResult {
        let outcome = {
            let _guard = InFlight::start(&self.in_flight);
            self.backend.upgrade(target).await
        };
        self.settle("upgrade", outcome).await
    }

    /// Redeem an invite code. Refreshes the snapshot on success.
    pub async fn redeem_invite(&self, code: &str) -> ActionResult {
        let code = code.trim();
        if code.is_empty() {
            return ActionResult::failure("Invite code is empty");
        }
        let outcome = {
            let _guard = InFlight::start(&self.in_flight);
            self.backend.redeem_invite(code).await
        };
        self.settle("redeem_invite", outcome).await
    }

    async fn settle(&self, action: &str, outcome: Result<ActionResult, ClientError>) -> ActionResult {
        match outcome {
            Ok(result) if result.success => {
                info!(action, "subscription action succeeded");
                self.refresh().await;
                result
            }
            Ok(result) => {
                info!(action, message = %result.message, "subscription action rejected");
                result
            }
            Err(e) => {
                warn!(action, error = %e, code = e.error_code(), "subscription action failed");
                ActionResult::failure(e.to_string())
            }
        }
    }

    // ─── Gating against the current snapshot ────────────────────────────

    pub fn has_feature(&self, feature_key: &str) -> bool {
        self.evaluator.has_feature(self.plan(), feature_key)
    }

    pub fn check_feature(&self, feature_key: &str) -> FeatureAccess {
        self.evaluator.check_feature(self.plan(), feature_key)
    }

    pub fn content_limit(&self, content_type: &str) -> Limit {
        self.evaluator.content_limit(self.plan(), content_type)
    }

    pub fn apply_content_limit<'a, T>(&self, content_type: &str, items: &'a [T]) -> ContentWindow<'a, T> {
        self.evaluator.apply_content_limit(self.plan(), content_type, items)
    }

    /// Check `limit_key` against this session's recorded usage.
    pub fn check_daily_limit(&self, limit_key: &str) -> DailyLimitCheck {
        self.evaluator
            .check_daily_limit(self.plan(), limit_key, self.usage.get(limit_key))
    }

    /// Record one use of `limit_key` if the allowance permits it, and return
    /// the check after it. An exhausted key is not counted again.
    pub fn record_usage(&self, limit_key: &str) -> DailyLimitCheck {
        let plan = self.plan();
        let before = self
            .evaluator
            .check_daily_limit(plan, limit_key, self.usage.get(limit_key));
        if !before.allowed {
            return before;
        }
        let used = self.usage.increment(limit_key);
        self.evaluator.check_daily_limit(plan, limit_key, used)
    }
}
