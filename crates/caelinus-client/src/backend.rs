//! The subscription backend seam.

use async_trait::async_trait;

use caelinus_core::{ActionResult, Plan, PlanInfo, SubscriptionSnapshot};

use crate::error::ClientError;

/// Remote source of subscription state.
///
/// Requests are independent: no ordering, retry or cancellation between them.
#[async_trait]
pub trait SubscriptionBackend: Send + Sync {
    /// `GET subscription-status`
    async fn fetch_status(&self) -> Result<SubscriptionSnapshot, ClientError>;

    /// `GET plans`
    async fn fetch_plans(&self) -> Result<Vec<PlanInfo>, ClientError>;

    /// `POST upgrade`
    async fn upgrade(&self, target: Plan) -> Result<ActionResult, ClientError>;

    /// `POST redeem-invite`
    async fn redeem_invite(&self, code: &str) -> Result<ActionResult, ClientError>;
}
