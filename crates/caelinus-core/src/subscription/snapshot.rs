//! Backend payload types. The backend owns all of this; we only read it.

use serde::{Deserialize, Serialize};

use crate::entitlements::plan::{deserialize_plan_lossy, Plan};

/// Current entitlement state from `GET subscription-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubscriptionSnapshot {
    /// Unknown or missing plan names resolve to `Free`.
    #[serde(rename = "plan_type", default, deserialize_with = "deserialize_plan_lossy")]
    pub plan: Plan,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_invited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_prompt: Option<UpgradePrompt>,
}

impl SubscriptionSnapshot {
    /// Snapshot installed before the first fetch and after a failed one.
    pub fn free() -> Self {
        Self::default()
    }

    /// An active snapshot on `plan`.
    pub fn active(plan: Plan) -> Self {
        Self {
            plan,
            is_active: true,
            ..Self::default()
        }
    }

    /// The plan to evaluate against. Inactive subscriptions get `Free`.
    pub fn effective_plan(&self) -> Plan {
        if self.is_active {
            self.plan
        } else {
            Plan::Free
        }
    }

    pub fn is_oracle_invited(&self) -> bool {
        self.oracle_invited.unwrap_or(false)
    }
}

/// Backend-suggested upsell shown alongside the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradePrompt {
    #[serde(default, deserialize_with = "deserialize_plan_lossy")]
    pub target_plan: Plan,
    #[serde(default)]
    pub message: String,
}

/// Listed price. The backend sends either a number or a preformatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

/// One entry of `GET plans`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInfo {
    pub id: String,
    pub display_name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub invite_only: bool,
}

impl PlanInfo {
    /// The canonical plan behind `id`, if it names one.
    pub fn plan(&self) -> Option<Plan> {
        Plan::parse(&self.id)
    }
}

/// Outcome of `POST upgrade` and `POST redeem-invite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ActionResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_status_payload() {
        let snap: SubscriptionSnapshot = serde_json::from_str(
            r#"{
                "plan_type": "soul",
                "is_active": true,
                "oracle_invited": true,
                "upgrade_prompt": {"target_plan": "oracle", "message": "Step inside"}
            }"#,
        )
        .unwrap();
        assert_eq!(snap.plan, Plan::Soul);
        assert!(snap.is_oracle_invited());
        assert_eq!(snap.upgrade_prompt.unwrap().target_plan, Plan::Oracle);
    }

    #[test]
    fn unknown_or_null_plan_type_is_free() {
        let snap: SubscriptionSnapshot =
            serde_json::from_str(r#"{"plan_type": "platinum", "is_active": true}"#).unwrap();
        assert_eq!(snap.plan, Plan::Free);
        let snap: SubscriptionSnapshot =
            serde_json::from_str(r#"{"plan_type": null, "is_active": true}"#).unwrap();
        assert_eq!(snap.plan, Plan::Free);
        let snap: SubscriptionSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snap, SubscriptionSnapshot::free());
    }

    #[test]
    fn inactive_snapshot_evaluates_as_free() {
        let mut snap = SubscriptionSnapshot::active(Plan::Oracle);
        assert_eq!(snap.effective_plan(), Plan::Oracle);
        snap.is_active = false;
        assert_eq!(snap.effective_plan(), Plan::Free);
    }

    #[test]
    fn plan_info_accepts_numeric_and_label_prices() {
        let plans: Vec<PlanInfo> = serde_json::from_str(
            r#"[
                {"id": "initiate", "display_name": "Initiate", "price": 9.99, "description": "d"},
                {"id": "oracle", "display_name": "Oracle", "price": "Invite", "description": "d",
                 "badge": "rare", "invite_only": true}
            ]"#,
        )
        .unwrap();
        assert_eq!(plans[0].price, Price::Amount(9.99));
        assert_eq!(plans[1].price, Price::Label("Invite".to_string()));
        assert!(plans[1].invite_only);
        assert_eq!(plans[1].plan(), Some(Plan::Oracle));
    }
}
