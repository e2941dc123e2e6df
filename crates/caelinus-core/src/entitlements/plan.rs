//! The canonical plan hierarchy.
//!
//! Free < Initiate < Soul < Oracle, ordered by a numeric level table.
//! Older payloads spell Initiate as "initiation"; both parse to the same plan.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::UnknownPlan;

/// Subscription plan. Ordering follows `level()`.
///
/// Deserializes through `Plan::parse`, so config files accept the same
/// case-insensitive names and legacy spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Plan {
    /// Level 0. Also the fallback for every unknown plan name.
    #[default]
    Free,
    /// Level 1.
    Initiate,
    /// Level 2.
    Soul,
    /// Level 3. Invite-only on the backend.
    Oracle,
}

impl Plan {
    /// All plans, lowest level first.
    pub const ALL: [Plan; 4] = [Self::Free, Self::Initiate, Self::Soul, Self::Oracle];

    /// Numeric level used for every comparison.
    pub const fn level(&self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Initiate => 1,
            Self::Soul => 2,
            Self::Oracle => 3,
        }
    }

    /// Plan name as stored in config and sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Initiate => "initiate",
            Self::Soul => "soul",
            Self::Oracle => "oracle",
        }
    }

    /// Human-readable name for upgrade prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Initiate => "Initiate",
            Self::Soul => "Soul",
            Self::Oracle => "Oracle",
        }
    }

    /// Parse a plan name. Case-insensitive, accepts legacy spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Some(Self::Free),
            "initiate" | "initiation" => Some(Self::Initiate),
            "soul" => Some(Self::Soul),
            "oracle" => Some(Self::Oracle),
            _ => None,
        }
    }

    /// Parse a plan name, resolving anything unknown to `Free` (level 0).
    pub fn from_name_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// True iff this plan's level is at least `other`'s.
    pub fn is_at_least(&self, other: Plan) -> bool {
        self.level() >= other.level()
    }

    /// The next plan up, or `None` at the top of the hierarchy.
    pub fn next(&self) -> Option<Plan> {
        Self::ALL.get(self.level() as usize + 1).copied()
    }
}

impl PartialOrd for Plan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Plan {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level().cmp(&other.level())
    }
}

impl TryFrom<String> for Plan {
    type Error = UnknownPlan;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(UnknownPlan(value))
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare two raw plan names. Unknown names count as level 0.
pub fn is_plan_name_at_least(plan_a: &str, plan_b: &str) -> bool {
    Plan::from_name_lossy(plan_a).is_at_least(Plan::from_name_lossy(plan_b))
}

/// Serde helper for backend payloads: a missing, null or unknown plan is `Free`.
pub(crate) fn deserialize_plan_lossy<'de, D>(deserializer: D) -> Result<Plan, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Plan::from_name_lossy).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_strictly_increasing() {
        for pair in Plan::ALL.windows(2) {
            assert!(pair[0].level() < pair[1].level());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn parse_accepts_legacy_spelling() {
        assert_eq!(Plan::parse("initiation"), Some(Plan::Initiate));
        assert_eq!(Plan::parse(" Oracle "), Some(Plan::Oracle));
        assert_eq!(Plan::parse("platinum"), None);
    }

    #[test]
    fn unknown_names_resolve_to_free() {
        assert_eq!(Plan::from_name_lossy("platinum"), Plan::Free);
        assert_eq!(Plan::from_name_lossy(""), Plan::Free);
    }

    #[test]
    fn plan_name_comparison_treats_unknown_as_level_zero() {
        assert!(is_plan_name_at_least("mystery", "free"));
        assert!(is_plan_name_at_least("mystery", "other-mystery"));
        assert!(!is_plan_name_at_least("mystery", "initiate"));
        assert!(is_plan_name_at_least("soul", "initiation"));
    }

    #[test]
    fn next_walks_up_the_hierarchy() {
        assert_eq!(Plan::Free.next(), Some(Plan::Initiate));
        assert_eq!(Plan::Soul.next(), Some(Plan::Oracle));
        assert_eq!(Plan::Oracle.next(), None);
    }

    #[test]
    fn plan_serializes_lowercase() {
        let json = serde_json::to_string(&Plan::Initiate).unwrap();
        assert_eq!(json, "\"initiate\"");
        let plan: Plan = serde_json::from_str("\"initiation\"").unwrap();
        assert_eq!(plan, Plan::Initiate);
    }

    #[test]
    fn deserialize_matches_parse_vocabulary() {
        let plan: Plan = serde_json::from_str("\"Soul\"").unwrap();
        assert_eq!(plan, Plan::Soul);
        let plan: Plan = serde_json::from_str("\" ORACLE \"").unwrap();
        assert_eq!(plan, Plan::Oracle);
        let err = serde_json::from_str::<Plan>("\"platinum\"").unwrap_err();
        assert!(err.to_string().contains("unknown plan 'platinum'"), "{err}");
    }
}
