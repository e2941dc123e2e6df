//! Per-plan caps with the `-1` = unlimited sentinel.

use serde::{Deserialize, Serialize};

use crate::errors::InvalidLimit;

/// The integer that means "no cap" in config files and backend payloads.
pub const UNLIMITED_SENTINEL: i64 = -1;

/// A content or daily-usage cap.
///
/// Serialized as a plain integer: `-1` for `Unlimited`, otherwise the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Limit {
    Unlimited,
    Capped(u32),
}

impl Limit {
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// The cap, or `None` when unlimited.
    pub fn cap(&self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::Capped(n) => Some(*n),
        }
    }

    /// Integer form with `-1` for unlimited.
    pub fn as_sentinel(&self) -> i64 {
        match self {
            Self::Unlimited => UNLIMITED_SENTINEL,
            Self::Capped(n) => i64::from(*n),
        }
    }

    /// How many of `len` items fit under this cap.
    pub fn visible_count(&self, len: usize) -> usize {
        self.cap().map_or(len, |n| len.min(n as usize))
    }
}

impl TryFrom<i64> for Limit {
    type Error = InvalidLimit;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == UNLIMITED_SENTINEL {
            return Ok(Self::Unlimited);
        }
        u32::try_from(value)
            .map(Self::Capped)
            .map_err(|_| InvalidLimit(value))
    }
}

impl From<Limit> for i64 {
    fn from(limit: Limit) -> Self {
        limit.as_sentinel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_maps_to_unlimited() {
        assert_eq!(Limit::try_from(-1), Ok(Limit::Unlimited));
        assert_eq!(Limit::Unlimited.as_sentinel(), -1);
    }

    #[test]
    fn other_negatives_are_rejected() {
        assert_eq!(Limit::try_from(-2), Err(InvalidLimit(-2)));
        assert_eq!(Limit::try_from(i64::from(u32::MAX) + 1).unwrap_err().0, 4_294_967_296);
    }

    #[test]
    fn cap_is_none_only_when_unlimited() {
        assert!(Limit::Unlimited.is_unlimited());
        assert_eq!(Limit::Unlimited.cap(), None);
        assert!(!Limit::Capped(0).is_unlimited());
        assert_eq!(Limit::Capped(12).cap(), Some(12));
    }

    #[test]
    fn visible_count_clamps_to_cap() {
        assert_eq!(Limit::Capped(20).visible_count(81), 20);
        assert_eq!(Limit::Capped(20).visible_count(5), 5);
        assert_eq!(Limit::Capped(0).visible_count(5), 0);
        assert_eq!(Limit::Unlimited.visible_count(81), 81);
    }

    #[test]
    fn deserializes_from_plain_integers() {
        let limits: Vec<Limit> = serde_json::from_str("[-1, 0, 20]").unwrap();
        assert_eq!(limits, vec![Limit::Unlimited, Limit::Capped(0), Limit::Capped(20)]);
        assert!(serde_json::from_str::<Limit>("-5").is_err());
    }
}
