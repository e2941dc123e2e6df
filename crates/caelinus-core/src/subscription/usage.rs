//! In-memory, session-scoped daily usage counter.
//!
//! Nothing here is persisted and nothing resets on its own; the backend owns
//! the real day boundary. Callers that store counts elsewhere can skip this
//! and pass their own count to `EntitlementEvaluator::check_daily_limit`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct SessionUsage {
    counts: Mutex<HashMap<String, u32>>,
}

impl SessionUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses recorded for `limit_key` this session.
    pub fn get(&self, limit_key: &str) -> u32 {
        self.lock().get(limit_key).copied().unwrap_or(0)
    }

    /// Record one use and return the new count.
    pub fn increment(&self, limit_key: &str) -> u32 {
        let mut counts = self.lock();
        let count = counts.entry(limit_key.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn reset_key(&self, limit_key: &str) {
        self.lock().remove(limit_key);
    }

    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, u32>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_key() {
        let usage = SessionUsage::new();
        assert_eq!(usage.get("sanri_query"), 0);
        assert_eq!(usage.increment("sanri_query"), 1);
        assert_eq!(usage.increment("sanri_query"), 2);
        assert_eq!(usage.increment("ritual_audio"), 1);
        assert_eq!(usage.get("sanri_query"), 2);
    }

    #[test]
    fn reset_clears_counts() {
        let usage = SessionUsage::new();
        usage.increment("sanri_query");
        usage.increment("ritual_audio");
        usage.reset_key("sanri_query");
        assert_eq!(usage.get("sanri_query"), 0);
        assert_eq!(usage.get("ritual_audio"), 1);
        usage.reset();
        assert_eq!(usage.get("ritual_audio"), 0);
    }
}
