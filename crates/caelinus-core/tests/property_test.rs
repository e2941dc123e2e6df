//! Property tests for plan ordering and limit arithmetic.

use proptest::prelude::*;

use caelinus_core::entitlements::{EntitlementEvaluator, Limit, Plan};
use caelinus_core::EntitlementConfig;

fn any_plan() -> impl Strategy<Value = Plan> {
    prop::sample::select(Plan::ALL.to_vec())
}

fn any_limit() -> impl Strategy<Value = Limit> {
    prop_oneof![Just(Limit::Unlimited), (0u32..1_000).prop_map(Limit::Capped)]
}

proptest! {
    #[test]
    fn has_feature_matches_level_rule(plan in any_plan(), required in any_plan()) {
        let eval = EntitlementEvaluator::new(EntitlementConfig::empty().with_feature("f", required));
        prop_assert_eq!(eval.has_feature(plan, "f"), plan.level() >= required.level());
    }

    #[test]
    fn plan_order_is_reflexive(plan in any_plan()) {
        prop_assert!(plan.is_at_least(plan));
    }

    #[test]
    fn plan_order_is_transitive(a in any_plan(), b in any_plan(), c in any_plan()) {
        if a.is_at_least(b) && b.is_at_least(c) {
            prop_assert!(a.is_at_least(c));
        }
    }

    #[test]
    fn plan_order_is_total(a in any_plan(), b in any_plan()) {
        prop_assert!(a.is_at_least(b) || b.is_at_least(a));
    }

    #[test]
    fn daily_check_is_consistent(plan in any_plan(), limit in any_limit(), usage in 0u32..2_000) {
        let eval = EntitlementEvaluator::new(EntitlementConfig::empty().with_daily_limit(plan, "k", limit));
        let check = eval.check_daily_limit(plan, "k", usage);
        prop_assert_eq!(check.limit, limit);
        match limit {
            Limit::Unlimited => {
                prop_assert!(check.allowed);
                prop_assert_eq!(check.remaining, Limit::Unlimited);
            }
            Limit::Capped(cap) => {
                let expected = cap.saturating_sub(usage);
                prop_assert_eq!(check.remaining, Limit::Capped(expected));
                prop_assert_eq!(check.allowed, expected > 0);
            }
        }
    }

    #[test]
    fn content_window_partitions_the_list(plan in any_plan(), limit in any_limit(), len in 0usize..300) {
        let items: Vec<usize> = (0..len).collect();
        let eval = EntitlementEvaluator::new(EntitlementConfig::empty().with_content_limit(plan, "c", limit));
        let window = eval.apply_content_limit(plan, "c", &items);
        prop_assert_eq!(window.visible.len() + window.locked, len);
        if let Limit::Capped(cap) = limit {
            prop_assert!(window.visible.len() <= cap as usize);
        }
    }
}
