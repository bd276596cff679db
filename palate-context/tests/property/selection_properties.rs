use palate_core::{ContextFragment, Priority};
use palate_context::select;
use proptest::prelude::*;

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Critical),
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
    ]
}

fn arb_fragments() -> impl Strategy<Value = Vec<ContextFragment>> {
    prop::collection::vec(
        (arb_priority(), 1usize..200).prop_map(|(priority, tokens)| {
            ContextFragment::new("frag", "text", priority, tokens)
        }),
        0..20,
    )
}

proptest! {
    /// Whenever selection succeeds, every critical fragment is present.
    #[test]
    fn criticals_always_survive(fragments in arb_fragments(), budget in 1usize..2000) {
        let critical_count = fragments.iter().filter(|f| f.is_critical()).count();
        if let Ok(selected) = select(fragments, budget) {
            let selected_criticals = selected.iter().filter(|f| f.is_critical()).count();
            prop_assert_eq!(selected_criticals, critical_count);
        }
    }

    /// The selection never exceeds the budget.
    #[test]
    fn budget_is_never_exceeded(fragments in arb_fragments(), budget in 1usize..2000) {
        if let Ok(selected) = select(fragments, budget) {
            let used: usize = selected.iter().map(|f| f.estimated_tokens).sum();
            prop_assert!(used <= budget);
        }
    }

    /// Selection errors exactly when the critical floor exceeds the budget.
    #[test]
    fn error_iff_critical_floor_exceeds_budget(fragments in arb_fragments(), budget in 1usize..2000) {
        let floor: usize = fragments
            .iter()
            .filter(|f| f.is_critical())
            .map(|f| f.estimated_tokens)
            .sum();
        let result = select(fragments, budget);
        prop_assert_eq!(result.is_err(), floor > budget);
    }

    /// Selected fragments come out ordered by tier.
    #[test]
    fn selection_is_tier_ordered(fragments in arb_fragments(), budget in 1usize..2000) {
        if let Ok(selected) = select(fragments, budget) {
            for pair in selected.windows(2) {
                prop_assert!(pair[0].priority <= pair[1].priority);
            }
        }
    }
}
