use palate_core::{ItemKind, LearningConfig};
use palate_learning::AdaptiveLedger;
use proptest::prelude::*;

proptest! {
    /// Score stays within [-1, 1] for every update in any delta sequence.
    #[test]
    fn score_stays_bounded(deltas in prop::collection::vec(-5.0f64..5.0, 0..50)) {
        let mut ledger = AdaptiveLedger::new(LearningConfig::default());
        for delta in deltas {
            ledger.update_item_score("item", ItemKind::Ingredient, delta, "prop").unwrap();
            let score = ledger.entry("item").unwrap().score.value();
            prop_assert!((-1.0..=1.0).contains(&score), "score {} out of bounds", score);
        }
    }

    /// Confidence never decreases across consecutive updates to an item.
    #[test]
    fn confidence_is_monotone(deltas in prop::collection::vec(-1.0f64..1.0, 1..30)) {
        let mut ledger = AdaptiveLedger::new(LearningConfig::default());
        let mut previous = 0.0;
        for delta in deltas {
            ledger.update_item_score("item", ItemKind::Ingredient, delta, "prop").unwrap();
            let confidence = ledger.entry("item").unwrap().confidence.value();
            prop_assert!(confidence >= previous);
            prop_assert!(confidence <= 1.0);
            previous = confidence;
        }
    }

    /// Update counts track exactly one increment per update.
    #[test]
    fn update_count_tracks_updates(n in 1usize..40) {
        let mut ledger = AdaptiveLedger::new(LearningConfig::default());
        for _ in 0..n {
            ledger.update_item_score("item", ItemKind::Ingredient, 0.1, "prop").unwrap();
        }
        prop_assert_eq!(ledger.entry("item").unwrap().update_count as usize, n);
    }

    /// Stability is always within [0, 1] regardless of ledger content.
    #[test]
    fn stability_is_a_ratio(
        items in prop::collection::vec("[a-z]{1,8}", 0..20),
        deltas in prop::collection::vec(-1.0f64..1.0, 0..20),
    ) {
        let mut ledger = AdaptiveLedger::new(LearningConfig::default());
        for (item, delta) in items.iter().zip(deltas) {
            ledger.update_item_score(item, ItemKind::Ingredient, delta, "prop").unwrap();
        }
        let stability = ledger.stability();
        prop_assert!((0.0..=1.0).contains(&stability));
    }
}
