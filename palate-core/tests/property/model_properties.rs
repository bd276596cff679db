use palate_core::{Confidence, Score};
use proptest::prelude::*;

proptest! {
    /// Construction clamps any input into [-1, 1].
    #[test]
    fn score_is_always_in_range(value in -100.0f64..100.0) {
        let score = Score::new(value);
        prop_assert!((-1.0..=1.0).contains(&score.value()));
    }

    /// Arithmetic on scores cannot escape the range either.
    #[test]
    fn score_arithmetic_stays_clamped(a in -1.0f64..=1.0, b in -1.0f64..=1.0, factor in -10.0f64..10.0) {
        let sum = Score::new(a) + Score::new(b);
        prop_assert!((-1.0..=1.0).contains(&sum.value()));
        let scaled = Score::new(a) * factor;
        prop_assert!((-1.0..=1.0).contains(&scaled.value()));
    }

    /// Every valid rating maps into range, with 3 at the neutral point.
    #[test]
    fn rating_conversion_is_order_preserving(a in 1u8..=5, b in 1u8..=5) {
        let (sa, sb) = (Score::from_rating(a), Score::from_rating(b));
        prop_assert!((-1.0..=1.0).contains(&sa.value()));
        prop_assert_eq!(a < b, sa.value() < sb.value());
        prop_assert!((1..=5).contains(&sa.to_rating()));
    }

    /// Construction clamps any input into [0, 1].
    #[test]
    fn confidence_is_always_in_range(value in -100.0f64..100.0) {
        let confidence = Confidence::new(value);
        prop_assert!((0.0..=1.0).contains(&confidence.value()));
    }

    /// Bumping never decreases confidence and saturates at 1.0.
    #[test]
    fn bump_is_monotone_and_saturating(start in 0.0f64..=1.0, steps in prop::collection::vec(0.0f64..0.5, 0..30)) {
        let mut confidence = Confidence::new(start);
        for step in steps {
            let bumped = confidence.bump(step);
            prop_assert!(bumped.value() >= confidence.value());
            prop_assert!(bumped.value() <= 1.0);
            confidence = bumped;
        }
    }

    /// The gate check agrees with the raw comparison.
    #[test]
    fn gate_check_matches_raw_value(value in 0.0f64..=1.0, gate in 0.0f64..=1.0) {
        prop_assert_eq!(Confidence::new(value).passes_gate(gate), value >= gate);
    }
}
