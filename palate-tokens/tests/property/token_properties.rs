use palate_tokens::TokenCounter;
use proptest::prelude::*;

proptest! {
    #[test]
    fn count_is_bounded(s in ".{0,200}") {
        let counter = TokenCounter::default();
        let count = counter.count(&s);
        // A token never covers less than one byte of input.
        prop_assert!(count <= s.len());
    }

    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::default();
        let uncached = counter.count(&s);
        let cached = counter.count_cached(&s);
        prop_assert_eq!(uncached, cached);
    }

    #[test]
    fn subadditivity(a in ".{0,100}", b in ".{0,100}") {
        let counter = TokenCounter::default();
        let combined = format!("{}{}", a, b);
        let count_combined = counter.count(&combined);
        prop_assert!(
            count_combined <= counter.count(&a) + counter.count(&b) + 1,
            "subadditivity violated for {:?} + {:?}",
            a, b
        );
    }
}
