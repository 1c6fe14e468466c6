//! Invariants of case folding and query parsing.

use proptest::prelude::*;
use quarry::snippet::parse_terms;
use quarry::util::fold::{fold, fold_chars};

proptest! {
    #[test]
    fn prop_fold_preserves_char_count(s in "\\PC{0,64}") {
        prop_assert_eq!(fold_chars(&s).len(), s.chars().count());
        prop_assert_eq!(fold(&s).chars().count(), s.chars().count());
    }

    #[test]
    fn prop_fold_is_idempotent(s in "\\PC{0,64}") {
        let once = fold(&s);
        prop_assert_eq!(fold(&once), once.clone());
    }

    #[test]
    fn prop_parse_terms_unique_and_nonempty(q in "[a-zA-Z ]{0,40}") {
        let terms = parse_terms(&q);
        for (i, t) in terms.iter().enumerate() {
            prop_assert!(!t.is_empty());
            prop_assert!(!t.chars().any(char::is_whitespace));
            prop_assert!(!terms[i + 1..].contains(t));
        }
    }
}
