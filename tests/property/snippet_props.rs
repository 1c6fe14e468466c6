//! Invariants of snippet extraction.

use proptest::prelude::*;
use quarry::snippet::{extract, parse_terms, NO_CONTENT};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "cat", "dog", "the", "a", "catalog", "Cat", "DOG", "mat", "sat", "café", "naïve", "日本",
    ])
    .prop_map(str::to_string)
}

/// Short sentences separated by periods.
fn content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::collection::vec(word_strategy(), 1..8), 0..12).prop_map(|sentences| {
        sentences
            .into_iter()
            .map(|words| format!("{}.", words.join(" ")))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..4).prop_map(|words| words.join(" "))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_always_at_least_one_snippet(
        content in content_strategy(),
        query in query_strategy(),
        max_length in 1usize..300,
    ) {
        prop_assert!(!extract(&content, &query, max_length).is_empty());
    }

    #[test]
    fn prop_kept_anchors_are_separated(
        content in content_strategy(),
        query in query_strategy(),
        max_length in 1usize..300,
    ) {
        let anchors: Vec<usize> = extract(&content, &query, max_length)
            .iter()
            .filter_map(|s| s.anchor)
            .collect();
        for (i, a) in anchors.iter().enumerate() {
            prop_assert!(anchors[i + 1..].iter().all(|b| a.abs_diff(*b) >= max_length / 2));
        }
    }

    #[test]
    fn prop_spans_are_inside_content(
        content in content_strategy(),
        query in query_strategy(),
        max_length in 1usize..300,
    ) {
        let len = content.chars().count();
        for snippet in extract(&content, &query, max_length) {
            if let Some(span) = snippet.span {
                prop_assert!(span.start <= span.end);
                prop_assert!(span.end < len);
            }
            if let Some(anchor) = snippet.anchor {
                let span = snippet.span.unwrap();
                prop_assert!(span.start <= anchor && anchor <= span.end);
            }
        }
    }

    #[test]
    fn prop_anchor_points_at_a_term(
        content in content_strategy(),
        query in query_strategy(),
        max_length in 1usize..300,
    ) {
        let folded: Vec<char> = quarry::util::fold::fold_chars(&content);
        let terms = parse_terms(&query);
        for anchor in extract(&content, &query, max_length).iter().filter_map(|s| s.anchor) {
            let hit = terms.iter().any(|t| {
                let t: Vec<char> = t.chars().collect();
                folded.get(anchor..anchor + t.len()) == Some(&t[..])
            });
            prop_assert!(hit, "anchor {} is not the start of any term", anchor);
        }
    }

    #[test]
    fn prop_deterministic(
        content in content_strategy(),
        query in query_strategy(),
        max_length in 1usize..300,
    ) {
        prop_assert_eq!(
            extract(&content, &query, max_length),
            extract(&content, &query, max_length)
        );
    }

    #[test]
    fn prop_blank_content_is_placeholder(
        blank in "[ \t\n]{0,20}",
        query in query_strategy(),
        max_length in 1usize..300,
    ) {
        let snippets = extract(&blank, &query, max_length);
        prop_assert_eq!(snippets.len(), 1);
        prop_assert_eq!(snippets[0].text.as_str(), NO_CONTENT);
    }

    #[test]
    fn prop_no_match_falls_back_to_prefix(
        content in content_strategy(),
        max_length in 1usize..300,
    ) {
        prop_assume!(!content.trim().is_empty());
        let snippets = extract(&content, "zzzzqqq", max_length);
        prop_assert_eq!(snippets.len(), 1);
        prop_assert!(snippets[0].anchor.is_none());
        let prefix: String = content.chars().take(max_length).collect();
        prop_assert!(snippets[0].text.starts_with(&prefix));
    }
}
