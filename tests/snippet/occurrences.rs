//! Which occurrences become snippets.

use super::common::corpus_text;
use quarry::snippet::{extract, SnippetExtractor, SnippetOptions};

fn anchors(content: &str, query: &str, max_length: usize) -> Vec<usize> {
    extract(content, query, max_length)
        .iter()
        .filter_map(|s| s.anchor)
        .collect()
}

#[test]
fn test_every_distant_occurrence_gets_a_snippet() {
    let content = corpus_text(20, 2, "needle");
    let snippets = extract(&content, "needle", 40);

    assert_eq!(snippets.len(), 10, "one snippet per needle sentence");
    for snippet in &snippets {
        assert!(snippet.text.contains("**NEEDLE**"), "missing highlight in {:?}", snippet.text);
    }
}

#[test]
fn test_kept_anchors_respect_minimum_separation() {
    let content = corpus_text(30, 1, "needle");
    for max_length in [20, 60, 120, 250] {
        let kept = anchors(&content, "needle", max_length);
        assert!(!kept.is_empty());
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                assert!(
                    a.abs_diff(*b) >= max_length / 2,
                    "anchors {} and {} closer than {} (max_length {})",
                    a,
                    b,
                    max_length / 2,
                    max_length
                );
            }
        }
    }
}

#[test]
fn test_anchors_ascend() {
    let content = corpus_text(30, 3, "needle");
    let kept = anchors(&content, "needle", 50);
    let mut sorted = kept.clone();
    sorted.sort_unstable();
    assert_eq!(kept, sorted);
}

#[test]
fn test_larger_window_keeps_fewer_snippets() {
    let content = corpus_text(20, 2, "needle");
    let narrow = extract(&content, "needle", 40).len();
    let wide = extract(&content, "needle", 250).len();
    assert!(wide < narrow, "wide {} narrow {}", wide, narrow);
    assert!(wide >= 2);
}

#[test]
fn test_positions_pooled_across_terms() {
    // "dog" at 24 sits far from "cat" at 4, so both survive.
    let content = "The cat sat quietly and dog ran off.";
    let kept = anchors(content, "cat dog", 20);
    assert_eq!(kept, vec![4, 24]);
}

#[test]
fn test_overlapping_terms_collapse_to_one_position() {
    let snippets = extract("catalog", "cat catalog", 250);
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].anchor, Some(0));
    assert_eq!(snippets[0].text, "**CATALOG**");
}

#[test]
fn test_same_term_does_not_overlap_itself() {
    // "aa" in "aaaa" matches at 0 and 2 only.
    let kept = anchors("aaaa", "aa", 2);
    assert_eq!(kept, vec![0, 2]);
}

#[test]
fn test_repeated_query_terms_highlight_once() {
    let snippets = extract("cat cat", "cat CAT cat", 250);
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].text, "**CAT** **CAT**");
}

#[test]
fn test_extractor_matches_free_function() {
    let content = corpus_text(12, 4, "needle");
    let extractor = SnippetExtractor::new(SnippetOptions::default().with_max_length(60));
    assert_eq!(extractor.extract(&content, "needle"), extract(&content, "needle", 60));
}
