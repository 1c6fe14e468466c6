//! Window bounds, length caps and boundary markers.

use quarry::snippet::{extract, NO_CONTENT};
use quarry::SnippetSpan;

#[test]
fn test_window_stops_at_sentence_ends() {
    let content = "First sentence here. The cat is in the middle. Last one.";
    let snippets = extract(content, "cat", 250);
    assert_eq!(snippets.len(), 1);
    let span = snippets[0].span.unwrap();
    assert_eq!(span, SnippetSpan { start: 19, end: 45 });
    assert_eq!(snippets[0].text, ".... The **CAT** is in the middle....");
}

#[test]
fn test_whole_content_window_has_no_markers() {
    let snippets = extract("Just one cat here", "cat", 250);
    assert_eq!(snippets[0].text, "Just one **CAT** here");
    assert_eq!(snippets[0].span, Some(SnippetSpan { start: 0, end: 16 }));
}

#[test]
fn test_long_sentence_is_capped() {
    let content = format!("{} cat {}", "word ".repeat(40), "tail ".repeat(40));
    let max_length = 30;
    for snippet in extract(&content, "cat", max_length) {
        let span = snippet.span.unwrap();
        assert!(span.end - span.start <= 2 * max_length);
        assert!(snippet.text.starts_with("..."));
        assert!(snippet.text.ends_with("..."));
    }
}

#[test]
fn test_text_stays_within_length_budget() {
    let content = "alpha beta gamma delta. ".repeat(30);
    for max_length in [5, 17, 40, 100] {
        for snippet in extract(&content, "gamma", max_length) {
            // Body capped at max_length plus one "..." from the cap and two
            // boundary markers, before highlight markers are added.
            let plain = snippet.text.replace("**GAMMA**", "gamma");
            assert!(
                plain.chars().count() <= max_length + 9,
                "{:?} too long for {}",
                plain,
                max_length
            );
        }
    }
}

#[test]
fn test_leading_and_trailing_whitespace_trimmed() {
    let snippets = extract("   the cat sits   ", "cat", 250);
    assert_eq!(snippets[0].text, "the **CAT** sits");
    assert_eq!(snippets[0].span, Some(SnippetSpan { start: 0, end: 17 }));
}

#[test]
fn test_placeholder_has_no_span() {
    let snippets = extract("\n\n  \t", "anything", 250);
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].text, NO_CONTENT);
    assert!(snippets[0].span.is_none());
    assert!(!snippets[0].is_occurrence());
}

#[test]
fn test_fallback_when_nothing_matches() {
    let content = "An unrelated paragraph about the weather. It rained.";
    let snippets = extract(content, "zebra", 10);
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].text, "An unrelat...");
    assert!(snippets[0].anchor.is_none());
}
