//! Non-ASCII content: offsets are characters, never bytes.

use quarry::snippet::extract;
use quarry::SnippetSpan;

#[test]
fn test_accented_query_matches_any_case() {
    let content = "Ünïcode café. Le CAFÉ est ouvert.";
    let snippets = extract(content, "café", 10);

    let anchors: Vec<usize> = snippets.iter().filter_map(|s| s.anchor).collect();
    assert_eq!(anchors, vec![8, 17]);
    assert!(snippets[1].text.contains("**CAFÉ**"));
}

#[test]
fn test_multibyte_windows_never_split_characters() {
    let content = "日本語のテキスト。猫がいます。犬もいます。".repeat(5);
    for max_length in [1, 3, 7, 20] {
        for snippet in extract(&content, "猫", max_length) {
            // Slicing by byte would have panicked before we got here.
            let span = snippet.span.unwrap();
            assert!(span.end < content.chars().count());
        }
    }
}

#[test]
fn test_span_counts_characters() {
    let content = "ñññ cat";
    let snippets = extract(content, "cat", 250);
    assert_eq!(snippets[0].anchor, Some(4));
    assert_eq!(snippets[0].span, Some(SnippetSpan { start: 0, end: 6 }));
    assert_eq!(snippets[0].text, "ñññ **CAT**");
}

#[test]
fn test_dotted_capital_i_left_unfolded() {
    // 'İ' lowercases to two characters, so it is left alone and does not
    // match a plain "i".
    let snippets = extract("İstanbul is big.", "istanbul", 250);
    assert!(snippets[0].anchor.is_none());
}
