// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence-bounded windows around a kept occurrence.

use crate::types::SnippetSpan;

/// Sentence terminator that stops the window scan.
pub const SENTENCE_END: char = '.';

/// Scan outward from `position` to find the window span.
///
/// The backward scan stops on a `.`, at the start of content, or once it is
/// `max_length` characters before `position`. The forward scan mirrors it and
/// may run one past the end, which is clamped to the last character. The
/// terminator that stopped either scan is part of the window.
///
/// `content` must be non-empty and `position < content.len()`.
pub fn expand(content: &[char], position: usize, max_length: usize) -> SnippetSpan {
    let len = content.len();

    let mut start = position;
    while start > 0 && content[start] != SENTENCE_END && position - start < max_length {
        start -= 1;
    }

    let mut end = position;
    while end < len && content[end] != SENTENCE_END && end - position < max_length {
        end += 1;
    }

    SnippetSpan {
        start,
        end: end.min(len - 1),
    }
}

/// Cut the window out of the original text, trim it, and apply the length cap.
///
/// Returns the capped text without boundary markers.
pub fn window_text(content: &[char], span: SnippetSpan, max_length: usize, ellipsis: &str) -> String {
    let raw: String = content[span.start..=span.end].iter().collect();
    let trimmed = raw.trim();
    truncate_chars(trimmed, max_length, ellipsis)
}

/// Keep the first `max_length` characters, appending `ellipsis` if anything was cut.
pub fn truncate_chars(text: &str, max_length: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(max_length) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ellipsis),
        None => text.to_string(),
    }
}

/// Add ellipsis markers where the window stops short of the content edges.
pub fn with_boundary_markers(text: String, span: SnippetSpan, content_len: usize, ellipsis: &str) -> String {
    let mut out = text;
    if span.start > 0 {
        out.insert_str(0, ellipsis);
    }
    if span.end < content_len - 1 {
        out.push_str(ellipsis);
    }
    out
}
