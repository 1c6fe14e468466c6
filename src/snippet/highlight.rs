// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-word highlighting of query terms.
//!
//! Detection upstream is substring-based, highlighting here is whole-word, so
//! `cat` found inside `concatenate` yields a snippet with nothing highlighted.
//! That mismatch is kept on purpose.
//!
//! A match is whole-word when both of its edges sit on a word boundary: the
//! character on the far side of each edge differs in word-ness from the
//! term's edge character, with the text ends counting as non-word. All terms
//! are matched in a single pass over the original text, so inserted markers
//! are never scanned again. Where several terms match at the same position
//! the first one in query order wins.

use crate::util::fold::{fold_char, is_word_char};

/// Markers wrapped around each highlighted term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub open: String,
    pub close: String,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            open: "**".to_string(),
            close: "**".to_string(),
        }
    }
}

impl Highlight {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Highlight every whole-word, case-insensitive match of each folded term.
///
/// Matches are replaced by the upper-cased term between the markers.
pub fn highlight_terms(text: &str, terms: &[String], markers: &Highlight) -> String {
    let needles: Vec<(Vec<char>, String)> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| {
            let replacement = format!("{}{}{}", markers.open, term.to_uppercase(), markers.close);
            (term.chars().collect(), replacement)
        })
        .collect();
    if needles.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let folded: Vec<char> = chars.iter().map(|&c| fold_char(c)).collect();

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let hit = needles.iter().find(|(needle, _)| {
            let n = needle.len();
            i + n <= chars.len() && folded[i..i + n] == needle[..] && is_whole_word(&chars, i, needle)
        });
        match hit {
            Some((needle, replacement)) => {
                out.push_str(replacement);
                i += needle.len();
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

fn is_whole_word(chars: &[char], start: usize, needle: &[char]) -> bool {
    let end = start + needle.len();
    let before = start > 0 && is_word_char(chars[start - 1]);
    let after = end < chars.len() && is_word_char(chars[end]);

    before != is_word_char(needle[0]) && is_word_char(needle[needle.len() - 1]) != after
}
