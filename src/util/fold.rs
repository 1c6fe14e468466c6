// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Length-preserving case folding.
//!
//! Matching works on a folded copy of the text while offsets are used to slice
//! the original, so the fold must never change the number of characters. Each
//! `char` maps to its lowercase form only when that form is a single `char`
//! (`'İ'` lowercases to two chars and is left alone). No locale rules apply.

/// Fold one character for matching.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a string into a vector of characters, one per input character.
pub fn fold_chars(value: &str) -> Vec<char> {
    value.chars().map(fold_char).collect()
}

/// Fold a string, keeping it a `String`.
pub fn fold(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Characters that form words for whole-word matching: letters and digits.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Find `needle` in `haystack` starting at character index `from`.
///
/// Plain left-to-right scan; returns the character index of the first match.
pub fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last = haystack.len() - needle.len();
    (from..=last).find(|&i| haystack[i..i + needle.len()] == *needle)
}
