// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole-word highlighting.
//!
//! Highlighting only ever inserts markers around matches, so removing the
//! markers and folding both sides must give back the folded input, for any
//! term whose upper-case form folds back to itself.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quarry::snippet::{highlight_terms, parse_terms, Highlight};
use quarry::util::fold::fold;

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

fuzz_target!(|input: HighlightInput| {
    // Markers made of a character the input cannot contain.
    if input.text.contains('\u{1}') || input.query.contains('\u{1}') {
        return;
    }
    let terms = parse_terms(&input.query);
    // Upper-casing is not reversible for every term ('ß' becomes "SS").
    if terms.iter().any(|t| fold(&t.to_uppercase()) != *t) {
        return;
    }
    let markers = Highlight::new("\u{1}", "\u{1}");
    let out = highlight_terms(&input.text, &terms, &markers);

    let stripped: String = out.chars().filter(|&c| c != '\u{1}').collect();
    assert_eq!(fold(&stripped), fold(&input.text));
});
