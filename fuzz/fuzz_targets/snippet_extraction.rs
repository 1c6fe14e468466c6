// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.
//!
//! Any content, any query, any length. Extraction must not panic, must return
//! at least one snippet, and every span must sit inside the content. Multi-byte
//! text is where a byte/char mix-up would show up as a slicing panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quarry::snippet::extract;

#[derive(Debug, Arbitrary)]
struct ExtractInput {
    content: String,
    query: String,
    max_length: u16,
}

fuzz_target!(|input: ExtractInput| {
    let max_length = input.max_length as usize;
    let snippets = extract(&input.content, &input.query, max_length);

    assert!(!snippets.is_empty(), "extraction returned nothing");

    let len = input.content.chars().count();
    let separation = max_length.max(1) / 2;
    let anchors: Vec<usize> = snippets.iter().filter_map(|s| s.anchor).collect();

    for snippet in &snippets {
        if let Some(span) = snippet.span {
            assert!(span.start <= span.end, "inverted span {:?}", span);
            assert!(span.end < len, "span {:?} past content length {}", span, len);
        }
    }

    for (i, a) in anchors.iter().enumerate() {
        for b in &anchors[i + 1..] {
            assert!(a.abs_diff(*b) >= separation, "anchors {} and {} too close", a, b);
        }
    }
});
