// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Every-occurrence snippet extraction.
//!
//! Most search UIs show one excerpt per hit, usually around the first match.
//! This module shows all of them: every occurrence of every query term is
//! located, occurrences that sit close together collapse into one, and each
//! survivor becomes its own sentence-bounded, highlighted excerpt.
//!
//! # Pipeline
//!
//! ```text
//! content ──fold──▶ scan terms ──▶ sort ──▶ cluster(max/2) ──▶ window ──▶ cap ──▶ markers ──▶ highlight
//!                       │
//!                       └── no positions ──▶ truncated fallback
//! ```
//!
//! 1. **Fold** content and terms for matching. Offsets computed on the folded
//!    text apply to the original because the fold preserves length.
//! 2. **Scan** each term left to right, non-overlapping with itself.
//! 3. **Cluster**: a position is kept only if it is at least `max_length / 2`
//!    from every already-kept position.
//! 4. **Window**: scan outward to a `.` or `max_length` characters, whichever
//!    comes first.
//! 5. **Cap** the trimmed window at `max_length` characters, then add leading
//!    and trailing markers where the window stops short of the content edges.
//! 6. **Highlight** whole-word matches of each term.
//!
//! Extraction is a pure function of its inputs. It never fails: blank content
//! yields a placeholder, and a query with no matches yields the start of the
//! content.
//!
//! # Example
//!
//! ```
//! use quarry::snippet::extract;
//!
//! let snippets = extract("The cat sat. The dog ran.", "cat", 250);
//! assert_eq!(snippets.len(), 1);
//! assert!(snippets[0].text.contains("**CAT**"));
//! ```

pub mod highlight;
pub mod occurrence;
pub mod window;

use tracing::debug;

use crate::types::{Snippet, SnippetSpan};
use crate::util::fold::{fold, fold_char};

pub use highlight::{highlight_terms, Highlight};
pub use occurrence::{cluster_positions, scan_occurrences};

/// Snippet length used when nothing else is configured.
pub const DEFAULT_MAX_LENGTH: usize = 250;

/// Text returned for empty or whitespace-only content.
pub const NO_CONTENT: &str = "No content available.";

/// Marker for cut-off text.
pub const ELLIPSIS: &str = "...";

/// Tunables for [`SnippetExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Window bound and length cap, in characters. Zero is treated as one.
    pub max_length: usize,
    pub ellipsis: String,
    pub highlight: Highlight,
    pub placeholder: String,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            ellipsis: ELLIPSIS.to_string(),
            highlight: Highlight::default(),
            placeholder: NO_CONTENT.to_string(),
        }
    }
}

impl SnippetOptions {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }
}

/// Extracts one snippet per occurrence cluster.
#[derive(Debug, Clone, Default)]
pub struct SnippetExtractor {
    options: SnippetOptions,
}

impl SnippetExtractor {
    pub fn new(options: SnippetOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SnippetOptions {
        &self.options
    }

    /// Produce the ordered snippets for `content` and `query`.
    ///
    /// Always returns at least one snippet.
    pub fn extract(&self, content: &str, query: &str) -> Vec<Snippet> {
        if content.trim().is_empty() {
            return vec![Snippet::placeholder(self.options.placeholder.clone())];
        }

        let max_length = self.options.max_length.max(1);
        let terms = parse_terms(query);
        let needles: Vec<Vec<char>> = terms.iter().map(|t| t.chars().collect()).collect();

        let original: Vec<char> = content.chars().collect();
        let folded: Vec<char> = original.iter().map(|&c| fold_char(c)).collect();

        let mut positions = scan_occurrences(&folded, &needles);
        if positions.is_empty() {
            debug!(terms = terms.len(), "no occurrences, using fallback snippet");
            return vec![self.fallback(content, original.len(), max_length)];
        }

        positions.sort_unstable();
        let kept = cluster_positions(&positions, max_length / 2);
        debug!(
            occurrences = positions.len(),
            kept = kept.len(),
            "clustered occurrences"
        );

        kept.into_iter()
            .map(|position| self.snippet_at(&original, position, max_length, &terms))
            .collect()
    }

    fn snippet_at(&self, content: &[char], position: usize, max_length: usize, terms: &[String]) -> Snippet {
        let ellipsis = self.options.ellipsis.as_str();
        let span = window::expand(content, position, max_length);
        let text = window::window_text(content, span, max_length, ellipsis);
        let text = window::with_boundary_markers(text, span, content.len(), ellipsis);
        let text = highlight_terms(&text, terms, &self.options.highlight);

        Snippet {
            text,
            span: Some(span),
            anchor: Some(position),
        }
    }

    fn fallback(&self, content: &str, char_len: usize, max_length: usize) -> Snippet {
        let text = window::truncate_chars(content, max_length, &self.options.ellipsis);
        Snippet {
            text,
            span: Some(SnippetSpan {
                start: 0,
                end: char_len.min(max_length) - 1,
            }),
            anchor: None,
        }
    }
}

/// Split a query into folded terms.
///
/// Whitespace separates terms; empty terms vanish and repeats are dropped,
/// keeping the first occurrence's order.
pub fn parse_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in query.split_whitespace().map(fold) {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Extract snippets with the default markers.
pub fn extract(content: &str, query: &str, max_length: usize) -> Vec<Snippet> {
    SnippetExtractor::new(SnippetOptions::default().with_max_length(max_length)).extract(content, query)
}

/// Text of the first snippet, or the placeholder.
pub fn first_snippet(content: &str, query: &str, max_length: usize) -> String {
    extract(content, query, max_length)
        .into_iter()
        .next()
        .map(|s| s.text)
        .unwrap_or_else(|| NO_CONTENT.to_string())
}
