// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow between the indexing and search paths.
//!
//! A [`Document`] is built once from a file and handed to the store. The store
//! hands back [`Hit`]s carrying a copy of the stored fields. Snippet extraction
//! turns one hit's content into a list of [`Snippet`]s, and [`SearchMatch`] ties
//! a hit to its snippets for whoever renders the results.
//!
//! # Offsets
//!
//! Every offset in this module counts Unicode scalar values (`char`s), never
//! bytes. A snippet's span is inclusive on both ends, matching the window the
//! extractor scanned.

use serde::{Deserialize, Serialize};

/// Type tag stored with every document built from a plain-text file.
pub const TEXT_DOC_TYPE: &str = "txt";

/// A plain-text file ready to be indexed.
///
/// Immutable once built. `filename` and `path` are kept exactly as discovered,
/// and `content` is the complete file text with nothing trimmed or truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub path: String,
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

impl Document {
    /// Build a plain-text document record.
    pub fn text(filename: impl Into<String>, path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            path: path.into(),
            content: content.into(),
            doc_type: TEXT_DOC_TYPE.to_string(),
        }
    }
}

/// One ranked result returned by an index store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Relevance score assigned by the store (higher = better).
    pub score: f32,
    /// Stored field values of the matching document.
    pub document: Document,
}

/// Inclusive character range `[start, end]` of a snippet window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetSpan {
    pub start: usize,
    pub end: usize,
}

/// A highlighted excerpt of a document.
///
/// Snippets built from an occurrence carry both the window span and the
/// occurrence position (`anchor`) that produced them. The no-match fallback has
/// a span but no anchor; the empty-content placeholder has neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub text: String,
    pub span: Option<SnippetSpan>,
    pub anchor: Option<usize>,
}

impl Snippet {
    /// Snippet that does not point into any content.
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            span: None,
            anchor: None,
        }
    }

    /// True if this snippet was produced from a query-term occurrence.
    pub fn is_occurrence(&self) -> bool {
        self.anchor.is_some()
    }
}

/// A hit paired with its snippets, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// 1-based position after ordering by score.
    pub rank: usize,
    pub hit: Hit,
    pub snippets: Vec<Snippet>,
}

/// Snapshot of what an index store currently holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub document_count: u64,
    pub deleted_document_count: u64,
    /// Stored documents in index order, capped by the caller's sample limit.
    pub sample: Vec<Document>,
}
