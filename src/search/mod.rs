// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search path: run a query against the store, then attach snippets.
//!
//! Ranking belongs to the store. This module only rejects blank queries,
//! caps the result count, puts hits in descending score order and hands each
//! hit's stored content to the snippet extractor.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::QueryError;
use crate::snippet::{SnippetExtractor, SnippetOptions};
use crate::store::{IndexStore, DEFAULT_SEARCH_FIELDS};
use crate::types::{Hit, SearchMatch};

/// Results returned when the caller does not set a limit.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Sends query text to an [`IndexStore`] and returns ranked hits.
pub struct QueryExecutor<'a, S: IndexStore + ?Sized> {
    store: &'a S,
    fields: Vec<String>,
    limit: usize,
}

impl<'a, S: IndexStore + ?Sized> QueryExecutor<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            fields: DEFAULT_SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Search these fields instead of filename and content.
    pub fn with_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Ranked hits for `query`, at most [`limit`](Self::limit) of them.
    ///
    /// A blank query is rejected before the store sees it. Store failures are
    /// returned as-is, never retried.
    pub fn run(&self, query: &str) -> Result<Vec<Hit>, QueryError> {
        if query.trim().is_empty() {
            return Err(QueryError::Empty);
        }

        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        let hits = self.store.search(&fields, query, self.limit)?;
        debug!(query, hits = hits.len(), "query executed");
        Ok(hits)
    }
}

/// Run `query` and pair every hit with its snippets.
///
/// Hits come back best first; equal scores keep the store's order. `rank`
/// starts at 1.
pub fn search_with_snippets<S: IndexStore + ?Sized>(
    executor: &QueryExecutor<'_, S>,
    query: &str,
    options: SnippetOptions,
) -> Result<Vec<SearchMatch>, QueryError> {
    let mut hits = executor.run(query)?;
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));

    let extractor = SnippetExtractor::new(options);

    #[cfg(feature = "parallel")]
    let iter = hits.into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = hits.into_iter();

    Ok(iter
        .enumerate()
        .map(|(i, hit)| {
            let snippets = extractor.extract(&hit.document.content, query);
            SearchMatch {
                rank: i + 1,
                hit,
                snippets,
            }
        })
        .collect())
}
