// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The full-text index behind the search path.
//!
//! Storage, tokenization, scoring and ranked retrieval all live behind
//! [`IndexStore`]. The rest of the crate only adds documents, commits, and asks
//! for ranked hits with their stored fields. [`TantivyStore`] is the shipped
//! implementation; tests also use the in-memory store from `testing`.
//!
//! Stores are plain values owned by whoever opened them. Dropping one releases
//! whatever it holds (for tantivy, the writer lock on the index directory).

mod tantivy_store;

pub use tantivy_store::{
    TantivyStore, DEFAULT_WRITER_HEAP_BYTES, FIELD_CONTENT, FIELD_FILENAME, FIELD_FILEPATH,
    FIELD_FILETYPE,
};

use crate::error::StoreError;
use crate::types::{Document, Hit, IndexStats};

/// Fields searched when the caller does not choose any.
pub const DEFAULT_SEARCH_FIELDS: &[&str] = &[FIELD_FILENAME, FIELD_CONTENT];

/// A full-text index that stores documents and answers ranked queries.
pub trait IndexStore {
    /// Queue a document. It becomes visible to readers after [`commit`](Self::commit).
    fn add_document(&mut self, doc: &Document) -> Result<(), StoreError>;

    /// Make all queued additions and deletions durable and visible.
    fn commit(&mut self) -> Result<(), StoreError>;

    /// Queue deletion of every document. Takes effect on commit.
    fn delete_all(&mut self) -> Result<(), StoreError>;

    /// Ranked hits for `query` over `fields`, best first, at most `limit`.
    fn search(&self, fields: &[&str], query: &str, limit: usize) -> Result<Vec<Hit>, StoreError>;

    /// Number of live documents.
    fn document_count(&self) -> Result<u64, StoreError>;

    /// Number of documents marked deleted but not yet purged.
    fn deleted_document_count(&self) -> Result<u64, StoreError>;

    /// Up to `limit` stored documents, in index order.
    fn sample(&self, limit: usize) -> Result<Vec<Document>, StoreError>;
}

/// Counts plus a sample of stored documents.
pub fn index_stats<S: IndexStore + ?Sized>(store: &S, sample_limit: usize) -> Result<IndexStats, StoreError> {
    let document_count = store.document_count()?;
    let deleted_document_count = store.deleted_document_count()?;
    let sample = if document_count > 0 {
        store.sample(sample_limit)?
    } else {
        Vec::new()
    };

    Ok(IndexStats {
        document_count,
        deleted_document_count,
        sample,
    })
}

/// Remove every document and commit.
pub fn clear_index<S: IndexStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
    store.delete_all()?;
    store.commit()?;
    tracing::info!("index cleared");
    Ok(())
}
