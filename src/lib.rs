// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text file search with every-occurrence snippets.
//!
//! `quarry` indexes `.txt` files into a full-text index and, for each ranked
//! hit, shows one snippet per place the query appears in the file rather than
//! a single best fragment.
//!
//! # Architecture
//!
//! ```text
//! index path:   build::discovery ──▶ build::document ──▶ store (IndexStore)
//!
//! search path:  search::QueryExecutor ──▶ store ──▶ snippet::SnippetExtractor
//!                                                           │
//!                                                           ▼
//!                                               Vec<SearchMatch> (presenter)
//! ```
//!
//! | Module    | Role                                                        |
//! |-----------|-------------------------------------------------------------|
//! | `types`   | Document, Hit, Snippet, SearchMatch, IndexStats             |
//! | `build`   | File discovery, document loading, the indexing pipeline     |
//! | `store`   | `IndexStore` trait and the tantivy-backed `TantivyStore`    |
//! | `search`  | Query execution and snippet attachment                      |
//! | `snippet` | Occurrence scan, clustering, windowing, highlighting        |
//! | `config`  | `quarry.toml` loading                                       |
//! | `error`   | Error taxonomy                                              |
//!
//! # Usage
//!
//! ```
//! use quarry::{extract, index_path, search_with_snippets, QueryExecutor, SnippetOptions, TantivyStore};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("pets.txt"), "The cat sat. A dog ran. The cat slept.").unwrap();
//!
//! let mut store = TantivyStore::in_memory(quarry::DEFAULT_WRITER_HEAP_BYTES).unwrap();
//! let report = index_path(dir.path(), &mut store).unwrap();
//! assert_eq!(report.indexed, 1);
//!
//! let executor = QueryExecutor::new(&store);
//! let matches = search_with_snippets(&executor, "cat", SnippetOptions::default().with_max_length(12)).unwrap();
//! assert_eq!(matches[0].hit.document.filename, "pets.txt");
//! assert_eq!(matches[0].snippets.len(), 2);
//!
//! let snippets = extract("The cat sat.", "cat", 250);
//! assert_eq!(snippets[0].text, "The **CAT** sat.");
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod search;
pub mod snippet;
pub mod store;
pub mod types;
pub mod util;

// Test utilities (always compiled but hidden from docs)
pub mod testing;

pub use build::{index_path, IndexFailure, IndexReport};
pub use config::Config;
pub use error::{ConfigError, DiscoveryError, Error, QueryError, ReadError, Result, StoreError};
pub use search::{search_with_snippets, QueryExecutor};
pub use snippet::{extract, first_snippet, Highlight, SnippetExtractor, SnippetOptions};
pub use store::{clear_index, index_stats, IndexStore, TantivyStore, DEFAULT_WRITER_HEAP_BYTES};
pub use types::{Document, Hit, IndexStats, SearchMatch, Snippet, SnippetSpan};
