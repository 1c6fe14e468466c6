// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Per-file problems while indexing ([`ReadError`], and a [`StoreError`] from
//! a single `add_document`) are recorded and skipped. Everything else aborts the
//! current operation and is handed to the caller. Snippet extraction has no
//! error type at all: bad input degrades to a fallback snippet.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A file could not be turned into a document.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },
}

impl ReadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ReadError::Io { path, .. } | ReadError::Decode { path } => path,
        }
    }
}

/// Failure reported by an index store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open index at {}: {message}", path.display())]
    Open { path: PathBuf, message: String },

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("invalid query: {0}")]
    QueryParse(String),

    #[error("index write failed: {0}")]
    Write(String),

    #[error("index read failed: {0}")]
    Read(String),
}

impl From<tantivy::TantivyError> for StoreError {
    fn from(err: tantivy::TantivyError) -> Self {
        StoreError::Write(err.to_string())
    }
}

/// A search request that could not be carried out.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("search query is empty")]
    Empty,

    #[error("could not parse query: {0}")]
    Parse(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::QueryParse(message) => QueryError::Parse(message),
            other => QueryError::Store(other),
        }
    }
}

/// The indexing root is neither a directory nor a `.txt` file.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("{} does not exist or is not a .txt file or folder", path.display())]
    InvalidRoot { path: PathBuf },
}

/// Configuration could not be loaded or failed validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Crate-level error for operations that span several components.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
