// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration loaded from `quarry.toml`.
//!
//! Every key is optional. A missing file means all defaults; a missing key
//! means that key's default.
//!
//! ```toml
//! [index]
//! dir = "index"
//! writer_heap_bytes = 50000000
//!
//! [search]
//! fields = ["filename", "content"]
//! result_limit = 20
//! snippet_length = 250
//! stats_sample_limit = 170
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::search::DEFAULT_RESULT_LIMIT;
use crate::snippet::DEFAULT_MAX_LENGTH;
use crate::store::{DEFAULT_SEARCH_FIELDS, DEFAULT_WRITER_HEAP_BYTES};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "quarry.toml";

/// Documents listed by the stats view when nothing else is configured.
pub const DEFAULT_STATS_SAMPLE_LIMIT: usize = 170;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default = "default_index_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_writer_heap_bytes")]
    pub writer_heap_bytes: usize,
}

fn default_index_dir() -> PathBuf {
    PathBuf::from("index")
}

fn default_writer_heap_bytes() -> usize {
    DEFAULT_WRITER_HEAP_BYTES
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            dir: default_index_dir(),
            writer_heap_bytes: default_writer_heap_bytes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
    #[serde(default = "default_stats_sample_limit")]
    pub stats_sample_limit: usize,
}

fn default_fields() -> Vec<String> {
    DEFAULT_SEARCH_FIELDS.iter().map(|f| f.to_string()).collect()
}

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

fn default_snippet_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_stats_sample_limit() -> usize {
    DEFAULT_STATS_SAMPLE_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            result_limit: default_result_limit(),
            snippet_length: default_snippet_length(),
            stats_sample_limit: default_stats_sample_limit(),
        }
    }
}

impl Config {
    /// Load from `path`, or from `quarry.toml` in the working directory.
    ///
    /// An explicit path must exist. Without one, a missing `quarry.toml`
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the search path cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.fields.is_empty() {
            return Err(ConfigError::Invalid("search.fields must not be empty".into()));
        }
        if self.search.result_limit == 0 {
            return Err(ConfigError::Invalid("search.result_limit must be positive".into()));
        }
        if self.search.snippet_length == 0 {
            return Err(ConfigError::Invalid("search.snippet_length must be positive".into()));
        }
        Ok(())
    }
}
