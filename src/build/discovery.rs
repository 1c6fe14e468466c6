// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finding the `.txt` files under an indexing root.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::DiscoveryError;

/// Extension of files picked up for indexing (compared case-insensitively).
pub const TEXT_EXTENSION: &str = "txt";

/// True if `path` ends in `.txt`, ignoring case.
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION))
}

/// List candidate documents under `root`.
///
/// A file root is returned as-is when it has a `.txt` extension. A directory
/// root is walked recursively and its `.txt` files come back sorted by path.
/// Entries that cannot be read while walking are logged and skipped.
pub fn list_text_files(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if root.is_file() && is_text_file(root) {
        return Ok(vec![root.to_path_buf()]);
    }

    if !root.is_dir() {
        return Err(DiscoveryError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        match entry {
            Ok(entry) if entry.file_type().is_file() && is_text_file(entry.path()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(err) => warn!("skipping unreadable entry under {}: {}", root.display(), err),
        }
    }

    files.sort();
    Ok(files)
}
