// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a file on disk into a [`Document`].

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ReadError;
use crate::types::Document;

/// Read `path` and build its document record.
///
/// The filename and path are stored as given, with no normalization. The
/// content is the entire file, however large. Files that are not valid UTF-8
/// fail with [`ReadError::Decode`].
pub fn build_document(path: &Path) -> Result<Document, ReadError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            ReadError::Decode {
                path: path.to_path_buf(),
            }
        } else {
            ReadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Document::text(filename, path.to_string_lossy(), content))
}
