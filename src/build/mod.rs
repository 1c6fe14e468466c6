// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The indexing path: discover files, build documents, hand them to the store.
//!
//! Files are processed one at a time. A file that cannot be read, or that the
//! store refuses, is logged and recorded in the report; the rest of the batch
//! carries on. The whole batch is committed once at the end, and a failed
//! commit is the only thing that fails the run after discovery.

pub mod discovery;
pub mod document;

use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::store::IndexStore;

pub use discovery::{is_text_file, list_text_files, TEXT_EXTENSION};
pub use document::build_document;

/// A file that was skipped during indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one indexing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    /// Candidate files discovered under the root.
    pub found: usize,
    /// Documents added and committed.
    pub indexed: usize,
    pub failures: Vec<IndexFailure>,
}

impl IndexReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Create a progress style for the indexing progress bar
#[cfg(feature = "parallel")]
pub fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Index every `.txt` file under `root` into `store`.
///
/// Returns without committing when no files are found.
pub fn index_path<S: IndexStore + ?Sized>(root: &Path, store: &mut S) -> Result<IndexReport> {
    let files = list_text_files(root)?;
    info!("found {} text file(s) under {}", files.len(), root.display());

    if files.is_empty() {
        return Ok(IndexReport::default());
    }

    #[cfg(feature = "parallel")]
    let progress = {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Indexing");
        pb
    };

    let mut report = IndexReport {
        found: files.len(),
        ..IndexReport::default()
    };

    for path in &files {
        match index_file(path, store) {
            Ok(filename) => {
                report.indexed += 1;
                info!("indexed {}", filename);
                #[cfg(feature = "parallel")]
                progress.set_message(filename);
            }
            Err(reason) => {
                warn!("error indexing {}: {}", path.display(), reason);
                report.failures.push(IndexFailure {
                    path: path.clone(),
                    reason,
                });
            }
        }
        #[cfg(feature = "parallel")]
        progress.inc(1);
    }

    store.commit()?;

    #[cfg(feature = "parallel")]
    progress.finish_with_message(format!("indexed {} file(s)", report.indexed));

    info!(
        indexed = report.indexed,
        failed = report.failed(),
        "indexing batch committed"
    );
    Ok(report)
}

fn index_file<S: IndexStore + ?Sized>(path: &Path, store: &mut S) -> std::result::Result<String, String> {
    let doc = build_document(path).map_err(|e| e.to_string())?;
    store.add_document(&doc).map_err(|e| e.to_string())?;
    Ok(doc.filename)
}
