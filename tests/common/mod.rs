//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use quarry::TantivyStore;
use tempfile::TempDir;

// Re-export canonical test utilities from quarry::testing
pub use quarry::testing::{corpus_text, make_doc, MemoryStore};

/// Writer heap used by every tantivy store in the tests.
pub const TEST_HEAP_BYTES: usize = 15_000_000;

/// A throwaway directory tree of text files.
pub struct Corpus {
    pub dir: TempDir,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write corpus file");
        path
    }
}

/// Small animal corpus used across the search tests.
pub fn animal_corpus() -> Corpus {
    let corpus = Corpus::new();
    corpus.file(
        "cats.txt",
        "The cat sat on the mat. Cats are curious animals. Another cat watched the cat on the mat.",
    );
    corpus.file("dogs.txt", "The dog barked at the mailman. Dogs are loyal.");
    corpus.file("notes/mixed.txt", "A cat and a dog shared a sofa.");
    corpus.file("notes/readme.md", "The cat in the markdown file is never indexed.");
    corpus
}

/// Fresh in-memory tantivy store.
pub fn ram_store() -> TantivyStore {
    TantivyStore::in_memory(TEST_HEAP_BYTES).expect("create in-memory store")
}

/// In-memory tantivy store holding everything under `corpus`.
pub fn indexed_store(corpus: &Corpus) -> TantivyStore {
    let mut store = ram_store();
    quarry::index_path(corpus.root(), &mut store).expect("index corpus");
    store
}
