//! End-to-end indexing into real and in-memory stores.

use super::common::{animal_corpus, indexed_store, ram_store, Corpus, MemoryStore, TEST_HEAP_BYTES};
use quarry::{index_path, index_stats, Error, IndexStore, TantivyStore};

#[test]
fn test_index_corpus_into_tantivy() {
    let corpus = animal_corpus();
    let mut store = ram_store();
    let report = index_path(corpus.root(), &mut store).unwrap();

    assert_eq!(report.found, 3, "markdown file is not a candidate");
    assert_eq!(report.indexed, 3);
    assert!(report.failures.is_empty());
    assert_eq!(store.document_count().unwrap(), 3);
}

#[test]
fn test_undecodable_file_recorded_and_skipped() {
    let corpus = animal_corpus();
    let bad = corpus.file("binary.txt", [0xffu8, 0x00, 0xfe, 0x80]);

    let mut store = ram_store();
    let report = index_path(corpus.root(), &mut store).unwrap();
    assert_eq!(report.found, 4);
    assert_eq!(report.indexed, 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, bad);
    assert_eq!(store.document_count().unwrap(), 3);
}

#[test]
fn test_single_file_root() {
    let corpus = animal_corpus();
    let mut store = ram_store();
    let report = index_path(&corpus.root().join("dogs.txt"), &mut store).unwrap();
    assert_eq!(report.indexed, 1);

    let stats = index_stats(&store, 10).unwrap();
    assert_eq!(stats.sample[0].filename, "dogs.txt");
}

#[test]
fn test_reindexing_adds_again() {
    let corpus = animal_corpus();
    let mut store = indexed_store(&corpus);
    index_path(corpus.root(), &mut store).unwrap();
    assert_eq!(store.document_count().unwrap(), 6, "indexing never deduplicates");
}

#[test]
fn test_empty_directory_leaves_store_untouched() {
    let corpus = Corpus::new();
    corpus.file("readme.md", "not text");
    let mut store = MemoryStore::new();
    let report = index_path(corpus.root(), &mut store).unwrap();
    assert_eq!(report.found, 0);
    assert_eq!(store.commit_count(), 0);
}

#[test]
fn test_invalid_root_is_discovery_error() {
    let corpus = Corpus::new();
    let mut store = MemoryStore::new();
    let err = index_path(&corpus.root().join("nope"), &mut store).unwrap_err();
    assert!(matches!(err, Error::Discovery(_)));
}

#[test]
fn test_index_survives_reopen() {
    let corpus = animal_corpus();
    let index_dir = tempfile::tempdir().unwrap();

    {
        let mut store = TantivyStore::open(index_dir.path(), TEST_HEAP_BYTES).unwrap();
        index_path(corpus.root(), &mut store).unwrap();
    }

    let store = TantivyStore::open(index_dir.path(), TEST_HEAP_BYTES).unwrap();
    assert_eq!(store.document_count().unwrap(), 3);
}
