//! Tests for finding candidate files.

use super::common::Corpus;
use quarry::build::list_text_files;
use quarry::DiscoveryError;

#[test]
fn test_walks_nested_directories() {
    let corpus = Corpus::new();
    corpus.file("top.txt", "a");
    corpus.file("one/two/three/deep.txt", "b");
    corpus.file("one/skip.csv", "c");

    let files = list_text_files(corpus.root()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|p| p.ends_with("one/two/three/deep.txt")));
}

#[test]
fn test_results_sorted_by_path() {
    let corpus = Corpus::new();
    for name in ["c.txt", "a.txt", "b/z.txt", "b/a.txt"] {
        corpus.file(name, "x");
    }
    let files = list_text_files(corpus.root()).unwrap();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn test_extension_match_ignores_case() {
    let corpus = Corpus::new();
    corpus.file("LOUD.TXT", "x");
    corpus.file("Mixed.Txt", "x");
    corpus.file("not-text.txt.bak", "x");
    assert_eq!(list_text_files(corpus.root()).unwrap().len(), 2);
}

#[test]
fn test_single_file_root() {
    let corpus = Corpus::new();
    let path = corpus.file("only.txt", "x");
    assert_eq!(list_text_files(&path).unwrap(), vec![path]);
}

#[test]
fn test_invalid_roots() {
    let corpus = Corpus::new();
    let md = corpus.file("notes.md", "x");

    for root in [md, corpus.root().join("missing"), corpus.root().join("missing.txt")] {
        match list_text_files(&root) {
            Err(DiscoveryError::InvalidRoot { path }) => assert_eq!(path, root),
            other => panic!("expected InvalidRoot for {}, got {:?}", root.display(), other),
        }
    }
}
