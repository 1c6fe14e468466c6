//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides an in-memory [`IndexStore`] so the search path can be
//! exercised without a tantivy index, plus a few corpus helpers.

#![doc(hidden)]

use std::collections::HashSet;

use crate::error::StoreError;
use crate::snippet::parse_terms;
use crate::store::{IndexStore, FIELD_CONTENT, FIELD_FILENAME, FIELD_FILEPATH, FIELD_FILETYPE};
use crate::types::{Document, Hit};
use crate::util::fold::fold;

/// In-memory store with commit semantics and a naive term-count score.
///
/// A document's score is the number of substring occurrences of each query
/// term across the searched fields. An odd number of `"` in the query is a
/// parse error, mirroring a real query parser's unbalanced phrase.
#[derive(Debug, Default)]
pub struct MemoryStore {
    committed: Vec<Document>,
    pending: Vec<Document>,
    pending_clear: bool,
    failing_files: HashSet<String>,
    fail_commit: bool,
    commits: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with `docs` already committed.
    pub fn with_documents(docs: impl IntoIterator<Item = Document>) -> Self {
        let mut store = Self::new();
        store.committed.extend(docs);
        store
    }

    /// Make `add_document` fail for documents with this filename.
    pub fn fail_on(mut self, filename: &str) -> Self {
        self.failing_files.insert(filename.to_string());
        self
    }

    /// Make every commit fail.
    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    /// Number of successful commits.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    /// Documents visible to readers.
    pub fn committed(&self) -> &[Document] {
        &self.committed
    }

    fn field_text<'a>(doc: &'a Document, field: &str) -> &'a str {
        match field {
            FIELD_FILENAME => &doc.filename,
            FIELD_FILEPATH => &doc.path,
            FIELD_CONTENT => &doc.content,
            _ => &doc.doc_type,
        }
    }
}

impl IndexStore for MemoryStore {
    fn add_document(&mut self, doc: &Document) -> Result<(), StoreError> {
        if self.failing_files.contains(&doc.filename) {
            return Err(StoreError::Write(format!("rejected {}", doc.filename)));
        }
        self.pending.push(doc.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        if self.fail_commit {
            return Err(StoreError::Write("commit failed".to_string()));
        }
        if self.pending_clear {
            self.committed.clear();
            self.pending_clear = false;
        }
        self.committed.append(&mut self.pending);
        self.commits += 1;
        Ok(())
    }

    fn delete_all(&mut self) -> Result<(), StoreError> {
        self.pending.clear();
        self.pending_clear = true;
        Ok(())
    }

    fn search(&self, fields: &[&str], query: &str, limit: usize) -> Result<Vec<Hit>, StoreError> {
        for field in fields {
            if ![FIELD_FILENAME, FIELD_FILEPATH, FIELD_CONTENT, FIELD_FILETYPE].contains(field) {
                return Err(StoreError::UnknownField((*field).to_string()));
            }
        }
        if query.matches('"').count() % 2 == 1 {
            return Err(StoreError::QueryParse("unbalanced quote".to_string()));
        }

        let terms = parse_terms(query);
        let mut hits: Vec<Hit> = self
            .committed
            .iter()
            .filter_map(|doc| {
                let count: usize = fields
                    .iter()
                    .map(|field| {
                        let text = fold(Self::field_text(doc, field));
                        terms.iter().map(|t| text.matches(t.as_str()).count()).sum::<usize>()
                    })
                    .sum();
                (count > 0).then(|| Hit {
                    score: count as f32,
                    document: doc.clone(),
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(limit);
        Ok(hits)
    }

    fn document_count(&self) -> Result<u64, StoreError> {
        Ok(self.committed.len() as u64)
    }

    fn deleted_document_count(&self) -> Result<u64, StoreError> {
        Ok(0)
    }

    fn sample(&self, limit: usize) -> Result<Vec<Document>, StoreError> {
        Ok(self.committed.iter().take(limit).cloned().collect())
    }
}

/// Plain-text document named `name` under a fake corpus root.
pub fn make_doc(name: &str, content: &str) -> Document {
    Document::text(name, format!("/corpus/{}", name), content)
}

/// Sentence-structured filler text with `needle` inserted every `every` sentences.
pub fn corpus_text(sentences: usize, every: usize, needle: &str) -> String {
    let mut out = String::new();
    for i in 0..sentences {
        if every > 0 && i % every == 0 {
            out.push_str(&format!("Sentence {} mentions {} once. ", i, needle));
        } else {
            out.push_str(&format!("Sentence {} is ordinary filler text. ", i));
        }
    }
    out
}
