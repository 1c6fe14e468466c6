// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! [`IndexStore`] backed by a tantivy index.
//!
//! One writer and one manually reloaded reader per store. The reader is
//! refreshed after every commit so counts and searches see the new state
//! without waiting on a file watcher.

use std::fs;
use std::path::{Path, PathBuf};

use tantivy::collector::TopDocs;
use tantivy::directory::MmapDirectory;
use tantivy::query::QueryParser;
use tantivy::schema::{Field, Schema, Value, STORED, STRING, TEXT};
use tantivy::{DocAddress, Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument};
use tracing::debug;

use super::IndexStore;
use crate::error::StoreError;
use crate::types::{Document, Hit};

pub const FIELD_FILENAME: &str = "filename";
pub const FIELD_FILEPATH: &str = "filepath";
pub const FIELD_CONTENT: &str = "content";
pub const FIELD_FILETYPE: &str = "filetype";

/// Writer memory budget when none is configured.
pub const DEFAULT_WRITER_HEAP_BYTES: usize = 50_000_000;

/// Smallest budget tantivy accepts for a single indexing thread.
pub const MIN_WRITER_HEAP_BYTES: usize = 15_000_000;

#[derive(Debug, Clone, Copy)]
struct StoreFields {
    filename: Field,
    filepath: Field,
    content: Field,
    filetype: Field,
}

impl StoreFields {
    fn resolve(schema: &Schema) -> Result<Self, StoreError> {
        let get = |name: &str| {
            schema
                .get_field(name)
                .map_err(|_| StoreError::UnknownField(name.to_string()))
        };
        Ok(Self {
            filename: get(FIELD_FILENAME)?,
            filepath: get(FIELD_FILEPATH)?,
            content: get(FIELD_CONTENT)?,
            filetype: get(FIELD_FILETYPE)?,
        })
    }
}

fn build_schema() -> Schema {
    let mut builder = Schema::builder();
    builder.add_text_field(FIELD_FILENAME, TEXT | STORED);
    builder.add_text_field(FIELD_FILEPATH, TEXT | STORED);
    builder.add_text_field(FIELD_CONTENT, TEXT | STORED);
    builder.add_text_field(FIELD_FILETYPE, STRING | STORED);
    builder.build()
}

fn read_err(err: tantivy::TantivyError) -> StoreError {
    StoreError::Read(err.to_string())
}

/// Tantivy-backed document store.
pub struct TantivyStore {
    index: Index,
    reader: IndexReader,
    writer: IndexWriter,
    fields: StoreFields,
    location: Option<PathBuf>,
}

impl TantivyStore {
    /// Open the index in `dir`, creating the directory and index if needed.
    ///
    /// Holds the directory's writer lock until the store is dropped.
    pub fn open(dir: &Path, writer_heap_bytes: usize) -> Result<Self, StoreError> {
        let open_err = |message: String| StoreError::Open {
            path: dir.to_path_buf(),
            message,
        };

        fs::create_dir_all(dir).map_err(|e| open_err(e.to_string()))?;
        let directory = MmapDirectory::open(dir).map_err(|e| open_err(e.to_string()))?;
        let index = Index::open_or_create(directory, build_schema()).map_err(|e| open_err(e.to_string()))?;

        debug!("opened index at {}", dir.display());
        Self::from_index(index, writer_heap_bytes, Some(dir.to_path_buf()))
    }

    /// Index kept entirely in memory.
    pub fn in_memory(writer_heap_bytes: usize) -> Result<Self, StoreError> {
        let index = Index::create_in_ram(build_schema());
        Self::from_index(index, writer_heap_bytes, None)
    }

    fn from_index(index: Index, writer_heap_bytes: usize, location: Option<PathBuf>) -> Result<Self, StoreError> {
        let open_err = |message: String| StoreError::Open {
            path: location.clone().unwrap_or_default(),
            message,
        };

        let fields = StoreFields::resolve(&index.schema())?;
        let writer: IndexWriter = index
            .writer(writer_heap_bytes.max(MIN_WRITER_HEAP_BYTES))
            .map_err(|e| open_err(e.to_string()))?;
        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e: tantivy::TantivyError| open_err(e.to_string()))?;

        Ok(Self {
            index,
            reader,
            writer,
            fields,
            location,
        })
    }

    /// Directory holding the index, or `None` for an in-memory store.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    fn to_document(&self, stored: &TantivyDocument) -> Document {
        let text = |field: Field| {
            stored
                .get_first(field)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        Document {
            filename: text(self.fields.filename),
            path: text(self.fields.filepath),
            content: text(self.fields.content),
            doc_type: text(self.fields.filetype),
        }
    }
}

impl IndexStore for TantivyStore {
    fn add_document(&mut self, doc: &Document) -> Result<(), StoreError> {
        let mut stored = TantivyDocument::default();
        stored.add_text(self.fields.filename, &doc.filename);
        stored.add_text(self.fields.filepath, &doc.path);
        stored.add_text(self.fields.content, &doc.content);
        stored.add_text(self.fields.filetype, &doc.doc_type);
        self.writer.add_document(stored)?;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.writer.commit()?;
        self.reader.reload().map_err(read_err)?;
        Ok(())
    }

    fn delete_all(&mut self) -> Result<(), StoreError> {
        self.writer.delete_all_documents()?;
        Ok(())
    }

    fn search(&self, fields: &[&str], query: &str, limit: usize) -> Result<Vec<Hit>, StoreError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let schema = self.index.schema();
        let default_fields = fields
            .iter()
            .map(|name| {
                schema
                    .get_field(name)
                    .map_err(|_| StoreError::UnknownField((*name).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let parser = QueryParser::for_index(&self.index, default_fields);
        let parsed = parser
            .parse_query(query)
            .map_err(|e| StoreError::QueryParse(e.to_string()))?;

        let searcher = self.reader.searcher();
        let top_docs = searcher
            .search(&*parsed, &TopDocs::with_limit(limit))
            .map_err(read_err)?;

        top_docs
            .into_iter()
            .map(|(score, address)| {
                let stored: TantivyDocument = searcher.doc(address).map_err(read_err)?;
                Ok(Hit {
                    score,
                    document: self.to_document(&stored),
                })
            })
            .collect()
    }

    fn document_count(&self) -> Result<u64, StoreError> {
        Ok(self.reader.searcher().num_docs())
    }

    fn deleted_document_count(&self) -> Result<u64, StoreError> {
        let searcher = self.reader.searcher();
        Ok(searcher
            .segment_readers()
            .iter()
            .map(|segment| u64::from(segment.num_deleted_docs()))
            .sum())
    }

    fn sample(&self, limit: usize) -> Result<Vec<Document>, StoreError> {
        let searcher = self.reader.searcher();
        let mut docs = Vec::with_capacity(limit.min(64));

        'segments: for (segment_ord, segment) in searcher.segment_readers().iter().enumerate() {
            for doc_id in segment.doc_ids_alive() {
                if docs.len() >= limit {
                    break 'segments;
                }
                let address = DocAddress::new(segment_ord as u32, doc_id);
                let stored: TantivyDocument = searcher.doc(address).map_err(read_err)?;
                docs.push(self.to_document(&stored));
            }
        }

        Ok(docs)
    }
}
