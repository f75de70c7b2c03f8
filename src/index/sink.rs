//! Document sinks
//!
//! The sink is whatever persists or indexes finished documents. Documents
//! are complete replacements: adding a key that already exists supersedes
//! the earlier document.

use super::document::Document;
use indexmap::IndexMap;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info};

/// Sink errors
#[derive(Error, Debug)]
pub enum SinkError {
    /// Document has no `document_key`
    #[error("Document has no document_key")]
    MissingKey,

    /// Writer error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for built documents
pub trait DocumentSink {
    /// Queue a document, replacing any earlier one with the same key
    fn add(&mut self, document: Document) -> SinkResult<()>;

    /// Make queued documents durable/visible
    fn commit(&mut self) -> SinkResult<()> {
        Ok(())
    }
}

impl<S: DocumentSink + ?Sized> DocumentSink for &mut S {
    fn add(&mut self, document: Document) -> SinkResult<()> {
        (**self).add(document)
    }

    fn commit(&mut self) -> SinkResult<()> {
        (**self).commit()
    }
}

/// In-memory sink keyed by `document_key`
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: IndexMap<String, Document>,
    commits: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Document> {
        self.documents.get(key)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of commits so far
    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }
}

impl DocumentSink for MemorySink {
    fn add(&mut self, document: Document) -> SinkResult<()> {
        let key = document.key().ok_or(SinkError::MissingKey)?.to_string();
        debug!("Stored document {}", key);
        self.documents.insert(key, document);
        Ok(())
    }

    fn commit(&mut self) -> SinkResult<()> {
        self.commits += 1;
        info!("Committed {} documents", self.documents.len());
        Ok(())
    }
}

/// Writes one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Documents written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DocumentSink for JsonLinesSink<W> {
    fn add(&mut self, document: Document) -> SinkResult<()> {
        if document.key().is_none() {
            return Err(SinkError::MissingKey);
        }
        serde_json::to_writer(&mut self.writer, &document)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn commit(&mut self) -> SinkResult<()> {
        self.writer.flush()?;
        info!("Flushed {} documents", self.written);
        Ok(())
    }
}
