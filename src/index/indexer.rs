//! Quad stream -> documents -> sink
//!
//! Caller-side driver around a [`DocumentBuilder`]. Documents that fail to
//! build are skipped and reported, or abort the run, depending on
//! [`IndexerConfig::skip_invalid_documents`].

use super::builder::{BuildError, DocumentBuilder, DocumentKey};
use super::config::IndexerConfig;
use super::sink::{DocumentSink, SinkError};
use crate::rdf::Quad;
use indexmap::IndexMap;
use std::borrow::Borrow;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Indexing errors
#[derive(Error, Debug)]
pub enum IndexError {
    /// Document could not be built
    #[error("Build error for {key}: {source}")]
    Build {
        key: String,
        #[source]
        source: BuildError,
    },

    /// Sink rejected a document or the commit
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type IndexResult<T> = Result<T, IndexError>;

/// Outcome of an indexing run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexReport {
    /// Documents handed to the sink
    pub indexed: usize,
    /// Keys that were skipped and why
    pub skipped: Vec<(String, BuildError)>,
}

/// Builds documents and feeds them to a sink
#[derive(Debug)]
pub struct QuadIndexer<B, S> {
    builder: B,
    sink: S,
    config: IndexerConfig,
    report: IndexReport,
}

impl<B: DocumentBuilder, S: DocumentSink> QuadIndexer<B, S> {
    pub fn new(builder: B, sink: S, config: IndexerConfig) -> Self {
        Self {
            builder,
            sink,
            config,
            report: IndexReport::default(),
        }
    }

    /// Build and store the document for one key
    pub fn index_batch<I>(&mut self, key: &str, quads: I) -> IndexResult<()>
    where
        I: IntoIterator,
        I::Item: Borrow<Quad>,
    {
        match self.builder.build_document(key, quads) {
            Ok(doc) => {
                self.sink.add(doc)?;
                self.report.indexed += 1;
                Ok(())
            }
            Err(e) if self.config.skip_invalid_documents => {
                warn!("Skipping document {}: {}", key, e);
                self.report.skipped.push((key.to_string(), e));
                Ok(())
            }
            Err(source) => Err(IndexError::Build {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Group an unkeyed quad stream by graph and subject, then index every
    /// group under the key `"graph subject"`. Groups keep first-seen order.
    pub fn index_quads<I>(&mut self, quads: I) -> IndexResult<()>
    where
        I: IntoIterator<Item = Quad>,
    {
        let groups = group_by_key(quads);
        debug!("Indexing {} subjects", groups.len());
        for (key, group) in groups {
            self.index_batch(&key, group)?;
        }
        Ok(())
    }

    pub fn report(&self) -> &IndexReport {
        &self.report
    }

    /// Commit the sink and hand it back with the run's report
    pub fn finish(mut self) -> IndexResult<(S, IndexReport)> {
        self.sink.commit()?;
        info!(
            "Indexed {} documents, skipped {}",
            self.report.indexed,
            self.report.skipped.len()
        );
        Ok((self.sink, self.report))
    }
}

/// Partition quads by `"graph subject"` key, first-seen order
pub fn group_by_key<I>(quads: I) -> IndexMap<String, Vec<Quad>>
where
    I: IntoIterator<Item = Quad>,
{
    let mut groups: IndexMap<String, Vec<Quad>> = IndexMap::new();
    for quad in quads {
        let key = DocumentKey::format(quad.graph.as_str(), quad.subject.as_str());
        groups.entry(key).or_default().push(quad);
    }
    groups
}
