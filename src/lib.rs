//! RDF → search document builder
//!
//! Converts every RDF quad known about one subject into a single flat,
//! multi-valued document for a search index (Solr-style field map).
//!
//! # Document layout
//!
//! - `document_key`: `"<graph> <subject>"`, as passed in
//! - `subject_uri`: the subject IRI
//! - `index_date`: build time, `yyyyMMddHHmmss` UTC
//! - `graph_uri`: every distinct graph the quads came from
//! - `property` / `property_ns`: every predicate and its namespace
//! - `class` / `class_ns`: every `rdf:type` class and its namespace
//! - `<predicate IRI>`: the literal values of that predicate
//!
//! ## Example Usage
//!
//! ```rust
//! use rdf_solr::{build_document, Literal, NamedNode, Quad, RDF_TYPE};
//!
//! let graph = NamedNode::new("http://example.com/graph1").unwrap();
//! let alice = NamedNode::new("http://example.com/alice").unwrap();
//!
//! let quads = vec![
//!     Quad::new(
//!         graph.clone(),
//!         alice.clone(),
//!         NamedNode::new(RDF_TYPE).unwrap(),
//!         NamedNode::new("http://xmlns.com/foaf/0.1/Person").unwrap(),
//!     ),
//!     Quad::new(
//!         graph,
//!         alice,
//!         NamedNode::new("http://xmlns.com/foaf/0.1/name").unwrap(),
//!         Literal::new_simple_literal("Alice"),
//!     ),
//! ];
//!
//! let doc = build_document("http://example.com/graph1 http://example.com/alice", quads).unwrap();
//! assert_eq!(doc.first_value("class"), Some("http://xmlns.com/foaf/0.1/Person"));
//! assert_eq!(doc.first_value("http://xmlns.com/foaf/0.1/name"), Some("Alice"));
//! assert_eq!(doc.value_count("property"), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod rdf;

// Re-export main types for convenience
pub use rdf::{
    NamedNode, Literal, ObjectNode, Quad,
    RdfError, RdfResult,
    split_iri, RDF_TYPE,
};

pub use index::{
    build_document, BuildError, BuildResult,
    DefaultDocumentBuilder, DocumentBuilder, DocumentKey, QuadHook,
    Document, FieldName,
    Clock, FixedClock, SystemClock,
    BuilderConfig, IndexerConfig, ConfigError,
    DocumentSink, MemorySink, JsonLinesSink, SinkError,
    QuadIndexer, IndexReport, IndexError,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
