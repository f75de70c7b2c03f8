//! RDF term layer
//!
//! Quads as seen by the document builder: graph, subject and predicate are
//! IRIs, the object is an IRI or a literal.
//!
//! # Example
//!
//! ```rust
//! use rdf_solr::rdf::{Literal, NamedNode, Quad};
//!
//! let quad = Quad::new(
//!     NamedNode::new("http://example.org/graph").unwrap(),
//!     NamedNode::new("http://example.org/alice").unwrap(),
//!     NamedNode::new("http://xmlns.com/foaf/0.1/name").unwrap(),
//!     Literal::new_simple_literal("Alice"),
//! );
//!
//! assert!(quad.object.is_literal());
//! assert_eq!(quad.predicate.namespace(), "http://xmlns.com/foaf/0.1/");
//! ```

mod types;
pub mod namespace;

pub use types::{
    NamedNode, Literal, ObjectNode, Quad,
    RdfError, RdfResult,
};

pub use namespace::{split_iri, namespace_of, is_rdf_type, RDF_TYPE};
