//! Quad batch -> search document
//!
//! One call turns every quad known for a subject into a single document:
//!
//! 1. The key `"graph subject"` is parsed and each quad is checked against it.
//! 2. Each quad contributes `property`/`property_ns`, `class`/`class_ns` for
//!    `rdf:type` resources, and its literal under a field named after the
//!    predicate IRI.
//! 3. Default fields (`document_key`, `subject_uri`, `index_date`) and the
//!    collected `graph_uri`s are added around the quad-derived fields.
//!
//! The quads are consumed in a single pass. A bad quad anywhere in the batch
//! fails the whole call and nothing built so far escapes.

use super::clock::{format_index_date, Clock, SystemClock};
use super::config::BuilderConfig;
use super::document::Document;
use super::fields::FieldName;
use crate::rdf::{is_rdf_type, ObjectNode, Quad};
use indexmap::{IndexMap, IndexSet};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Document build errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Key missing, empty, or not exactly `"graph subject"`
    #[error("Invalid document key {0:?}: expected \"<graph> <subject>\"")]
    InvalidKey(String),

    /// No quad batch was supplied
    #[error("Quads cannot be null")]
    NullQuadBatch,

    /// A quad's subject differs from the key's subject
    #[error("Subject URI not consistent with key: expected {expected}, found {found}")]
    InconsistentSubject { expected: String, found: String },

    /// A quad's graph differs from the key's graph (strict mode only)
    #[error("Graph URI not consistent with key: expected {expected}, found {found}")]
    InconsistentGraph { expected: String, found: String },
}

pub type BuildResult<T> = Result<T, BuildError>;

/// Parsed `"graph subject"` document key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentKey<'a> {
    raw: &'a str,
    graph: &'a str,
    subject: &'a str,
}

impl<'a> DocumentKey<'a> {
    /// Split on a single space into two non-empty components
    pub fn parse(key: &'a str) -> BuildResult<Self> {
        let mut parts = key.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(graph), Some(subject), None) if !graph.is_empty() && !subject.is_empty() => {
                Ok(Self {
                    raw: key,
                    graph,
                    subject,
                })
            }
            _ => Err(BuildError::InvalidKey(key.to_string())),
        }
    }

    /// Key string for a graph and subject
    pub fn format(graph: &str, subject: &str) -> String {
        format!("{} {}", graph, subject)
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn graph(&self) -> &'a str {
        self.graph
    }

    pub fn subject(&self) -> &'a str {
        self.subject
    }
}

impl fmt::Display for DocumentKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Checks quads against the document key
struct QuadBatchValidator<'a> {
    key: DocumentKey<'a>,
    enforce_graph_consistency: bool,
}

impl QuadBatchValidator<'_> {
    fn check(&self, quad: &Quad) -> BuildResult<()> {
        if quad.subject.as_str() != self.key.subject() {
            return Err(BuildError::InconsistentSubject {
                expected: self.key.subject().to_string(),
                found: quad.subject.as_str().to_string(),
            });
        }
        if self.enforce_graph_consistency && quad.graph.as_str() != self.key.graph() {
            return Err(BuildError::InconsistentGraph {
                expected: self.key.graph().to_string(),
                found: quad.graph.as_str().to_string(),
            });
        }
        Ok(())
    }
}

/// Quad-derived fields, accumulated one quad at a time
#[derive(Debug, Default)]
struct FieldAccumulator {
    graph_uris: IndexSet<String>,
    fields: IndexMap<String, Vec<String>>,
}

impl FieldAccumulator {
    fn push(&mut self, field: &str, value: &str) {
        match self.fields.get_mut(field) {
            Some(values) => values.push(value.to_string()),
            None => {
                self.fields.insert(field.to_string(), vec![value.to_string()]);
            }
        }
    }

    fn accept(&mut self, quad: &Quad) {
        if !self.graph_uris.contains(quad.graph.as_str()) {
            self.graph_uris.insert(quad.graph.as_str().to_string());
        }

        let predicate = quad.predicate.as_str();

        if is_rdf_type(predicate) {
            if let ObjectNode::Uri(class) = &quad.object {
                self.push(FieldName::Class.as_str(), class.as_str());
                self.push(FieldName::ClassNs.as_str(), class.namespace());
            }
        }

        self.push(FieldName::Property.as_str(), predicate);
        self.push(FieldName::PropertyNs.as_str(), quad.predicate.namespace());

        if let ObjectNode::Literal(literal) = &quad.object {
            self.push(predicate, literal.value());
        }
    }

    /// Default fields first, then graphs, then quad-derived fields
    fn assemble(self, key: &DocumentKey<'_>, index_date: String) -> Document {
        let mut doc = Document::new();
        doc.set_field(FieldName::DocumentKey, key.as_str());
        doc.set_field(FieldName::SubjectUri, key.subject());
        doc.set_field(FieldName::IndexDate, index_date);
        if !self.graph_uris.is_empty() {
            doc.extend_field(FieldName::GraphUri, self.graph_uris);
        }
        for (name, values) in self.fields {
            doc.extend_field(name, values);
        }
        doc
    }
}

/// Something that turns a subject's quads into a document
pub trait DocumentBuilder {
    /// Build the document for `key` (`"graph subject"`) from all of the
    /// subject's quads. Quads are read once, in order.
    fn build_document<I>(&self, key: &str, quads: I) -> BuildResult<Document>
    where
        I: IntoIterator,
        I::Item: Borrow<Quad>;

    /// Same as [`build_document`](Self::build_document) for callers whose
    /// key or batch may be absent.
    fn build_nullable<I>(&self, key: Option<&str>, quads: Option<I>) -> BuildResult<Document>
    where
        I: IntoIterator,
        I::Item: Borrow<Quad>,
    {
        let key = key.ok_or_else(|| BuildError::InvalidKey(String::new()))?;
        let quads = quads.ok_or(BuildError::NullQuadBatch)?;
        self.build_document(key, quads)
    }
}

/// Called with every quad after it passed validation
pub type QuadHook = Arc<dyn Fn(&Quad) + Send + Sync>;

/// The standard builder. Holds no per-call state, so one instance can be
/// shared across threads.
#[derive(Clone)]
pub struct DefaultDocumentBuilder {
    config: BuilderConfig,
    clock: Arc<dyn Clock>,
    quad_hook: Option<QuadHook>,
}

impl fmt::Debug for DefaultDocumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultDocumentBuilder")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("quad_hook", &self.quad_hook.as_ref().map(|_| "<QuadHook>"))
            .finish()
    }
}

impl Default for DefaultDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultDocumentBuilder {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            quad_hook: None,
        }
    }

    /// Use another time source for `index_date`
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Observe each accepted quad
    pub fn with_quad_hook(mut self, hook: QuadHook) -> Self {
        self.quad_hook = Some(hook);
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }
}

impl DocumentBuilder for DefaultDocumentBuilder {
    fn build_document<I>(&self, key: &str, quads: I) -> BuildResult<Document>
    where
        I: IntoIterator,
        I::Item: Borrow<Quad>,
    {
        debug!("Creating document for key {}", key);
        let key = DocumentKey::parse(key)?;
        let validator = QuadBatchValidator {
            key,
            enforce_graph_consistency: self.config.enforce_graph_consistency,
        };

        let mut acc = FieldAccumulator::default();
        let mut quad_count = 0usize;
        for quad in quads {
            let quad = quad.borrow();
            validator.check(quad)?;
            if let Some(hook) = &self.quad_hook {
                hook(quad);
            }
            acc.accept(quad);
            quad_count += 1;
        }

        let index_date = format_index_date(&self.clock.now());
        let doc = acc.assemble(&key, index_date);
        debug!(
            "Created document {} with {} fields from {} quads",
            key,
            doc.len(),
            quad_count
        );
        Ok(doc)
    }
}

/// Build a document with the default builder
pub fn build_document<I>(key: &str, quads: I) -> BuildResult<Document>
where
    I: IntoIterator,
    I::Item: Borrow<Quad>,
{
    DefaultDocumentBuilder::new().build_document(key, quads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::clock::FixedClock;
    use crate::rdf::{Literal, NamedNode, RDF_TYPE};
    use std::sync::Mutex;

    const GRAPH: &str = "http://example.com/graph1";
    const SUBJECT: &str = "http://example.com/subject1";

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    fn quad(predicate: &str, object: impl Into<ObjectNode>) -> Quad {
        Quad::new(node(GRAPH), node(SUBJECT), node(predicate), object)
    }

    fn key() -> String {
        DocumentKey::format(GRAPH, SUBJECT)
    }

    #[test]
    fn test_parse_key() {
        let key = DocumentKey::parse("http://g http://s").unwrap();
        assert_eq!(key.graph(), "http://g");
        assert_eq!(key.subject(), "http://s");
        assert_eq!(key.as_str(), "http://g http://s");
    }

    #[test]
    fn test_parse_invalid_keys() {
        for bad in ["", " ", "nospace", "a b c", "a  b", " b", "a ", "a b "] {
            assert_eq!(
                DocumentKey::parse(bad),
                Err(BuildError::InvalidKey(bad.to_string())),
                "key {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_accumulator_field_order() {
        let mut acc = FieldAccumulator::default();
        acc.accept(&quad(RDF_TYPE, node("http://example.com/types#Person")));
        acc.accept(&quad("http://example.com/p", Literal::new_simple_literal("v")));

        let names: Vec<&str> = acc.fields.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec!["class", "class_ns", "property", "property_ns", "http://example.com/p"]
        );
        assert_eq!(acc.fields["class_ns"], vec!["http://example.com/types#"]);
        assert_eq!(acc.graph_uris.len(), 1);
    }

    #[test]
    fn test_assembled_field_order() {
        let builder = DefaultDocumentBuilder::new()
            .with_clock(Arc::new(FixedClock::at_timestamp(0).unwrap()));
        let doc = builder
            .build_document(&key(), [quad("http://example.com/p", Literal::new_simple_literal("v"))])
            .unwrap();

        let names: Vec<&str> = doc.field_names().collect();
        assert_eq!(
            names,
            vec![
                "document_key", "subject_uri", "index_date", "graph_uri",
                "property", "property_ns", "http://example.com/p",
            ]
        );
        assert_eq!(doc.first_value("index_date"), Some("19700101000000"));
    }

    #[test]
    fn test_accepts_borrowed_quads() {
        let quads = vec![quad("http://example.com/p", Literal::new_simple_literal("v"))];
        let doc = build_document(&key(), &quads).unwrap();
        assert_eq!(doc.value_count("property"), 1);
        assert_eq!(quads.len(), 1);
    }

    #[test]
    fn test_graph_collected_when_not_enforced() {
        let other = Quad::new(
            node("http://example.com/graph2"),
            node(SUBJECT),
            node("http://example.com/p"),
            Literal::new_simple_literal("v"),
        );
        let doc = build_document(&key(), [quad("http://example.com/p", node("http://example.com/o")), other])
            .unwrap();
        assert_eq!(
            doc.values("graph_uri").unwrap(),
            &[GRAPH.to_string(), "http://example.com/graph2".to_string()]
        );
    }

    #[test]
    fn test_graph_enforced_in_strict_mode() {
        let builder = DefaultDocumentBuilder::with_config(BuilderConfig::strict());
        let other = Quad::new(
            node("http://example.com/graph2"),
            node(SUBJECT),
            node("http://example.com/p"),
            Literal::new_simple_literal("v"),
        );
        assert_eq!(
            builder.build_document(&key(), [other]),
            Err(BuildError::InconsistentGraph {
                expected: GRAPH.to_string(),
                found: "http://example.com/graph2".to_string(),
            })
        );

        let ok = builder.build_document(&key(), [quad("http://example.com/p", node("http://example.com/o"))]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_nullable_inputs() {
        let builder = DefaultDocumentBuilder::new();
        assert_eq!(
            builder.build_nullable(None, Some(Vec::<Quad>::new())),
            Err(BuildError::InvalidKey(String::new()))
        );
        assert_eq!(
            builder.build_nullable(Some(key().as_str()), None::<Vec<Quad>>),
            Err(BuildError::NullQuadBatch)
        );
        assert!(builder
            .build_nullable(Some(key().as_str()), Some(Vec::<Quad>::new()))
            .is_ok());
    }

    #[test]
    fn test_quad_hook_sees_accepted_quads() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let builder = DefaultDocumentBuilder::new().with_quad_hook(Arc::new(move |q: &Quad| {
            sink.lock().unwrap().push(q.predicate.as_str().to_string());
        }));

        builder
            .build_document(
                &key(),
                [
                    quad("http://example.com/a", Literal::new_simple_literal("1")),
                    quad("http://example.com/b", Literal::new_simple_literal("2")),
                ],
            )
            .unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["http://example.com/a".to_string(), "http://example.com/b".to_string()]
        );
    }

    #[test]
    fn test_stops_reading_at_first_bad_quad() {
        let bad = Quad::new(
            node(GRAPH),
            node("http://example.com/other"),
            node("http://example.com/p"),
            Literal::new_simple_literal("v"),
        );
        let good = quad("http://example.com/p", Literal::new_simple_literal("v"));

        let mut consumed = 0;
        let quads = vec![good.clone(), bad, good].into_iter().inspect(|_| consumed += 1);
        let result = build_document(&key(), quads);

        assert!(matches!(result, Err(BuildError::InconsistentSubject { .. })));
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_builder_debug_hides_hook() {
        let builder = DefaultDocumentBuilder::new().with_quad_hook(Arc::new(|_: &Quad| {}));
        let rendered = format!("{:?}", builder);
        assert!(rendered.contains("<QuadHook>"));
        assert!(rendered.contains("enforce_graph_consistency: false"));
    }
}
