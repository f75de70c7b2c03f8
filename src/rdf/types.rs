//! RDF type definitions
//!
//! Thin wrappers around the oxrdf primitives. Only the shapes a search
//! document can be built from are modelled: every quad component is an IRI,
//! except the object which may also be a literal.

use super::namespace::split_iri;
use oxrdf::{
    GraphName as OxGraphName,
    Literal as OxLiteral,
    NamedNode as OxNamedNode,
    Quad as OxQuad,
    Subject as OxSubject,
    Term as OxTerm,
};
use std::fmt;
use thiserror::Error;

/// RDF errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Invalid literal
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// Term that has no IRI (blank node, default graph, quoted triple)
    #[error("Unsupported {position} term: {term}")]
    UnsupportedTerm {
        position: &'static str,
        term: String,
    },
}

pub type RdfResult<T> = Result<T, RdfError>;

/// Named node (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Create a new named node from an IRI string
    pub fn new(iri: &str) -> RdfResult<Self> {
        OxNamedNode::new(iri)
            .map(Self)
            .map_err(|e| RdfError::InvalidIri(format!("{}: {}", iri, e)))
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Namespace part of the IRI, delimiter included
    pub fn namespace(&self) -> &str {
        split_iri(self.as_str()).0
    }

    /// Local name part of the IRI (may be empty)
    pub fn local_name(&self) -> &str {
        split_iri(self.as_str()).1
    }

    /// Get the inner oxrdf NamedNode
    pub fn inner(&self) -> &OxNamedNode {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl From<OxNamedNode> for NamedNode {
    fn from(node: OxNamedNode) -> Self {
        Self(node)
    }
}

impl From<NamedNode> for OxNamedNode {
    fn from(node: NamedNode) -> Self {
        node.0
    }
}

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// Create a simple literal (plain string)
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    /// Create a literal with language tag
    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> RdfResult<Self> {
        OxLiteral::new_language_tagged_literal(value, language)
            .map(Self)
            .map_err(|e| RdfError::InvalidLiteral(e.to_string()))
    }

    /// Create a typed literal
    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// Get the language tag if present
    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    /// Get the datatype
    pub fn datatype(&self) -> NamedNode {
        NamedNode(self.0.datatype().into_owned())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lang) = self.language() {
            write!(f, "\"{}\"@{}", self.value(), lang)
        } else {
            write!(f, "\"{}\"^^{}", self.value(), self.datatype())
        }
    }
}

impl From<OxLiteral> for Literal {
    fn from(lit: OxLiteral) -> Self {
        Self(lit)
    }
}

/// Object of a quad: either a resource reference or a literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectNode {
    /// Resource reference (IRI)
    Uri(NamedNode),
    /// Literal value
    Literal(Literal),
}

impl ObjectNode {
    /// Check if this is a resource reference
    pub fn is_uri(&self) -> bool {
        matches!(self, ObjectNode::Uri(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, ObjectNode::Literal(_))
    }

    pub fn as_uri(&self) -> Option<&NamedNode> {
        match self {
            ObjectNode::Uri(n) => Some(n),
            ObjectNode::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            ObjectNode::Literal(l) => Some(l),
            ObjectNode::Uri(_) => None,
        }
    }
}

impl fmt::Display for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectNode::Uri(n) => write!(f, "{}", n),
            ObjectNode::Literal(l) => write!(f, "{}", l),
        }
    }
}

impl From<NamedNode> for ObjectNode {
    fn from(node: NamedNode) -> Self {
        ObjectNode::Uri(node)
    }
}

impl From<Literal> for ObjectNode {
    fn from(lit: Literal) -> Self {
        ObjectNode::Literal(lit)
    }
}

/// RDF quad (triple + named graph)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    /// Named graph
    pub graph: NamedNode,
    /// Subject
    pub subject: NamedNode,
    /// Predicate
    pub predicate: NamedNode,
    /// Object
    pub object: ObjectNode,
}

impl Quad {
    /// Create a new quad
    pub fn new(
        graph: NamedNode,
        subject: NamedNode,
        predicate: NamedNode,
        object: impl Into<ObjectNode>,
    ) -> Self {
        Self {
            graph,
            subject,
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} .",
            self.subject, self.predicate, self.object, self.graph
        )
    }
}

impl TryFrom<OxQuad> for Quad {
    type Error = RdfError;

    fn try_from(quad: OxQuad) -> RdfResult<Self> {
        let subject = match quad.subject {
            OxSubject::NamedNode(n) => NamedNode(n),
            #[allow(unreachable_patterns)]
            other => {
                return Err(RdfError::UnsupportedTerm {
                    position: "subject",
                    term: other.to_string(),
                })
            }
        };

        let object = match quad.object {
            OxTerm::NamedNode(n) => ObjectNode::Uri(NamedNode(n)),
            OxTerm::Literal(l) => ObjectNode::Literal(Literal(l)),
            #[allow(unreachable_patterns)]
            other => {
                return Err(RdfError::UnsupportedTerm {
                    position: "object",
                    term: other.to_string(),
                })
            }
        };

        let graph = match quad.graph_name {
            OxGraphName::NamedNode(n) => NamedNode(n),
            other => {
                return Err(RdfError::UnsupportedTerm {
                    position: "graph",
                    term: other.to_string(),
                })
            }
        };

        Ok(Self {
            graph,
            subject,
            predicate: NamedNode(quad.predicate),
            object,
        })
    }
}
