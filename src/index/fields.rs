//! Fixed field names shared with the downstream index schema

use std::fmt;

/// Fields every document may carry besides the per-predicate literal fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Identifier of the document (`"graph subject"`)
    DocumentKey,
    /// Graphs the subject's quads were found in
    GraphUri,
    /// The subject IRI
    SubjectUri,
    /// Build time, `yyyyMMddHHmmss` UTC
    IndexDate,
    /// Every predicate IRI seen
    Property,
    /// Namespace of every predicate
    PropertyNs,
    /// Every `rdf:type` class IRI
    Class,
    /// Namespace of every class
    ClassNs,
}

impl FieldName {
    pub const ALL: [FieldName; 8] = [
        FieldName::DocumentKey,
        FieldName::GraphUri,
        FieldName::SubjectUri,
        FieldName::IndexDate,
        FieldName::Property,
        FieldName::PropertyNs,
        FieldName::Class,
        FieldName::ClassNs,
    ];

    /// Fields present on every document, even one built from no quads
    pub const DEFAULTS: [FieldName; 3] = [
        FieldName::DocumentKey,
        FieldName::SubjectUri,
        FieldName::IndexDate,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldName::DocumentKey => "document_key",
            FieldName::GraphUri => "graph_uri",
            FieldName::SubjectUri => "subject_uri",
            FieldName::IndexDate => "index_date",
            FieldName::Property => "property",
            FieldName::PropertyNs => "property_ns",
            FieldName::Class => "class",
            FieldName::ClassNs => "class_ns",
        }
    }

    /// Look a fixed field up by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<FieldName> for String {
    fn from(field: FieldName) -> Self {
        field.as_str().to_string()
    }
}
