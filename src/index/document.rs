//! Flat multi-valued document handed to the search index
//!
//! A document maps field names to an ordered list of string values. The
//! field set is open: besides the fixed [`FieldName`]s there is one field per
//! predicate IRI that carried a literal.

use super::fields::FieldName;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name -> values, in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: IndexMap<String, Vec<String>>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all values of `name` with a single value
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), vec![value.into()]);
    }

    /// Append a value to `name`; duplicates are kept
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_default().push(value.into());
    }

    /// Append several values to `name`, keeping their order
    pub fn extend_field<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    /// All values of a field
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(|v| v.as_slice())
    }

    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|v| v.first())
            .map(|s| s.as_str())
    }

    /// Number of values of a field (0 when absent)
    pub fn value_count(&self, name: &str) -> usize {
        self.fields.get(name).map_or(0, |v| v.len())
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Remove a field, keeping the order of the others
    pub fn remove_field(&mut self, name: &str) -> Option<Vec<String>> {
        self.fields.shift_remove(name)
    }

    /// The `document_key` value
    pub fn key(&self) -> Option<&str> {
        self.first_value(FieldName::DocumentKey.as_str())
    }

    /// Number of distinct fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// JSON object of field -> array of values
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_field_keeps_duplicates_in_order() {
        let mut doc = Document::new();
        doc.add_field("http://example.com/p", "b");
        doc.add_field("http://example.com/p", "a");
        doc.add_field("http://example.com/p", "b");

        assert_eq!(doc.value_count("http://example.com/p"), 3);
        assert_eq!(
            doc.values("http://example.com/p").unwrap(),
            &["b".to_string(), "a".to_string(), "b".to_string()]
        );
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_set_field_replaces() {
        let mut doc = Document::new();
        doc.add_field(FieldName::SubjectUri, "http://example.com/a");
        doc.add_field(FieldName::SubjectUri, "http://example.com/b");
        doc.set_field(FieldName::SubjectUri, "http://example.com/c");

        assert_eq!(doc.value_count("subject_uri"), 1);
        assert_eq!(doc.first_value("subject_uri"), Some("http://example.com/c"));
    }

    #[test]
    fn test_missing_field() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.values("class"), None);
        assert_eq!(doc.value_count("class"), 0);
        assert_eq!(doc.key(), None);
    }

    #[test]
    fn test_remove_field_preserves_order() {
        let mut doc = Document::new();
        doc.set_field("a", "1");
        doc.set_field("b", "2");
        doc.set_field("c", "3");

        assert_eq!(doc.remove_field("b"), Some(vec!["2".to_string()]));
        assert_eq!(doc.field_names().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_json_form() {
        let mut doc = Document::new();
        doc.set_field(FieldName::DocumentKey, "g s");
        doc.extend_field(FieldName::Property, ["p1", "p2"]);

        let json = doc.to_json().unwrap();
        assert_eq!(json, r#"{"document_key":["g s"],"property":["p1","p2"]}"#);

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
        assert_eq!(back.key(), Some("g s"));
    }
}
