//! Namespace handling for IRIs
//!
//! Splits an IRI into a namespace prefix and a local name using the usual
//! QName heuristic: cut after the last `#`, otherwise after the last `/`.

use oxrdf::vocab::rdf;

/// The `rdf:type` predicate IRI
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Split an IRI into `(namespace, local_name)`.
///
/// The namespace keeps its trailing delimiter. An IRI with neither `#` nor
/// `/` is all namespace and has an empty local name. Never fails.
pub fn split_iri(iri: &str) -> (&str, &str) {
    let cut = iri
        .rfind('#')
        .or_else(|| iri.rfind('/'))
        .map(|pos| pos + 1)
        .unwrap_or(iri.len());
    iri.split_at(cut)
}

/// Namespace part of an IRI
pub fn namespace_of(iri: &str) -> &str {
    split_iri(iri).0
}

/// Whether `iri` is the `rdf:type` predicate
pub fn is_rdf_type(iri: &str) -> bool {
    iri == rdf::TYPE.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdf_type_matches_vocab() {
        assert_eq!(RDF_TYPE, rdf::TYPE.as_str());
        assert!(is_rdf_type(RDF_TYPE));
        assert!(!is_rdf_type("http://www.w3.org/2000/01/rdf-schema#label"));
    }

    #[test]
    fn test_split_on_slash() {
        assert_eq!(
            split_iri("http://example.com/schema/predicate/0"),
            ("http://example.com/schema/predicate/", "0")
        );
        assert_eq!(
            split_iri("http://xmlns.com/foaf/0.1/name"),
            ("http://xmlns.com/foaf/0.1/", "name")
        );
    }

    #[test]
    fn test_split_prefers_hash() {
        assert_eq!(
            split_iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            ("http://www.w3.org/1999/02/22-rdf-syntax-ns#", "type")
        );
        // '#' wins even when a '/' follows it
        assert_eq!(
            split_iri("http://example.com/doc#section/part"),
            ("http://example.com/doc#", "section/part")
        );
    }

    #[test]
    fn test_split_without_delimiter() {
        assert_eq!(split_iri("urn:isbn:0451450523"), ("urn:isbn:0451450523", ""));
        assert_eq!(split_iri(""), ("", ""));
    }

    #[test]
    fn test_trailing_delimiter() {
        assert_eq!(
            split_iri("http://example.com/schema/"),
            ("http://example.com/schema/", "")
        );
        assert_eq!(namespace_of("http://example.com/ns#"), "http://example.com/ns#");
    }
}
