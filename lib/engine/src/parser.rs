use crate::engine::MappingParserEngine;
use crate::error::EngineLoadError;
use crate::output::EngineOutput;
use konverter_model::{MappingGraph, MappingTriple, TERM_SEPARATOR};
use oxrdf::{Subject, Term};
use oxttl::{TurtleParser, TurtleSyntaxError};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

/// Reasons for rejecting a mapping document.
#[derive(Debug, thiserror::Error)]
pub enum MappingSyntaxError {
    #[error(transparent)]
    Syntax(#[from] TurtleSyntaxError),
    #[error("The term '{0}' contains a line break or '|||' and cannot be represented")]
    UnrepresentableTerm(String),
    #[error("Quoted triples are not supported in mapping documents")]
    QuotedTriple,
}

/// Parses Turtle mapping documents into the line format.
///
/// Prefixed names are expanded and relative IRIs are resolved against the base IRI given at
/// construction, unless the document declares its own `@base`. Blank nodes are relabelled
/// `b1`, `b2`, ... in the order they first appear.
pub struct TurtleMappingParser {
    base_iri: String,
    parser: TurtleParser,
}

impl fmt::Debug for TurtleMappingParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurtleMappingParser")
            .field("base_iri", &self.base_iri)
            .finish_non_exhaustive()
    }
}

impl TurtleMappingParser {
    /// Creates a parser resolving relative IRIs against `base_iri`.
    pub fn new(base_iri: &str) -> Result<Self, EngineLoadError> {
        let parser = TurtleParser::new()
            .with_base_iri(base_iri)
            .map_err(|error| EngineLoadError::InvalidBaseIri {
                iri: base_iri.to_owned(),
                error,
            })?;
        Ok(Self {
            base_iri: base_iri.to_owned(),
            parser,
        })
    }

    pub fn base_iri(&self) -> &str {
        &self.base_iri
    }

    /// Parses a whole document, stopping at the first error.
    pub fn parse_document(&self, mapping: &str) -> Result<MappingGraph, MappingSyntaxError> {
        let mut labels = BlankNodeLabels::default();
        let mut graph = MappingGraph::default();
        for triple in self.parser.clone().for_slice(mapping.as_bytes()) {
            let triple = triple?;
            let subject = labels.subject(triple.subject)?;
            let predicate = representable(triple.predicate.into_string())?;
            let object = labels.term(triple.object)?;
            graph.push(MappingTriple::new(subject, predicate, object));
        }
        debug!(triples = graph.len(), "Parsed mapping document");
        Ok(graph)
    }
}

impl MappingParserEngine for TurtleMappingParser {
    fn parse(&self, mapping: &str) -> Option<String> {
        match self.parse_document(mapping) {
            Ok(graph) => Some(graph.to_lines()),
            Err(error) => {
                debug!(%error, "Rejected mapping document");
                Some(EngineOutput::failure_text(error))
            }
        }
    }
}

#[derive(Default)]
struct BlankNodeLabels {
    labels: FxHashMap<String, String>,
}

impl BlankNodeLabels {
    fn label(&mut self, id: &str) -> String {
        let next = self.labels.len() + 1;
        self.labels
            .entry(id.to_owned())
            .or_insert_with(|| format!("b{next}"))
            .clone()
    }

    fn subject(&mut self, subject: Subject) -> Result<String, MappingSyntaxError> {
        match subject {
            Subject::NamedNode(node) => representable(node.into_string()),
            Subject::BlankNode(node) => Ok(self.label(node.as_str())),
            #[allow(unreachable_patterns, reason = "only reachable with the rdf-star feature")]
            _ => Err(MappingSyntaxError::QuotedTriple),
        }
    }

    fn term(&mut self, term: Term) -> Result<String, MappingSyntaxError> {
        match term {
            Term::NamedNode(node) => representable(node.into_string()),
            Term::BlankNode(node) => Ok(self.label(node.as_str())),
            Term::Literal(literal) => representable(literal.value().to_owned()),
            #[allow(unreachable_patterns, reason = "only reachable with the rdf-star feature")]
            _ => Err(MappingSyntaxError::QuotedTriple),
        }
    }
}

fn representable(term: String) -> Result<String, MappingSyntaxError> {
    if term.contains('\n') || term.contains('\r') || term.contains(TERM_SEPARATOR) {
        return Err(MappingSyntaxError::UnrepresentableTerm(term));
    }
    Ok(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use konverter_model::vocab::{rdf, rml, rr};

    const BASE: &str = "http://example.com/base/";

    fn parse(document: &str) -> MappingGraph {
        TurtleMappingParser::new(BASE)
            .unwrap()
            .parse_document(document)
            .unwrap()
    }

    #[test]
    fn expands_prefixes_and_relabels_blank_nodes() {
        let graph = parse(
            r#"
            @prefix rr: <http://www.w3.org/ns/r2rml#> .
            @prefix rml: <http://semweb.mmlab.be/ns/rml#> .

            <#TriplesMap1> a rr:TriplesMap ;
                rml:logicalSource [ rml:source "student.csv" ] ;
                rr:subjectMap [ rr:template "http://example.com/{Name}" ] .
            "#,
        );
        let tm = "http://example.com/base/#TriplesMap1";
        let mut triples = graph.triples().to_vec();
        triples.sort();
        let mut expected = vec![
            MappingTriple::new(tm, rdf::TYPE, rr::TRIPLES_MAP),
            MappingTriple::new("b1", rml::SOURCE, "student.csv"),
            MappingTriple::new(tm, rml::LOGICAL_SOURCE, "b1"),
            MappingTriple::new("b2", rr::TEMPLATE, "http://example.com/{Name}"),
            MappingTriple::new(tm, rr::SUBJECT_MAP, "b2"),
        ];
        expected.sort();
        assert_eq!(triples, expected);
    }

    #[test]
    fn labeled_blank_nodes_keep_identity() {
        let graph = parse(
            r#"
            @prefix rr: <http://www.w3.org/ns/r2rml#> .
            _:sm rr:constant <http://example.com/a> .
            <http://example.com/tm> rr:subjectMap _:sm .
            <http://example.com/tm2> rr:subjectMap _:sm .
            "#,
        );
        assert_eq!(graph.objects(None, Some(rr::SUBJECT_MAP)).collect::<Vec<_>>(), ["b1", "b1"]);
    }

    #[test]
    fn document_base_overrides_configured_base() {
        let graph = parse(
            r#"
            @base <http://other.org/> .
            <tm> <p> "o" .
            "#,
        );
        assert_eq!(
            graph.triples(),
            &[MappingTriple::new("http://other.org/tm", "http://other.org/p", "o")]
        );
    }

    #[test]
    fn syntax_errors_are_reported_with_error_prefix() {
        let parser = TurtleMappingParser::new(BASE).unwrap();
        let result = parser.parse("xyz:a xyz:b xyz:c .").unwrap();
        assert!(result.starts_with("Error: "), "{result}");
        assert!(matches!(
            EngineOutput::from(Some(result)),
            EngineOutput::ValidationFailure(_)
        ));
    }

    #[test]
    fn rejects_multiline_literals() {
        let parser = TurtleMappingParser::new(BASE).unwrap();
        let error = parser
            .parse_document("<http://e.org/s> <http://e.org/p> \"\"\"a\nb\"\"\" .")
            .unwrap_err();
        assert!(matches!(error, MappingSyntaxError::UnrepresentableTerm(_)));
    }

    #[test]
    fn rejects_separator_in_terms() {
        let parser = TurtleMappingParser::new(BASE).unwrap();
        let error = parser
            .parse_document("<http://e.org/s> <http://e.org/p> \"a|||b\" .")
            .unwrap_err();
        assert!(matches!(error, MappingSyntaxError::UnrepresentableTerm(_)));
    }

    #[test]
    fn invalid_base_iri_fails_acquisition() {
        let error = TurtleMappingParser::new("not an iri").unwrap_err();
        assert!(matches!(error, EngineLoadError::InvalidBaseIri { .. }));
    }

    #[test]
    fn debug_shows_base_iri() {
        let parser = TurtleMappingParser::new(BASE).unwrap();
        assert_eq!(
            format!("{parser:?}"),
            "TurtleMappingParser { base_iri: \"http://example.com/base/\", .. }"
        );
    }

    #[test]
    fn empty_document_yields_empty_text() {
        let parser = TurtleMappingParser::new(BASE).unwrap();
        assert_eq!(parser.parse("").as_deref(), Some(""));
    }
}
