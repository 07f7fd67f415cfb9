//! IRIs of the vocabularies that mapping documents are written in.

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.

    /// The class membership predicate.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

pub mod rr {
    //! [R2RML](https://www.w3.org/TR/r2rml/) vocabulary.

    pub const NAMESPACE: &str = "http://www.w3.org/ns/r2rml#";

    pub const TRIPLES_MAP: &str = "http://www.w3.org/ns/r2rml#TriplesMap";

    pub const SUBJECT_MAP: &str = "http://www.w3.org/ns/r2rml#subjectMap";
    pub const PREDICATE_OBJECT_MAP: &str = "http://www.w3.org/ns/r2rml#predicateObjectMap";
    pub const PREDICATE_MAP: &str = "http://www.w3.org/ns/r2rml#predicateMap";
    pub const OBJECT_MAP: &str = "http://www.w3.org/ns/r2rml#objectMap";
    pub const GRAPH_MAP: &str = "http://www.w3.org/ns/r2rml#graphMap";
    pub const DATATYPE_MAP: &str = "http://www.w3.org/ns/r2rml#datatypeMap";
    pub const LANGUAGE_MAP: &str = "http://www.w3.org/ns/r2rml#languageMap";

    /// Constant shortcut of [`SUBJECT_MAP`].
    pub const SUBJECT: &str = "http://www.w3.org/ns/r2rml#subject";
    /// Constant shortcut of [`PREDICATE_MAP`].
    pub const PREDICATE: &str = "http://www.w3.org/ns/r2rml#predicate";
    /// Constant shortcut of [`OBJECT_MAP`].
    pub const OBJECT: &str = "http://www.w3.org/ns/r2rml#object";
    /// Constant shortcut of [`GRAPH_MAP`].
    pub const GRAPH: &str = "http://www.w3.org/ns/r2rml#graph";
    /// Constant shortcut of [`DATATYPE_MAP`].
    pub const DATATYPE: &str = "http://www.w3.org/ns/r2rml#datatype";
    /// Constant shortcut of [`LANGUAGE_MAP`].
    pub const LANGUAGE: &str = "http://www.w3.org/ns/r2rml#language";

    pub const CLASS: &str = "http://www.w3.org/ns/r2rml#class";
    pub const CONSTANT: &str = "http://www.w3.org/ns/r2rml#constant";
    pub const TEMPLATE: &str = "http://www.w3.org/ns/r2rml#template";
    pub const TERM_TYPE: &str = "http://www.w3.org/ns/r2rml#termType";

    pub const PARENT_TRIPLES_MAP: &str = "http://www.w3.org/ns/r2rml#parentTriplesMap";
    pub const JOIN_CONDITION: &str = "http://www.w3.org/ns/r2rml#joinCondition";
    pub const CHILD: &str = "http://www.w3.org/ns/r2rml#child";
    pub const PARENT: &str = "http://www.w3.org/ns/r2rml#parent";

    pub const IRI: &str = "http://www.w3.org/ns/r2rml#IRI";
    pub const BLANK_NODE: &str = "http://www.w3.org/ns/r2rml#BlankNode";
    pub const LITERAL: &str = "http://www.w3.org/ns/r2rml#Literal";

    pub const DEFAULT_GRAPH: &str = "http://www.w3.org/ns/r2rml#defaultGraph";
}

pub mod rml {
    //! [RML](https://rml.io/specs/rml/) extensions of R2RML.

    pub const NAMESPACE: &str = "http://semweb.mmlab.be/ns/rml#";

    pub const LOGICAL_SOURCE: &str = "http://semweb.mmlab.be/ns/rml#logicalSource";
    pub const SOURCE: &str = "http://semweb.mmlab.be/ns/rml#source";
    pub const REFERENCE: &str = "http://semweb.mmlab.be/ns/rml#reference";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_live_in_their_namespace() {
        for iri in [rr::TRIPLES_MAP, rr::SUBJECT_MAP, rr::CONSTANT, rr::DEFAULT_GRAPH] {
            assert!(iri.starts_with(rr::NAMESPACE), "{iri} is not an R2RML term");
        }
        for iri in [rml::LOGICAL_SOURCE, rml::SOURCE, rml::REFERENCE] {
            assert!(iri.starts_with(rml::NAMESPACE), "{iri} is not an RML term");
        }
    }
}
