use super::PlanGenerationError;
use konverter_model::vocab::{rml, rr};
use konverter_model::{qualify_template, template_references, MappingGraph};
use std::fmt;

/// Primary language subtags accepted in language maps.
const LANGUAGE_SUBTAGS: [&str; 20] = [
    "en", "es", "fr", "de", "zh", "it", "ja", "ko", "no", "pt", "ru", "ar", "cs", "da", "nl", "fi",
    "el", "hi", "hu", "ro",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TermMapKind {
    Constant,
    Reference,
    Template,
}

impl fmt::Display for TermMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Constant => "constant",
            Self::Reference => "reference",
            Self::Template => "template",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TermType {
    Iri,
    BlankNode,
    Literal,
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Iri => "iri",
            Self::BlankNode => "blanknode",
            Self::Literal => "literal",
        })
    }
}

/// A term map reduced to what the plan needs. Prints as `value,kind,term type`.
///
/// A term map without a constant, reference or template prints an empty kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct TermMap {
    pub value: String,
    pub kind: Option<TermMapKind>,
    pub term_type: TermType,
}

impl TermMap {
    /// Reads the value of `node`, trying `rr:constant`, `rml:reference` and `rr:template` in
    /// this order. Each property only counts if it is unique.
    fn read(graph: &MappingGraph, node: &str, term_type: TermType) -> Self {
        [
            (rr::CONSTANT, TermMapKind::Constant),
            (rml::REFERENCE, TermMapKind::Reference),
            (rr::TEMPLATE, TermMapKind::Template),
        ]
        .into_iter()
        .find_map(|(predicate, kind)| {
            graph.single_object(node, predicate).map(|value| Self {
                value: value.to_owned(),
                kind: Some(kind),
                term_type,
            })
        })
        .unwrap_or(Self {
            value: String::new(),
            kind: None,
            term_type,
        })
    }

    /// Source attributes this term map reads.
    pub fn references(&self) -> Vec<&str> {
        match self.kind {
            Some(TermMapKind::Template) => template_references(&self.value),
            Some(TermMapKind::Reference) => vec![self.value.as_str()],
            Some(TermMapKind::Constant) | None => Vec::new(),
        }
    }

    /// Prefixes every attribute this term map reads with `<qualifier>_`.
    #[must_use]
    pub fn qualified(&self, qualifier: &str) -> Self {
        let value = match self.kind {
            Some(TermMapKind::Template) => qualify_template(&self.value, qualifier),
            Some(TermMapKind::Reference) => format!("{qualifier}_{}", self.value),
            Some(TermMapKind::Constant) | None => self.value.clone(),
        };
        Self {
            value,
            kind: self.kind,
            term_type: self.term_type,
        }
    }
}

impl fmt::Display for TermMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},", self.value)?;
        if let Some(kind) = self.kind {
            write!(f, "{kind}")?;
        }
        write!(f, ",{}", self.term_type)
    }
}

/// An object map with its language tag and datatype. Absent values print as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ObjectMap {
    pub term: TermMap,
    pub language: Option<String>,
    pub datatype: Option<String>,
}

impl fmt::Display for ObjectMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.term,
            self.language.as_deref().unwrap_or("None"),
            self.datatype.as_deref().unwrap_or("None")
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct JoinCondition {
    pub child: String,
    pub parent: String,
}

/// An object map referring to the subject of another triples map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ReferencingObjectMap {
    pub object: ObjectMap,
    pub condition: Option<JoinCondition>,
    pub parent_source: String,
}

/// The first object of `subject` via `predicate`.
pub(super) fn required<'a>(
    graph: &'a MappingGraph,
    subject: &str,
    predicate: &str,
) -> Result<&'a str, PlanGenerationError> {
    graph
        .objects_of(subject, predicate)
        .next()
        .ok_or_else(|| PlanGenerationError::Missing {
            subject: subject.to_owned(),
            predicate: predicate.to_owned(),
        })
}

/// Reads a subject map. Subjects are IRIs unless `rr:termType rr:BlankNode` says otherwise.
pub(super) fn subject_map(
    graph: &MappingGraph,
    node: &str,
) -> Result<TermMap, PlanGenerationError> {
    let term_type = match graph.single_object(node, rr::TERM_TYPE) {
        Some(rr::BLANK_NODE) => TermType::BlankNode,
        Some(rr::LITERAL) => return Err(PlanGenerationError::LiteralSubject),
        _ => TermType::Iri,
    };
    Ok(TermMap::read(graph, node, term_type))
}

/// Reads the predicate map of `pom`.
pub(super) fn predicate_map(
    graph: &MappingGraph,
    pom: &str,
) -> Result<TermMap, PlanGenerationError> {
    let node = required(graph, pom, rr::PREDICATE_MAP)?;
    Ok(TermMap::read(graph, node, TermType::Iri))
}

/// Reads the object map of `pom`.
///
/// Without an explicit term type, constants starting with `http` and templates produce IRIs
/// and everything else produces literals.
pub(super) fn object_map(graph: &MappingGraph, pom: &str) -> Result<ObjectMap, PlanGenerationError> {
    let node = required(graph, pom, rr::OBJECT_MAP)?;

    let language = match graph.single_object(node, rr::LANGUAGE_MAP) {
        Some(language_map) => {
            let tag = required(graph, language_map, rr::CONSTANT)?;
            if !is_supported_language(tag) {
                return Err(PlanGenerationError::UnsupportedLanguage(tag.to_owned()));
            }
            Some(tag.to_owned())
        }
        None => None,
    };
    let datatype = match graph.single_object(node, rr::DATATYPE_MAP) {
        Some(datatype_map) => Some(required(graph, datatype_map, rr::CONSTANT)?.to_owned()),
        None => None,
    };

    let explicit_type = graph
        .single_object(node, rr::TERM_TYPE)
        .map(|term_type| match term_type {
            rr::IRI => TermType::Iri,
            rr::BLANK_NODE => TermType::BlankNode,
            _ => TermType::Literal,
        });
    let mut term = TermMap::read(graph, node, TermType::Literal);
    term.term_type = explicit_type.unwrap_or_else(|| inferred_object_type(&term));

    Ok(ObjectMap {
        term,
        language,
        datatype,
    })
}

/// Reads the referencing object map of `pom` together with the source of its parent triples
/// map.
pub(super) fn referencing_object_map(
    graph: &MappingGraph,
    pom: &str,
) -> Result<ReferencingObjectMap, PlanGenerationError> {
    let node = required(graph, pom, rr::OBJECT_MAP)?;

    let condition = match graph.single_object(node, rr::JOIN_CONDITION) {
        Some(condition) => Some(JoinCondition {
            child: required(graph, condition, rr::CHILD)?.to_owned(),
            parent: required(graph, condition, rr::PARENT)?.to_owned(),
        }),
        None => None,
    };

    let parent = required(graph, node, rr::PARENT_TRIPLES_MAP)?;
    let parent_logical_source = required(graph, parent, rml::LOGICAL_SOURCE)?;
    let parent_source = required(graph, parent_logical_source, rml::SOURCE)?;
    let parent_subject = required(graph, parent, rr::SUBJECT_MAP)?;

    let mut term = TermMap::read(graph, parent_subject, TermType::Literal);
    term.term_type = inferred_object_type(&term);

    Ok(ReferencingObjectMap {
        object: ObjectMap {
            term,
            language: None,
            datatype: None,
        },
        condition,
        parent_source: parent_source.to_owned(),
    })
}

/// Reads the graph maps of the subject map and of `pom`.
///
/// `None` stands for the default graph. Graph maps without a value are skipped.
pub(super) fn graph_maps(
    graph: &MappingGraph,
    subject_map: &str,
    pom: &str,
) -> Vec<Option<TermMap>> {
    [subject_map, pom]
        .into_iter()
        .filter_map(|owner| graph.single_object(owner, rr::GRAPH_MAP))
        .map(|node| TermMap::read(graph, node, TermType::Iri))
        .filter(|term| term.kind.is_some())
        .map(|term| (term.value != rr::DEFAULT_GRAPH).then_some(term))
        .collect()
}

fn inferred_object_type(term: &TermMap) -> TermType {
    let is_iri = match term.kind {
        Some(TermMapKind::Constant) => term.value.starts_with("http"),
        Some(TermMapKind::Template) => true,
        Some(TermMapKind::Reference) | None => false,
    };
    if is_iri {
        TermType::Iri
    } else {
        TermType::Literal
    }
}

fn is_supported_language(tag: &str) -> bool {
    let primary = tag.split('-').next().unwrap_or(tag);
    LANGUAGE_SUBTAGS
        .iter()
        .any(|subtag| subtag.eq_ignore_ascii_case(primary))
}
