//! Rewrites a parsed mapping into one canonical sub-graph per triples map.
//!
//! The rewrite runs in a fixed order: class expansion, constant expansion, predicate-object map
//! expansion and predicate-object map separation. Afterwards every triples map has at most one
//! predicate-object map and every term map is spelled out, which is the shape the plan
//! generator expects.

mod extract;
mod rewrite;

use crate::engine::NormalizerEngine;
use crate::output::{EngineOutput, GRAPH_DELIMITER};
use konverter_model::vocab::{rdf, rr};
use konverter_model::{is_blank_node_label, BlankNodeGenerator, MappingGraph, TripleLineError};
use tracing::debug;

/// Reasons for rejecting a parsed mapping.
#[derive(Debug, thiserror::Error)]
pub enum NormalizationError {
    #[error(transparent)]
    MalformedLine(#[from] TripleLineError),
    #[error("Found multiple subject maps!")]
    MultipleSubjectMaps { triples_map: String },
    #[error("No TMs found.")]
    NoTriplesMaps,
}

/// The native normalizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct MappingNormalizerEngine;

impl MappingNormalizerEngine {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes `graph`, numbering new blank nodes after `blank_node_seed`.
    ///
    /// Labels already used by `graph` are never handed out again: numbering starts after the
    /// highest existing `b<digits>` label if that is above the seed.
    ///
    /// Returns the sub-graphs in the order of their triples maps.
    pub fn normalize_graph(
        &self,
        graph: MappingGraph,
        blank_node_seed: u32,
    ) -> Result<Vec<MappingGraph>, NormalizationError> {
        validate(&graph)?;

        let start = highest_blank_node_label(&graph).max(u64::from(blank_node_seed));
        let mut blank_nodes = BlankNodeGenerator::new(start);
        let graph = rewrite::expand_classes(graph, &mut blank_nodes);
        let graph = rewrite::expand_constants(graph, &mut blank_nodes);
        let graph = rewrite::expand_predicate_object_maps(graph, &mut blank_nodes);
        let graph = rewrite::separate_predicate_object_maps(graph);
        debug!(
            triples = graph.len(),
            last_blank_node = blank_nodes.counter(),
            "Rewrote mapping"
        );

        extract::sub_graphs(&graph)
    }

    fn normalize_text(
        &self,
        parsed_mapping: &str,
        blank_node_seed: u32,
    ) -> Result<String, NormalizationError> {
        let graph = MappingGraph::parse(parsed_mapping)?;
        let sub_graphs = self.normalize_graph(graph, blank_node_seed)?;
        debug!(sub_graphs = sub_graphs.len(), "Extracted sub-graphs");

        let mut result = String::new();
        for sub_graph in &sub_graphs {
            result.push_str(&sub_graph.to_lines());
            result.push_str(GRAPH_DELIMITER);
        }
        Ok(result)
    }
}

impl NormalizerEngine for MappingNormalizerEngine {
    fn normalize(&self, parsed_mapping: &str, blank_node_seed: u32) -> Option<String> {
        match self.normalize_text(parsed_mapping, blank_node_seed) {
            Ok(text) => Some(text),
            Err(error) => {
                debug!(%error, "Rejected parsed mapping");
                Some(EngineOutput::failure_text(error))
            }
        }
    }
}

fn highest_blank_node_label(graph: &MappingGraph) -> u64 {
    graph
        .iter()
        .flat_map(|t| [t.subject.as_str(), t.object.as_str()])
        .filter(|term| is_blank_node_label(term))
        .filter_map(|label| label[1..].parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

fn validate(graph: &MappingGraph) -> Result<(), NormalizationError> {
    for triples_map in graph.subjects(rdf::TYPE, Some(rr::TRIPLES_MAP)) {
        if graph.objects_of(triples_map, rr::SUBJECT_MAP).count() > 1 {
            return Err(NormalizationError::MultipleSubjectMaps {
                triples_map: triples_map.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use konverter_model::vocab::rml;
    use konverter_model::MappingTriple;

    const TM: &str = "http://example.com/base/#TriplesMap1";

    fn student_mapping() -> MappingGraph {
        MappingGraph::new(vec![
            MappingTriple::new(TM, rdf::TYPE, rr::TRIPLES_MAP),
            MappingTriple::new(TM, rml::LOGICAL_SOURCE, "b1"),
            MappingTriple::new("b1", rml::SOURCE, "student.csv"),
            MappingTriple::new(TM, rr::SUBJECT_MAP, "b2"),
            MappingTriple::new("b2", rr::TEMPLATE, "http://example.com/{Name}"),
            MappingTriple::new(TM, rr::PREDICATE_OBJECT_MAP, "b3"),
            MappingTriple::new("b3", rr::PREDICATE, "http://example.com/name"),
            MappingTriple::new("b3", rr::OBJECT_MAP, "b4"),
            MappingTriple::new("b4", rml::REFERENCE, "Name"),
        ])
    }

    #[test]
    fn single_triples_map_yields_one_sub_graph() {
        let text = MappingNormalizerEngine::new()
            .normalize(&student_mapping().to_lines(), 10)
            .unwrap();
        insta::assert_snapshot!(text, @r"
        http://example.com/base/#TriplesMap1|||http://www.w3.org/1999/02/22-rdf-syntax-ns#type|||http://www.w3.org/ns/r2rml#TriplesMap
        http://example.com/base/#TriplesMap1|||http://semweb.mmlab.be/ns/rml#logicalSource|||b1
        http://example.com/base/#TriplesMap1|||http://www.w3.org/ns/r2rml#subjectMap|||b2
        http://example.com/base/#TriplesMap1|||http://www.w3.org/ns/r2rml#predicateObjectMap|||b3
        b3|||http://www.w3.org/ns/r2rml#objectMap|||b4
        b3|||http://www.w3.org/ns/r2rml#predicateMap|||b11
        b11|||http://www.w3.org/ns/r2rml#constant|||http://example.com/name
        b4|||http://semweb.mmlab.be/ns/rml#reference|||Name
        b2|||http://www.w3.org/ns/r2rml#template|||http://example.com/{Name}
        b1|||http://semweb.mmlab.be/ns/rml#source|||student.csv
        ====
        ");
    }

    #[test]
    fn class_becomes_separate_sub_graph() {
        let mut mapping = student_mapping();
        mapping.push(MappingTriple::new("b2", rr::CLASS, "http://example.com/Student"));

        let sub_graphs = MappingNormalizerEngine::new()
            .normalize_graph(mapping, 100)
            .unwrap();

        let names = sub_graphs
            .iter()
            .map(|g| g.triples()[0].subject.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, [format!("{TM}_1"), format!("{TM}_2")]);

        let class_graph = &sub_graphs[1];
        let predicate_map = class_graph
            .objects(None, Some(rr::PREDICATE_MAP))
            .next()
            .unwrap();
        assert_eq!(
            class_graph.single_object(predicate_map, rr::CONSTANT),
            Some(rdf::TYPE)
        );
        let object_map = class_graph.objects(None, Some(rr::OBJECT_MAP)).next().unwrap();
        assert_eq!(
            class_graph.single_object(object_map, rr::CONSTANT),
            Some("http://example.com/Student")
        );
        assert_eq!(class_graph.count_predicate(rr::CLASS), 0);
    }

    #[test]
    fn blank_nodes_are_numbered_after_seed() {
        let sub_graphs = MappingNormalizerEngine::new()
            .normalize_graph(student_mapping(), 58932)
            .unwrap();
        let predicate_map = sub_graphs[0]
            .objects(None, Some(rr::PREDICATE_MAP))
            .next()
            .unwrap();
        assert_eq!(predicate_map, "b58933");
    }

    #[test]
    fn low_seed_does_not_reuse_document_labels() {
        let mut mapping = student_mapping();
        mapping.push(MappingTriple::new("b2", rr::CLASS, "http://example.com/Student"));

        let sub_graphs = MappingNormalizerEngine::new()
            .normalize_graph(mapping, 0)
            .unwrap();
        assert_eq!(sub_graphs.len(), 2);
        let predicate_maps = sub_graphs
            .iter()
            .flat_map(|g| g.objects(None, Some(rr::PREDICATE_MAP)))
            .collect::<Vec<_>>();
        assert_eq!(predicate_maps, ["b6", "b7"]);
    }

    #[test]
    fn normalization_is_deterministic() {
        let mut mapping = student_mapping();
        mapping.push(MappingTriple::new("b3", rr::OBJECT_MAP, "b5"));
        mapping.push(MappingTriple::new("b5", rr::CONSTANT, "fixed"));
        let engine = MappingNormalizerEngine::new();
        let text = mapping.to_lines();
        assert_eq!(engine.normalize(&text, 7), engine.normalize(&text, 7));
    }

    #[test]
    fn multiple_subject_maps_are_rejected() {
        let mut mapping = student_mapping();
        mapping.push(MappingTriple::new(TM, rr::SUBJECT_MAP, "b9"));
        let result = MappingNormalizerEngine::new().normalize(&mapping.to_lines(), 0);
        assert_eq!(result.as_deref(), Some("Error: Found multiple subject maps!"));
    }

    #[test]
    fn missing_triples_maps_are_rejected() {
        let result = MappingNormalizerEngine::new().normalize("a|||b|||c\n", 0);
        assert_eq!(result.as_deref(), Some("Error: No TMs found."));
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let result = MappingNormalizerEngine::new().normalize("a|||b\n", 0).unwrap();
        assert!(result.starts_with("Error: line 1:"), "{result}");
    }

    #[test]
    fn incomplete_triples_maps_are_dropped() {
        let mapping = MappingGraph::new(vec![
            MappingTriple::new(TM, rdf::TYPE, rr::TRIPLES_MAP),
            MappingTriple::new(TM, rr::SUBJECT_MAP, "b1"),
            MappingTriple::new("b1", rr::TEMPLATE, "http://example.com/{id}"),
        ]);
        let result = MappingNormalizerEngine::new().normalize(&mapping.to_lines(), 0);
        assert_eq!(result.as_deref(), Some(""));
    }
}
