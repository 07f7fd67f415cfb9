use konverter_model::vocab::{rdf, rml, rr};
use konverter_model::{BlankNodeGenerator, MappingGraph, MappingTriple};
use std::collections::BTreeMap;

/// Replaces every `rr:class` of a subject map with a predicate-object map `rdf:type <class>` on
/// the triples map owning the subject map.
pub(super) fn expand_classes(
    mut graph: MappingGraph,
    blank_nodes: &mut BlankNodeGenerator,
) -> MappingGraph {
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for class in graph.iter().filter(|t| t.predicate == rr::CLASS) {
        removed.push(class.clone());
        let Some(owner) = graph.iter().find(|t| t.object == class.subject) else {
            continue;
        };

        let pom = blank_nodes.next_label();
        added.push(MappingTriple::new(&owner.subject, rr::PREDICATE_OBJECT_MAP, &pom));
        added.push(MappingTriple::new(&pom, rr::PREDICATE, rdf::TYPE));
        added.push(MappingTriple::new(pom, rr::OBJECT, &class.object));
    }

    graph.remove_each(&removed);
    graph.extend(added);
    graph
}

fn constant_map_predicate(shortcut: &str) -> Option<&'static str> {
    match shortcut {
        rr::SUBJECT => Some(rr::SUBJECT_MAP),
        rr::PREDICATE => Some(rr::PREDICATE_MAP),
        rr::OBJECT => Some(rr::OBJECT_MAP),
        rr::GRAPH => Some(rr::GRAPH_MAP),
        rr::DATATYPE => Some(rr::DATATYPE_MAP),
        rr::LANGUAGE => Some(rr::LANGUAGE_MAP),
        _ => None,
    }
}

/// Replaces the constant shortcuts (`rr:subject`, `rr:predicate`, ...) with term maps holding
/// an `rr:constant`.
pub(super) fn expand_constants(
    mut graph: MappingGraph,
    blank_nodes: &mut BlankNodeGenerator,
) -> MappingGraph {
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for triple in graph.iter() {
        let Some(map_predicate) = constant_map_predicate(&triple.predicate) else {
            continue;
        };
        let term_map = blank_nodes.next_label();
        added.push(MappingTriple::new(&triple.subject, map_predicate, &term_map));
        added.push(MappingTriple::new(term_map, rr::CONSTANT, &triple.object));
        removed.push(triple.clone());
    }

    graph.remove_each(&removed);
    graph.extend(added);
    graph
}

/// Splits predicate-object maps with several predicate or object maps into one map per
/// (predicate map, object map) pair.
///
/// All other properties of the split map (e.g. graph maps) are copied onto every new map.
pub(super) fn expand_predicate_object_maps(
    mut graph: MappingGraph,
    blank_nodes: &mut BlankNodeGenerator,
) -> MappingGraph {
    let mut parents: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for triple in graph.iter().filter(|t| t.predicate == rr::PREDICATE_OBJECT_MAP) {
        parents
            .entry(triple.object.clone())
            .or_default()
            .push(triple.subject.clone());
    }

    for (pom, parents) in parents {
        let predicate_maps = owned_objects(&graph, &pom, rr::PREDICATE_MAP);
        let object_maps = owned_objects(&graph, &pom, rr::OBJECT_MAP);
        if predicate_maps.len() <= 1 && object_maps.len() <= 1 {
            continue;
        }

        let removed = graph
            .iter()
            .filter(|t| {
                t.subject == pom || (t.predicate == rr::PREDICATE_OBJECT_MAP && t.object == pom)
            })
            .cloned()
            .collect::<Vec<_>>();
        let shared = removed
            .iter()
            .filter(|t| {
                t.subject == pom && t.predicate != rr::PREDICATE_MAP && t.predicate != rr::OBJECT_MAP
            })
            .map(|t| (t.predicate.clone(), t.object.clone()))
            .collect::<Vec<_>>();

        let mut added = Vec::new();
        for predicate_map in &predicate_maps {
            for object_map in &object_maps {
                let new_pom = blank_nodes.next_label();
                for parent in &parents {
                    added.push(MappingTriple::new(parent, rr::PREDICATE_OBJECT_MAP, &new_pom));
                }
                added.push(MappingTriple::new(&new_pom, rr::PREDICATE_MAP, predicate_map));
                added.push(MappingTriple::new(&new_pom, rr::OBJECT_MAP, object_map));
                for (predicate, object) in &shared {
                    added.push(MappingTriple::new(&new_pom, predicate, object));
                }
            }
        }

        graph.remove_each(&removed);
        graph.extend(added);
    }
    graph
}

/// Splits every triples map with several predicate-object maps into one triples map per
/// predicate-object map, named `<triples map>_<n>`.
///
/// The original triples map keeps its subject map and logical source but loses its
/// predicate-object maps.
pub(super) fn separate_predicate_object_maps(mut graph: MappingGraph) -> MappingGraph {
    let triples_maps = owned_subjects(&graph, rdf::TYPE, rr::TRIPLES_MAP);

    for triples_map in triples_maps {
        let poms = owned_objects(&graph, &triples_map, rr::PREDICATE_OBJECT_MAP);
        if poms.len() <= 1 {
            continue;
        }

        let subject_map = first_object(&graph, &triples_map, rr::SUBJECT_MAP);
        let logical_source = first_object(&graph, &triples_map, rml::LOGICAL_SOURCE);

        for (index, pom) in poms.iter().enumerate() {
            let new_map = format!("{triples_map}_{}", index + 1);
            graph.push(MappingTriple::new(&new_map, rdf::TYPE, rr::TRIPLES_MAP));

            if let Some(parent) = first_object(&graph, pom, rr::PARENT_TRIPLES_MAP) {
                graph.push(MappingTriple::new(&new_map, rr::PARENT_TRIPLES_MAP, &parent));
                if let Some(source) = first_object(&graph, &parent, rml::LOGICAL_SOURCE) {
                    graph.push(MappingTriple::new(&new_map, rml::LOGICAL_SOURCE, source));
                }
                if let Some(parent_subject) = first_object(&graph, &parent, rr::SUBJECT_MAP) {
                    graph.push(MappingTriple::new(&new_map, rr::SUBJECT_MAP, parent_subject));
                }
                for condition in owned_objects(&graph, pom, rr::JOIN_CONDITION) {
                    graph.push(MappingTriple::new(&new_map, rr::JOIN_CONDITION, condition));
                }
            } else {
                if let Some(subject_map) = &subject_map {
                    graph.push(MappingTriple::new(&new_map, rr::SUBJECT_MAP, subject_map));
                }
                if let Some(logical_source) = &logical_source {
                    graph.push(MappingTriple::new(&new_map, rml::LOGICAL_SOURCE, logical_source));
                }
            }

            graph.push(MappingTriple::new(new_map, rr::PREDICATE_OBJECT_MAP, pom));
        }

        let removed = poms
            .iter()
            .map(|pom| MappingTriple::new(&triples_map, rr::PREDICATE_OBJECT_MAP, pom))
            .collect::<Vec<_>>();
        graph.remove_each(&removed);
    }
    graph
}

fn owned_objects(graph: &MappingGraph, subject: &str, predicate: &str) -> Vec<String> {
    graph
        .objects_of(subject, predicate)
        .map(str::to_owned)
        .collect()
}

fn owned_subjects(graph: &MappingGraph, predicate: &str, object: &str) -> Vec<String> {
    graph
        .subjects(predicate, Some(object))
        .map(str::to_owned)
        .collect()
}

fn first_object(graph: &MappingGraph, subject: &str, predicate: &str) -> Option<String> {
    graph
        .objects_of(subject, predicate)
        .next()
        .map(str::to_owned)
}
