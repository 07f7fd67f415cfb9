use super::NormalizationError;
use konverter_model::vocab::{rdf, rml, rr};
use konverter_model::{is_blank_node_label, is_http_iri, MappingGraph};
use rustc_hash::FxHashSet;

/// Predicates whose objects are values, never nodes of the mapping.
const VALUE_PREDICATES: [&str; 7] = [
    rr::CONSTANT,
    rr::TEMPLATE,
    rml::REFERENCE,
    rml::SOURCE,
    rr::CHILD,
    rr::PARENT,
    rr::TERM_TYPE,
];

/// Collects one sub-graph per triples map.
///
/// Sub-graphs missing a subject map, a predicate map or an object map are dropped.
pub(super) fn sub_graphs(graph: &MappingGraph) -> Result<Vec<MappingGraph>, NormalizationError> {
    let triples_maps = graph
        .subjects(rdf::TYPE, Some(rr::TRIPLES_MAP))
        .collect::<Vec<_>>();
    if triples_maps.is_empty() {
        return Err(NormalizationError::NoTriplesMaps);
    }

    Ok(triples_maps
        .into_iter()
        .map(|triples_map| reachable_sub_graph(graph, triples_map))
        .filter(|sub_graph| {
            sub_graph.count_predicate(rr::SUBJECT_MAP) > 0
                && sub_graph.count_predicate(rr::PREDICATE_MAP) > 0
                && sub_graph.count_predicate(rr::OBJECT_MAP) > 0
        })
        .collect())
}

/// Depth-first traversal from `root` over blank nodes and http IRIs. Objects of
/// [`VALUE_PREDICATES`] are not followed.
///
/// Only the first predicate-object map edge met during the traversal is followed.
fn reachable_sub_graph(graph: &MappingGraph, root: &str) -> MappingGraph {
    let mut sub_graph = MappingGraph::default();
    let mut visited = FxHashSet::default();
    let mut stack = vec![root];
    let mut found_predicate_object_map = false;

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        for triple in graph.iter().filter(|t| t.subject == current) {
            if triple.predicate == rr::PREDICATE_OBJECT_MAP {
                if found_predicate_object_map {
                    continue;
                }
                found_predicate_object_map = true;
            }

            sub_graph.push(triple.clone());
            let object = triple.object.as_str();
            let is_node = is_blank_node_label(object) || is_http_iri(object);
            if is_node
                && !VALUE_PREDICATES.contains(&triple.predicate.as_str())
                && !visited.contains(object)
            {
                stack.push(object);
            }
        }
    }
    sub_graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use konverter_model::MappingTriple;

    #[test]
    fn only_first_predicate_object_map_is_followed() {
        let graph = MappingGraph::new(vec![
            MappingTriple::new("http://e.org/tm", rdf::TYPE, rr::TRIPLES_MAP),
            MappingTriple::new("http://e.org/tm", rr::PREDICATE_OBJECT_MAP, "b1"),
            MappingTriple::new("http://e.org/tm", rr::PREDICATE_OBJECT_MAP, "b2"),
            MappingTriple::new("b1", rr::PREDICATE_MAP, "b3"),
            MappingTriple::new("b2", rr::PREDICATE_MAP, "b4"),
        ]);
        let sub_graph = reachable_sub_graph(&graph, "http://e.org/tm");
        assert_eq!(
            sub_graph.triples(),
            &[
                MappingTriple::new("http://e.org/tm", rdf::TYPE, rr::TRIPLES_MAP),
                MappingTriple::new("http://e.org/tm", rr::PREDICATE_OBJECT_MAP, "b1"),
                MappingTriple::new("b1", rr::PREDICATE_MAP, "b3"),
            ]
        );
    }

    #[test]
    fn literals_are_not_traversed() {
        let graph = MappingGraph::new(vec![
            MappingTriple::new("b1", rml::SOURCE, "data.csv"),
            MappingTriple::new("data.csv", rml::SOURCE, "other.csv"),
        ]);
        assert_eq!(reachable_sub_graph(&graph, "b1").len(), 1);
    }

    #[test]
    fn values_shaped_like_labels_are_not_traversed() {
        let graph = MappingGraph::new(vec![
            MappingTriple::new("http://e.org/tm", rml::LOGICAL_SOURCE, "b1"),
            MappingTriple::new("b1", rml::SOURCE, "people.csv"),
            MappingTriple::new("http://e.org/tm", rr::SUBJECT_MAP, "b2"),
            MappingTriple::new("b2", rml::REFERENCE, "b7"),
            MappingTriple::new("http://e.org/other", rml::LOGICAL_SOURCE, "b7"),
            MappingTriple::new("b7", rml::SOURCE, "other.csv"),
        ]);
        let sub_graph = reachable_sub_graph(&graph, "http://e.org/tm");
        assert_eq!(sub_graph.len(), 4);
        assert_eq!(
            sub_graph.objects(None, Some(rml::SOURCE)).collect::<Vec<_>>(),
            ["people.csv"]
        );
    }

    #[test]
    fn cycles_terminate() {
        let graph = MappingGraph::new(vec![
            MappingTriple::new("b1", rr::OBJECT_MAP, "b2"),
            MappingTriple::new("b2", rr::OBJECT_MAP, "b1"),
        ]);
        assert_eq!(reachable_sub_graph(&graph, "b1").len(), 2);
    }
}
