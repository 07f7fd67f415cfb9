use super::term_map::{self, TermMap};
use super::PlanGenerationError;
use konverter_model::vocab::{rml, rr};
use konverter_model::MappingGraph;
use std::collections::BTreeSet;

/// The first subject map owner with exactly one predicate-object map.
fn root_triples_map(graph: &MappingGraph) -> Result<&str, PlanGenerationError> {
    let mut owners = graph.subjects(rr::SUBJECT_MAP, None).peekable();
    if owners.peek().is_none() {
        return Err(PlanGenerationError::NoSubjectMap);
    }
    owners
        .find(|owner| graph.objects_of(owner, rr::PREDICATE_OBJECT_MAP).count() == 1)
        .ok_or(PlanGenerationError::NoRootTriplesMap)
}

/// Sorted, de-duplicated attributes read by `terms`.
fn projected_attributes<'a>(
    terms: impl IntoIterator<Item = &'a TermMap>,
    join_column: Option<&'a str>,
) -> String {
    terms
        .into_iter()
        .flat_map(TermMap::references)
        .chain(join_column)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds one expression per graph, or a single one without graph.
fn per_graph(
    graphs: &[Option<TermMap>],
    mut expression: impl FnMut(Option<&TermMap>) -> String,
) -> Vec<String> {
    if graphs.is_empty() {
        return vec![expression(None)];
    }
    let mut expressions = Vec::with_capacity(graphs.len());
    for graph in graphs {
        let candidate = expression(graph.as_ref());
        if !expressions.contains(&candidate) {
            expressions.push(candidate);
        }
    }
    expressions
}

/// Plans a sub-graph reading a single source.
///
/// `pi[create(S) -> S,create(P) -> P,create(O) -> O](pi[attributes](source))`
pub(super) fn simple_tree(graph: &MappingGraph) -> Result<Vec<String>, PlanGenerationError> {
    let source = graph
        .objects(None, Some(rml::SOURCE))
        .next()
        .ok_or(PlanGenerationError::NoSource)?;
    let root = root_triples_map(graph)?;
    let pom = term_map::required(graph, root, rr::PREDICATE_OBJECT_MAP)?;
    let subject_node = term_map::required(graph, root, rr::SUBJECT_MAP)?;

    let subject = term_map::subject_map(graph, subject_node)?;
    let predicate = term_map::predicate_map(graph, pom)?;
    let object = term_map::object_map(graph, pom)?;
    let graphs = term_map::graph_maps(graph, subject_node, pom);

    let attributes = projected_attributes(
        [&subject, &predicate, &object.term]
            .into_iter()
            .chain(graphs.iter().flatten()),
        None,
    );
    let projection = format!("pi[{attributes}]({source})");
    let create = format!("create({subject}) -> S,create({predicate}) -> P,create({object}) -> O");

    Ok(per_graph(&graphs, |graph| match graph {
        Some(graph) => format!("pi[{create}, create({graph}) -> G]({projection})"),
        None => format!("pi[{create}]({projection})"),
    }))
}

/// Plans a sub-graph joining a child and a parent triples map.
///
/// `pi[S,P,O]((pi[child attributes](source)) bowtie [condition] (pi[parent attributes](parent)))`
///
/// With a join condition the term maps read qualified attributes (`<source>_<attribute>`).
pub(super) fn join_tree(graph: &MappingGraph) -> Result<Vec<String>, PlanGenerationError> {
    let mut sources = graph.objects(None, Some(rml::SOURCE)).collect::<Vec<_>>();
    let root = root_triples_map(graph)?;
    let pom = term_map::required(graph, root, rr::PREDICATE_OBJECT_MAP)?;
    let subject_node = term_map::required(graph, root, rr::SUBJECT_MAP)?;

    let mut subject = term_map::subject_map(graph, subject_node)?;
    let mut predicate = term_map::predicate_map(graph, pom)?;
    let referencing = term_map::referencing_object_map(graph, pom)?;
    let mut object = referencing.object;
    let parent_source = referencing.parent_source.as_str();
    let mut graphs = term_map::graph_maps(graph, subject_node, pom);

    if sources.len() > 1 && sources[0] != sources[1] {
        sources.retain(|source| *source != parent_source);
    }
    let source = *sources.first().ok_or(PlanGenerationError::NoSource)?;

    let condition = referencing.condition.as_ref();
    let child_attributes = projected_attributes(
        [&subject, &predicate]
            .into_iter()
            .chain(graphs.iter().flatten()),
        condition.map(|c| c.child.as_str()),
    );
    let parent_attributes =
        projected_attributes([&object.term], condition.map(|c| c.parent.as_str()));
    let child = format!("pi[{child_attributes}]({source})");
    let parent = format!("pi[{parent_attributes}]({parent_source})");

    let join = match condition {
        None => format!("({child}) bowtie ({parent})"),
        Some(condition) => {
            subject = subject.qualified(source);
            predicate = predicate.qualified(source);
            object.term = object.term.qualified(parent_source);
            for graph_map in graphs.iter_mut().flatten() {
                *graph_map = graph_map.qualified(source);
            }
            format!(
                "({child}) bowtie [{source}_{}={parent_source}_{}] ({parent})",
                condition.child, condition.parent
            )
        }
    };
    let create = format!("create({subject}) -> S,create({predicate}) -> P,create({object}) -> O");

    Ok(per_graph(&graphs, |graph| match graph {
        Some(graph) => format!("pi[{create},create({graph}) -> G]({join})"),
        None => format!("pi[{create}]({join})"),
    }))
}
