//! Translates one normalized sub-graph into relational-algebra expressions.
//!
//! A sub-graph with two subject maps describes a join between a child and a parent triples
//! map. Every other sub-graph reads a single source.

mod term_map;
mod tree;

use crate::engine::PlanGeneratorEngine;
use crate::output::EngineOutput;
use konverter_model::vocab::rr;
use konverter_model::{MappingGraph, TripleLineError};
use tracing::debug;

/// Reasons for rejecting a sub-graph.
#[derive(Debug, thiserror::Error)]
pub enum PlanGenerationError {
    #[error(transparent)]
    MalformedLine(#[from] TripleLineError),
    #[error("No triple maps found.")]
    NoSubjectMap,
    #[error("No root subject node with predicateObjectMap found.")]
    NoRootTriplesMap,
    #[error("No logical source found.")]
    NoSource,
    #[error("'{subject}' has no <{predicate}>")]
    Missing { subject: String, predicate: String },
    #[error("Literal not supported!")]
    LiteralSubject,
    #[error("Language tag '{0}' is not supported!")]
    UnsupportedLanguage(String),
}

/// The native relational-algebra generator.
///
/// Structural problems are reported as error results; the engine never returns an absent
/// result.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelationalAlgebraEngine;

impl RelationalAlgebraEngine {
    pub fn new() -> Self {
        Self
    }

    /// Returns the expressions for `sub_graph` in output order.
    pub fn plan(&self, sub_graph: &MappingGraph) -> Result<Vec<String>, PlanGenerationError> {
        let expressions = if sub_graph.count_predicate(rr::SUBJECT_MAP) == 2 {
            tree::join_tree(sub_graph)?
        } else {
            tree::simple_tree(sub_graph)?
        };
        debug!(expressions = expressions.len(), "Planned sub-graph");
        Ok(expressions)
    }

    fn plan_text(&self, sub_graph: &str) -> Result<String, PlanGenerationError> {
        let graph = MappingGraph::parse(sub_graph)?;
        let mut text = String::new();
        for expression in self.plan(&graph)? {
            text.push_str(&expression);
            text.push('\n');
        }
        Ok(text)
    }
}

impl PlanGeneratorEngine for RelationalAlgebraEngine {
    fn generate(&self, sub_graph: &str) -> Option<String> {
        match self.plan_text(sub_graph) {
            Ok(text) => Some(text),
            Err(error) => {
                debug!(%error, "Rejected sub-graph");
                Some(EngineOutput::failure_text(error))
            }
        }
    }
}
