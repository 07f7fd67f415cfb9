use crate::config::Configuration;
use crate::error::GenerationError;
use crate::normalizer::NormalizedGraphSet;
use konverter_engine::EngineOutput;
use std::fmt;
use tracing::{debug, trace, warn};

/// One step of the logical plan. A single, non-empty line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelationalAlgebraExpression(String);

impl RelationalAlgebraExpression {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationalAlgebraExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ordered expressions of all sub-graphs.
///
/// Expressions are grouped by sub-graph in sorted order and keep the generator's order within
/// a group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogicalPlan {
    expressions: Vec<RelationalAlgebraExpression>,
}

impl LogicalPlan {
    pub fn expressions(&self) -> &[RelationalAlgebraExpression] {
        &self.expressions
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RelationalAlgebraExpression> {
        self.expressions.iter()
    }

    /// Appends the non-blank lines of `text`.
    fn extend_from_lines(&mut self, text: &str) {
        self.expressions.extend(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| RelationalAlgebraExpression(line.to_owned())),
        );
    }
}

impl FromIterator<String> for LogicalPlan {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut plan = Self::default();
        for text in iter {
            plan.extend_from_lines(&text);
        }
        plan
    }
}

impl<'a> IntoIterator for &'a LogicalPlan {
    type Item = &'a RelationalAlgebraExpression;
    type IntoIter = std::slice::Iter<'a, RelationalAlgebraExpression>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stage 3: plans every sub-graph with the plan generation engine.
#[derive(Debug, Clone, Copy)]
pub struct PlanGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> PlanGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Calls the engine once per sub-graph, in the order of `graphs`.
    ///
    /// Stops at the first sub-graph the engine fails on.
    pub fn generate(&self, graphs: &NormalizedGraphSet) -> Result<LogicalPlan, GenerationError> {
        let engine = self.config.engines().generator();
        let mut plan = LogicalPlan::default();
        for (graph_index, graph) in graphs.iter().enumerate() {
            match EngineOutput::from(engine.generate(graph.as_str())) {
                EngineOutput::Success(text) => {
                    trace!(graph_index, "Generated expressions:\n{text}");
                    plan.extend_from_lines(&text);
                }
                EngineOutput::ValidationFailure(message) => {
                    warn!(graph_index, "Plan generator rejected sub-graph:\n{graph}");
                    return Err(GenerationError::Validation {
                        graph_index,
                        message,
                    })
                }
                EngineOutput::Fatal => return Err(GenerationError::Absent { graph_index }),
            }
        }
        debug!(expressions = plan.len(), "Generated logical plan");
        Ok(plan)
    }
}
