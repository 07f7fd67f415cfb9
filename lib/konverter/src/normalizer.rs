use crate::config::Configuration;
use crate::error::NormalizeError;
use crate::loader::ParsedMapping;
use konverter_engine::{EngineOutput, GRAPH_DELIMITER};
use std::fmt;
use tracing::debug;

/// One canonical unit of a normalized mapping. Never empty or whitespace-only.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubGraph(String);

impl SubGraph {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The sub-graphs of a normalized mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedGraphSet {
    graphs: Vec<SubGraph>,
}

impl NormalizedGraphSet {
    /// Splits normalizer output on the graph delimiter.
    ///
    /// Blocks are trimmed and empty blocks discarded. The order of the output is kept.
    pub fn split(text: &str) -> Self {
        let graphs = text
            .split(GRAPH_DELIMITER)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .map(|block| SubGraph(block.to_owned()))
            .collect();
        Self { graphs }
    }

    /// Sorts the sub-graphs by their text.
    pub fn sort(&mut self) {
        self.graphs.sort();
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubGraph> {
        self.graphs.iter()
    }

    pub fn as_slice(&self) -> &[SubGraph] {
        &self.graphs
    }
}

impl<'a> IntoIterator for &'a NormalizedGraphSet {
    type Item = &'a SubGraph;
    type IntoIter = std::slice::Iter<'a, SubGraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stage 2: rewrites a parsed mapping into sorted sub-graphs with the normalizer engine.
#[derive(Debug, Clone, Copy)]
pub struct MappingNormalizer<'a> {
    config: &'a Configuration,
}

impl<'a> MappingNormalizer<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Normalizes `parsed`. The result is sorted, so its order does not depend on the order in
    /// which the engine emits sub-graphs.
    pub fn normalize(
        &self,
        parsed: &ParsedMapping,
        blank_node_seed: u32,
    ) -> Result<NormalizedGraphSet, NormalizeError> {
        let output = EngineOutput::from(
            self.config
                .engines()
                .normalizer()
                .normalize(parsed.as_str(), blank_node_seed),
        );
        let text = match output {
            EngineOutput::Success(text) => text,
            EngineOutput::ValidationFailure(message) => {
                return Err(NormalizeError::Validation(message))
            }
            EngineOutput::Fatal => return Err(NormalizeError::Absent),
        };

        let mut graphs = NormalizedGraphSet::split(&text);
        graphs.sort();
        debug!(sub_graphs = graphs.len(), "Normalized mapping");
        Ok(graphs)
    }
}
