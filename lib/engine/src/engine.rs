/// Stage 1 engine: validates a mapping document and turns it into triple lines.
///
/// The result follows the raw text contract: `None` signals an unrecoverable failure and a text
/// starting with [`ERROR_PREFIX`](crate::ERROR_PREFIX) a validation failure. Callers translate
/// the result with [`EngineOutput::from`](crate::EngineOutput) right away.
pub trait MappingParserEngine {
    /// Parses the text of a mapping document.
    fn parse(&self, mapping: &str) -> Option<String>;
}

/// Stage 2 engine: rewrites a parsed mapping into canonical sub-graphs.
///
/// The sub-graphs are separated by [`GRAPH_DELIMITER`](crate::GRAPH_DELIMITER). Blank nodes
/// introduced by the rewrite are numbered starting after `blank_node_seed`.
pub trait NormalizerEngine {
    fn normalize(&self, parsed_mapping: &str, blank_node_seed: u32) -> Option<String>;
}

/// Stage 3 engine: turns one normalized sub-graph into relational-algebra expressions, one per
/// line.
pub trait PlanGeneratorEngine {
    fn generate(&self, sub_graph: &str) -> Option<String>;
}

impl<F> MappingParserEngine for F
where
    F: Fn(&str) -> Option<String>,
{
    fn parse(&self, mapping: &str) -> Option<String> {
        self(mapping)
    }
}

impl<F> NormalizerEngine for F
where
    F: Fn(&str, u32) -> Option<String>,
{
    fn normalize(&self, parsed_mapping: &str, blank_node_seed: u32) -> Option<String> {
        self(parsed_mapping, blank_node_seed)
    }
}

impl<F> PlanGeneratorEngine for F
where
    F: Fn(&str) -> Option<String>,
{
    fn generate(&self, sub_graph: &str) -> Option<String> {
        self(sub_graph)
    }
}
