use konverter_engine::EngineLoadError;
use std::error::Error;
use std::io;
use std::path::PathBuf;

/// An error raised by the parser engine (stage 1).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The parser rejected the mapping document. The message is the engine's, verbatim.
    #[error("{0}")]
    Validation(String),
    /// The parser returned no result.
    #[error("RDF parser function returned NULL or encountered an error")]
    Absent,
}

/// An error raised by the normalizer engine (stage 2).
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The normalizer rejected the parsed mapping. The message is the engine's, verbatim.
    #[error("{0}")]
    Validation(String),
    /// The normalizer returned no result.
    #[error("Error: Function returned NULL")]
    Absent,
}

/// An error raised by the plan generation engine (stage 3).
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The generator rejected a sub-graph. Prints the engine's message verbatim.
    #[error("{message}")]
    Validation {
        /// Position of the sub-graph in sorted order.
        graph_index: usize,
        /// The engine's message, verbatim.
        message: String,
    },
    /// The generator returned no result for a sub-graph.
    #[error("Plan generator returned no result for sub-graph {graph_index}")]
    Absent {
        /// Position of the sub-graph in sorted order.
        graph_index: usize,
    },
}

impl GenerationError {
    /// Position of the failing sub-graph in sorted order.
    pub fn graph_index(&self) -> usize {
        match self {
            Self::Validation { graph_index, .. } | Self::Absent { graph_index } => *graph_index,
        }
    }
}

/// The error type for [`Pipeline`](crate::Pipeline) runs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CompileError {
    #[error(transparent)]
    EngineLoad(#[from] EngineLoadError),
    #[error("Failed to read mapping document '{}'", path.display())]
    ReadMapping {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// The plan consumer failed.
    #[error("Failed to hand off the logical plan")]
    Handoff(#[source] Box<dyn Error + Send + Sync>),
}

impl From<CompileError> for io::Error {
    #[inline]
    fn from(error: CompileError) -> Self {
        match error {
            CompileError::ReadMapping { source, .. } => source,
            CompileError::EngineLoad(_) => Self::new(io::ErrorKind::InvalidInput, error),
            _ => Self::new(io::ErrorKind::InvalidData, error),
        }
    }
}
