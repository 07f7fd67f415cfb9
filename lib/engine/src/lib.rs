//! The engines behind the konverter pipeline.
//!
//! Each stage of the pipeline talks to its engine through a narrow text contract: the engine
//! receives text and returns text, an [`ERROR_PREFIX`]ed message, or nothing at all. The traits
//! in this crate describe that contract and [`EngineOutput`] is its typed form.
//!
//! The crate also ships native engines:
//! - [`TurtleMappingParser`] reads Turtle mapping documents.
//! - [`MappingNormalizerEngine`] rewrites a parsed mapping into canonical sub-graphs.
//! - [`RelationalAlgebraEngine`] plans a single sub-graph.

mod engine;
pub mod error;
mod generator;
mod normalizer;
mod output;
mod parser;

pub use engine::{MappingParserEngine, NormalizerEngine, PlanGeneratorEngine};
pub use error::EngineLoadError;
pub use generator::{PlanGenerationError, RelationalAlgebraEngine};
pub use normalizer::{MappingNormalizerEngine, NormalizationError};
pub use output::{EngineOutput, ERROR_PREFIX, GRAPH_DELIMITER};
pub use parser::{MappingSyntaxError, TurtleMappingParser};
