//! The konverter compiler front end.
//!
//! A mapping document passes through three engines: the parser validates it, the normalizer
//! rewrites it into canonical sub-graphs and the plan generator turns every sub-graph into
//! relational-algebra expressions. The [`Pipeline`] sequences the stages, fails fast on the first
//! error and hands the serialized [`PlanText`] to a [`PlanConsumer`].
//!
//! ```
//! use konverter::{Configuration, MappingText, Pipeline, RunOptions};
//!
//! let config = Configuration::new(RunOptions::default())?;
//! let mapping = MappingText::new(
//!     r#"
//!     @prefix rr: <http://www.w3.org/ns/r2rml#> .
//!     @prefix rml: <http://semweb.mmlab.be/ns/rml#> .
//!
//!     <#TriplesMap1> a rr:TriplesMap ;
//!         rml:logicalSource [ rml:source "student.csv" ] ;
//!         rr:subjectMap [ rr:template "http://example.com/{Name}" ] ;
//!         rr:predicateObjectMap [
//!             rr:predicate <http://example.com/name> ;
//!             rr:objectMap [ rml:reference "Name" ]
//!         ] .
//!     "#,
//! );
//! let compilation = Pipeline::new(&config).compile(&mapping)?;
//! assert_eq!(compilation.report.expressions, 1);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod config;
pub mod error;
mod generator;
mod loader;
mod normalizer;
mod pipeline;
mod serializer;

pub use config::{
    Configuration, EngineHandles, RunOptions, DEFAULT_BASE_URI, DEFAULT_BLANK_NODE_SEED,
    DEFAULT_OUTPUT_PATH,
};
pub use error::{CompileError, GenerationError, NormalizeError, ParseError};
pub use generator::{LogicalPlan, PlanGenerator, RelationalAlgebraExpression};
pub use loader::{MappingLoader, MappingText, ParsedMapping};
pub use normalizer::{MappingNormalizer, NormalizedGraphSet, SubGraph};
pub use pipeline::{CompileReport, Compilation, HandoffError, Pipeline, PlanConsumer};
pub use serializer::{PlanSerializer, PlanText};

pub mod engine {
    pub use konverter_engine::*;
}

pub mod model {
    pub use konverter_model::*;
}
