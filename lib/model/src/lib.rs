//! The data model shared by the konverter engines.
//!
//! Mapping documents travel between the engines as plain text, one
//! `subject|||predicate|||object` statement per line. This crate contains the codec for that
//! format, an order-preserving [`MappingGraph`] with the lookups needed by the rewrite and
//! plan-generation steps, and the vocabularies of R2RML and RML.

mod blank_node;
mod error;
mod graph;
mod template;
mod triple;
pub mod vocab;

pub use blank_node::{is_blank_node_label, is_http_iri, BlankNodeGenerator};
pub use error::TripleLineError;
pub use graph::MappingGraph;
pub use template::{qualify_template, template_references};
pub use triple::{MappingTriple, TERM_SEPARATOR};
