use clap::{Parser, ValueHint};
use konverter::{RunOptions, DEFAULT_BASE_URI, DEFAULT_BLANK_NODE_SEED, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "konverter")]
/// Konverter compiles RML mapping documents into relational-algebra plans
pub struct Args {
    /// The RML mapping document to compile
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub mapping: PathBuf,
    /// Where the RDF output of the plan should be written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,
    /// Base IRI of the mapping document and of the generated terms
    #[arg(short, long, default_value = DEFAULT_BASE_URI, value_hint = ValueHint::Url)]
    pub base: String,
    /// Keep evaluating the plan after a failing expression
    #[arg(long)]
    pub continue_on_error: bool,
    /// Evaluate the plan on a single thread
    #[arg(long)]
    pub no_threading: bool,
    /// Do not fold constant term maps
    #[arg(long)]
    pub no_const_folding: bool,
    /// Evaluate the expressions in plan order
    #[arg(long)]
    pub no_ordering: bool,
    /// Blank nodes created during normalization are numbered after this value
    #[arg(long, default_value_t = DEFAULT_BLANK_NODE_SEED)]
    pub blank_node_seed: u32,
    /// File to write the serialized plan to
    ///
    /// If no file is given, the plan is written to stdout.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub emit_plan: Option<PathBuf>,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            base_uri: self.base.clone(),
            output_path: self.output.clone(),
            continue_on_error: self.continue_on_error,
            threading_enabled: !self.no_threading,
            materialize_constants: !self.no_const_folding,
            heuristic_ordering: !self.no_ordering,
            blank_node_seed: self.blank_node_seed,
        }
    }
}
