use crate::config::{Configuration, RunOptions};
use crate::error::CompileError;
use crate::generator::PlanGenerator;
use crate::loader::{MappingLoader, MappingText};
use crate::normalizer::MappingNormalizer;
use crate::serializer::{PlanSerializer, PlanText};
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The error a [`PlanConsumer`] may fail with.
pub type HandoffError = Box<dyn Error + Send + Sync>;

/// Receives the plan of a successful compile run.
pub trait PlanConsumer {
    fn consume(&mut self, plan: &PlanText, options: &RunOptions) -> Result<(), HandoffError>;
}

impl<F> PlanConsumer for F
where
    F: FnMut(&PlanText, &RunOptions) -> Result<(), HandoffError>,
{
    fn consume(&mut self, plan: &PlanText, options: &RunOptions) -> Result<(), HandoffError> {
        self(plan, options)
    }
}

/// Statistics of a compile run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileReport {
    /// Number of sub-graphs produced by the normalizer.
    pub sub_graphs: usize,
    /// Number of expressions in the plan.
    pub expressions: usize,
    /// Wall-clock time from loading to serialization.
    pub elapsed: Duration,
}

/// The result of [`Pipeline::compile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compilation {
    pub plan: PlanText,
    pub report: CompileReport,
}

/// Runs the stages in order: load, normalize, generate, serialize.
///
/// Every stage completes before the next one starts and the first failure ends the run.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    config: &'a Configuration,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Compiles `mapping` into plan text.
    pub fn compile(&self, mapping: &MappingText) -> Result<Compilation, CompileError> {
        let start = Instant::now();

        debug!("Loading mapping document");
        let parsed = MappingLoader::new(self.config).load(mapping)?;

        debug!("Normalizing mapping");
        let graphs = MappingNormalizer::new(self.config)
            .normalize(&parsed, self.config.options().blank_node_seed)?;

        debug!(sub_graphs = graphs.len(), "Generating logical plan");
        let plan = PlanGenerator::new(self.config).generate(&graphs)?;

        let text = PlanSerializer::serialize(&plan);
        let elapsed = start.elapsed();
        info!("Frontend took: {elapsed:?}");

        Ok(Compilation {
            plan: text,
            report: CompileReport {
                sub_graphs: graphs.len(),
                expressions: plan.len(),
                elapsed,
            },
        })
    }

    /// Compiles `mapping` and hands the plan to `consumer`.
    ///
    /// The consumer is only called if compilation succeeded.
    pub fn run(
        &self,
        mapping: &MappingText,
        consumer: &mut impl PlanConsumer,
    ) -> Result<CompileReport, CompileError> {
        let Compilation { plan, report } = self.compile(mapping)?;
        consumer
            .consume(&plan, self.config.options())
            .map_err(CompileError::Handoff)?;
        Ok(report)
    }
}
