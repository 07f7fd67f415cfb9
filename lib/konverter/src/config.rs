use konverter_engine::{
    EngineLoadError, MappingNormalizerEngine, MappingParserEngine, NormalizerEngine,
    PlanGeneratorEngine, RelationalAlgebraEngine, TurtleMappingParser,
};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_BASE_URI: &str = "http://example.com/base/";
pub const DEFAULT_OUTPUT_PATH: &str = "./res.nq";
pub const DEFAULT_BLANK_NODE_SEED: u32 = 58932;

/// The options of a compile run.
///
/// Only `base_uri` and `blank_node_seed` influence compilation. The other options are carried
/// along for the plan consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Base IRI for relative IRIs in the mapping document and for the generated RDF terms.
    pub base_uri: String,
    /// Where the plan consumer stores the RDF output.
    pub output_path: PathBuf,
    /// Whether the plan consumer should continue after a failing expression.
    pub continue_on_error: bool,
    /// Whether the plan consumer may evaluate expressions in parallel.
    pub threading_enabled: bool,
    /// Whether the plan consumer should fold constant term maps.
    pub materialize_constants: bool,
    /// Whether the plan consumer should order expressions heuristically.
    pub heuristic_ordering: bool,
    /// The normalizer numbers new blank nodes starting after this value.
    pub blank_node_seed: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_owned(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            continue_on_error: false,
            threading_enabled: true,
            materialize_constants: true,
            heuristic_ordering: true,
            blank_node_seed: DEFAULT_BLANK_NODE_SEED,
        }
    }
}

/// The three engines of a compile run.
pub struct EngineHandles {
    parser: Box<dyn MappingParserEngine>,
    normalizer: Box<dyn NormalizerEngine>,
    generator: Box<dyn PlanGeneratorEngine>,
}

impl EngineHandles {
    /// Wraps the given engines.
    pub fn new(
        parser: impl MappingParserEngine + 'static,
        normalizer: impl NormalizerEngine + 'static,
        generator: impl PlanGeneratorEngine + 'static,
    ) -> Self {
        Self {
            parser: Box::new(parser),
            normalizer: Box::new(normalizer),
            generator: Box::new(generator),
        }
    }

    /// Acquires the built-in engines.
    pub fn native(options: &RunOptions) -> Result<Self, EngineLoadError> {
        Ok(Self::new(
            TurtleMappingParser::new(&options.base_uri)?,
            MappingNormalizerEngine::new(),
            RelationalAlgebraEngine::new(),
        ))
    }

    pub fn parser(&self) -> &dyn MappingParserEngine {
        self.parser.as_ref()
    }

    pub fn normalizer(&self) -> &dyn NormalizerEngine {
        self.normalizer.as_ref()
    }

    pub fn generator(&self) -> &dyn PlanGeneratorEngine {
        self.generator.as_ref()
    }
}

impl fmt::Debug for EngineHandles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandles").finish_non_exhaustive()
    }
}

/// Options and engines of a compile run. Read-only once constructed.
#[derive(Debug)]
pub struct Configuration {
    options: RunOptions,
    engines: EngineHandles,
}

impl Configuration {
    /// Acquires the built-in engines for `options`.
    pub fn new(options: RunOptions) -> Result<Self, EngineLoadError> {
        let engines = EngineHandles::native(&options)?;
        Ok(Self::with_engines(options, engines))
    }

    pub fn with_engines(options: RunOptions, engines: EngineHandles) -> Self {
        Self { options, engines }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn engines(&self) -> &EngineHandles {
        &self.engines
    }
}
