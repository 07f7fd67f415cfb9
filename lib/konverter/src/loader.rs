use crate::config::Configuration;
use crate::error::{CompileError, ParseError};
use konverter_engine::EngineOutput;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The raw text of a mapping document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingText(String);

impl MappingText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Reads a mapping document from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CompileError> {
        let path = path.as_ref();
        fs::read_to_string(path)
            .map(Self)
            .map_err(|source| CompileError::ReadMapping {
                path: path.to_owned(),
                source,
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The parser engine's representation of a mapping document.
///
/// The pipeline does not look into it; it is handed to the normalizer as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedMapping(String);

impl ParsedMapping {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stage 1: validates a mapping document with the parser engine.
#[derive(Debug, Clone, Copy)]
pub struct MappingLoader<'a> {
    config: &'a Configuration,
}

impl<'a> MappingLoader<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn load(&self, mapping: &MappingText) -> Result<ParsedMapping, ParseError> {
        let output = EngineOutput::from(self.config.engines().parser().parse(mapping.as_str()));
        match output {
            EngineOutput::Success(text) => {
                debug!(bytes = text.len(), "Parsed mapping document");
                Ok(ParsedMapping(text))
            }
            EngineOutput::ValidationFailure(message) => Err(ParseError::Validation(message)),
            EngineOutput::Fatal => Err(ParseError::Absent),
        }
    }
}
