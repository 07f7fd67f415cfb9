/// Prefix that marks an engine result as a validation failure.
pub const ERROR_PREFIX: &str = "Error:";

/// Separates the sub-graphs emitted by a [`NormalizerEngine`](crate::NormalizerEngine).
pub const GRAPH_DELIMITER: &str = "====";

/// The typed form of a raw engine result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineOutput {
    /// The engine produced a regular result.
    Success(String),
    /// The engine rejected its input. The message is kept verbatim, including the prefix.
    ValidationFailure(String),
    /// The engine produced no result at all.
    Fatal,
}

impl EngineOutput {
    /// Builds the failure text for `message` in the raw contract.
    pub fn failure_text(message: impl std::fmt::Display) -> String {
        format!("{ERROR_PREFIX} {message}")
    }
}

impl From<Option<String>> for EngineOutput {
    fn from(raw: Option<String>) -> Self {
        match raw {
            None => Self::Fatal,
            Some(text) if text.starts_with(ERROR_PREFIX) => Self::ValidationFailure(text),
            Some(text) => Self::Success(text),
        }
    }
}
