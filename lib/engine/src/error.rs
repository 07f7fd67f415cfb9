use oxiri::IriParseError;

/// An error raised while acquiring an engine.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EngineLoadError {
    /// The base IRI handed to the parser engine is invalid.
    #[error("Invalid base IRI '{iri}'")]
    InvalidBaseIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
}
