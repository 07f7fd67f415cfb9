/// An error raised while reading the `subject|||predicate|||object` line format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripleLineError {
    /// The line does not contain the two term separators.
    #[error("expected 'subject|||predicate|||object', found '{line}'")]
    MissingSeparator { line: String },
    /// Wraps another error with the (1-based) line it occurred on.
    #[error("line {line}: {error}")]
    AtLine {
        line: usize,
        #[source]
        error: Box<TripleLineError>,
    },
}

impl TripleLineError {
    /// Attaches the line number to this error.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            error: Box::new(self),
        }
    }
}
