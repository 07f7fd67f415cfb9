use crate::error::TripleLineError;
use std::fmt;

/// Separates the three terms of a [`MappingTriple`] line.
pub const TERM_SEPARATOR: &str = "|||";

/// One statement of a mapping document in the line format shared by all engines.
///
/// Terms are plain text: IRIs without angle brackets, literals as their lexical value and blank
/// nodes as [`b<digits>`](crate::is_blank_node_label) labels. A triple is written as
/// `subject|||predicate|||object`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MappingTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl MappingTriple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Parses a single line.
    ///
    /// The line is split at the first two separators, everything after the second one belongs
    /// to the object.
    pub fn parse_line(line: &str) -> Result<Self, TripleLineError> {
        let malformed = || TripleLineError::MissingSeparator {
            line: line.to_owned(),
        };
        let (subject, rest) = line.split_once(TERM_SEPARATOR).ok_or_else(malformed)?;
        let (predicate, object) = rest.split_once(TERM_SEPARATOR).ok_or_else(malformed)?;
        Ok(Self::new(subject, predicate, object))
    }

    /// Parses a whole buffer, skipping empty lines.
    pub fn parse_lines(text: &str) -> Result<Vec<Self>, TripleLineError> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| {
                Self::parse_line(line).map_err(|error| error.at_line(index + 1))
            })
            .collect()
    }

    /// Writes `triples` as newline-terminated lines.
    pub fn write_lines<'a>(triples: impl IntoIterator<Item = &'a MappingTriple>) -> String {
        let mut result = String::new();
        for triple in triples {
            result.push_str(&triple.to_string());
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for MappingTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{TERM_SEPARATOR}{}{TERM_SEPARATOR}{}",
            self.subject, self.predicate, self.object
        )
    }
}
