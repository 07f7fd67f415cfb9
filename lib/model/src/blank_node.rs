/// Returns whether `term` is a blank node label (`b` followed by decimal digits).
pub fn is_blank_node_label(term: &str) -> bool {
    term.strip_prefix('b')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Returns whether `term` is an `http://` or `https://` IRI.
pub fn is_http_iri(term: &str) -> bool {
    term.starts_with("http://") || term.starts_with("https://")
}

/// Hands out fresh blank node labels.
///
/// The generator is seeded so that repeated runs over the same input assign the same labels.
/// The first label is `b<seed + 1>`.
#[derive(Debug, Clone)]
pub struct BlankNodeGenerator {
    counter: u64,
}

impl BlankNodeGenerator {
    pub fn new(seed: u64) -> Self {
        Self { counter: seed }
    }

    pub fn next_label(&mut self) -> String {
        self.counter += 1;
        format!("b{}", self.counter)
    }

    /// The value of the last label that was handed out (or the seed).
    pub fn counter(&self) -> u64 {
        self.counter
    }
}
