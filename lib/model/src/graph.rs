use crate::error::TripleLineError;
use crate::triple::MappingTriple;

/// An ordered list of [`MappingTriple`]s with the lookups that the engines need.
///
/// Unlike an RDF graph, a mapping graph keeps the order in which statements were added and may
/// contain duplicates. Both matter for the deterministic numbering of generated nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingGraph {
    triples: Vec<MappingTriple>,
}

impl MappingGraph {
    pub fn new(triples: Vec<MappingTriple>) -> Self {
        Self { triples }
    }

    /// Reads a graph from the line format.
    pub fn parse(text: &str) -> Result<Self, TripleLineError> {
        MappingTriple::parse_lines(text).map(Self::new)
    }

    /// Writes the graph in the line format.
    pub fn to_lines(&self) -> String {
        MappingTriple::write_lines(&self.triples)
    }

    pub fn triples(&self) -> &[MappingTriple] {
        &self.triples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingTriple> {
        self.triples.iter()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn push(&mut self, triple: MappingTriple) {
        self.triples.push(triple);
    }

    pub fn extend(&mut self, triples: impl IntoIterator<Item = MappingTriple>) {
        self.triples.extend(triples);
    }

    /// Removes the first occurrence of each of `triples`.
    pub fn remove_each<'a>(&mut self, triples: impl IntoIterator<Item = &'a MappingTriple>) {
        for triple in triples {
            if let Some(position) = self.triples.iter().position(|t| t == triple) {
                self.triples.remove(position);
            }
        }
    }

    /// Objects of the triples matching `subject` and `predicate`; `None` matches anything.
    pub fn objects<'a, 'b>(
        &'a self,
        subject: Option<&'b str>,
        predicate: Option<&'b str>,
    ) -> impl Iterator<Item = &'a str> + 'b
    where
        'a: 'b,
    {
        self.triples
            .iter()
            .filter(move |t| subject.map_or(true, |s| t.subject == s))
            .filter(move |t| predicate.map_or(true, |p| t.predicate == p))
            .map(|t| t.object.as_str())
    }

    /// Objects of `subject` via `predicate`.
    pub fn objects_of<'a, 'b>(
        &'a self,
        subject: &'b str,
        predicate: &'b str,
    ) -> impl Iterator<Item = &'a str> + 'b
    where
        'a: 'b,
    {
        self.objects(Some(subject), Some(predicate))
    }

    /// Returns the object of `subject` via `predicate` if there is exactly one.
    pub fn single_object<'a>(&'a self, subject: &str, predicate: &str) -> Option<&'a str> {
        let mut objects = self.objects_of(subject, predicate);
        let first = objects.next()?;
        objects.next().is_none().then_some(first)
    }

    /// Subjects of the triples with `predicate` and, if given, `object`.
    pub fn subjects<'a, 'b>(
        &'a self,
        predicate: &'b str,
        object: Option<&'b str>,
    ) -> impl Iterator<Item = &'a str> + 'b
    where
        'a: 'b,
    {
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate)
            .filter(move |t| object.map_or(true, |o| t.object == o))
            .map(|t| t.subject.as_str())
    }

    /// Number of triples using `predicate`.
    pub fn count_predicate(&self, predicate: &str) -> usize {
        self.triples
            .iter()
            .filter(|t| t.predicate == predicate)
            .count()
    }
}

impl FromIterator<MappingTriple> for MappingGraph {
    fn from_iter<T: IntoIterator<Item = MappingTriple>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MappingGraph {
    type Item = &'a MappingTriple;
    type IntoIter = std::slice::Iter<'a, MappingTriple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
