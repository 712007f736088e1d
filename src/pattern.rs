//! Positional [statement](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple)
//! pattern matching, with optional scoping to a set of named graphs.

use oxrdf::{
    Dataset, GraphName, GraphNameRef, NamedNode, Quad, QuadRef, Subject, Term, TripleRef,
};

/// A quad pattern: a subject, predicate, object and allowed-context set, each
/// position optional and matching anything when left unset.
///
/// The context set follows the conventions of quad stores: no
/// [`with_graph_name`](Self::with_graph_name) call means "any graph", and
/// [`GraphName::DefaultGraph`] names the default graph explicitly.
///
/// Usage example:
/// ```
/// use oxrdf::*;
/// use oxrdfutils::QuadPattern;
///
/// let ex = NamedNodeRef::new("http://example.com")?;
/// let quad = QuadRef::new(ex, ex, ex, GraphNameRef::DefaultGraph);
///
/// assert!(QuadPattern::new().matches(quad));
/// assert!(QuadPattern::new().with_subject(ex).matches(quad));
/// assert!(!QuadPattern::new()
///     .with_object(LiteralRef::new_simple_literal("foo"))
///     .matches(quad));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuadPattern {
    subject: Option<Subject>,
    predicate: Option<NamedNode>,
    object: Option<Term>,
    graph_names: Vec<GraphName>,
}

impl QuadPattern {
    /// A pattern matching every quad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the subject position to be equal to `subject`.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<Subject>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Requires the predicate position to be equal to `predicate`.
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl Into<NamedNode>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    /// Requires the object position to be equal to `object`.
    #[must_use]
    pub fn with_object(mut self, object: impl Into<Term>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Adds `graph_name` to the set of allowed contexts.
    ///
    /// May be called several times; a quad matches if its context is any of
    /// the allowed ones.
    #[must_use]
    pub fn with_graph_name(mut self, graph_name: impl Into<GraphName>) -> Self {
        self.graph_names.push(graph_name.into());
        self
    }

    /// Checks if the given quad matches this pattern.
    pub fn matches<'a>(&self, quad: impl Into<QuadRef<'a>>) -> bool {
        let quad = quad.into();
        self.subject.as_ref().map_or(true, |s| s.as_ref() == quad.subject)
            && self
                .predicate
                .as_ref()
                .map_or(true, |p| p.as_ref() == quad.predicate)
            && self.object.as_ref().map_or(true, |o| o.as_ref() == quad.object)
            && (self.graph_names.is_empty()
                || self
                    .graph_names
                    .iter()
                    .any(|g| g.as_ref() == quad.graph_name))
    }

    /// Checks if the given triple, read as belonging to the default graph,
    /// matches this pattern.
    pub fn matches_triple<'a>(&self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.matches(triple.into().in_graph(GraphNameRef::DefaultGraph))
    }

    /// The quads of `dataset` matching this pattern.
    pub fn filter<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = QuadRef<'a>> + 'a {
        dataset.iter().filter(move |quad| self.matches(*quad))
    }
}

/// Returns the given quad with its context replaced by `graph_name`.
///
/// Quads already in that graph are returned unchanged (apart from the
/// owning copy).
pub fn set_graph_name(quad: QuadRef<'_>, graph_name: impl Into<GraphName>) -> Quad {
    let mut quad = quad.into_owned();
    quad.graph_name = graph_name.into();
    quad
}
