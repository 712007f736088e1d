//! Fluent construction of graphs of typed resources.
//!
//! [`GraphBuilder`] owns the [`Graph`] being assembled; [`ResourceBuilder`]
//! describes one subject at a time and chains property insertions, borrowing
//! the builder's graph so that nested descriptions all land in the same
//! place.

use crate::graph::GraphExt;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{BlankNode, Graph, Literal, NamedNode, Subject, SubjectRef, Term, TripleRef};

/// Incrementally builds a [`Graph`] resource by resource.
///
/// Usage example:
/// ```
/// use oxrdf::vocab::rdf;
/// use oxrdf::*;
/// use oxrdfutils::{GraphBuilder, GraphExt};
///
/// let schema_person = NamedNodeRef::new("http://schema.org/Person")?;
/// let schema_name = NamedNodeRef::new("http://schema.org/name")?;
/// let schema_knows = NamedNodeRef::new("http://schema.org/knows")?;
/// let alice = NamedNodeRef::new("http://example.com/alice")?;
/// let bob = NamedNodeRef::new("http://example.com/bob")?;
///
/// let mut builder = GraphBuilder::new();
/// builder
///     .resource(alice)
///     .with_type(schema_person)
///     .with_literal(schema_name, "Alice")
///     .with_resource(schema_knows, bob, |bob| {
///         bob.with_type(schema_person)
///             .with_literal(schema_name, "Bob");
///     });
/// let graph = builder.finish();
///
/// assert_eq!(graph.len(), 5);
/// assert!(graph.is_instance_of(bob, schema_person));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts describing the given subject.
    pub fn resource(&mut self, subject: impl Into<Subject>) -> ResourceBuilder<'_> {
        ResourceBuilder {
            graph: &mut self.graph,
            subject: subject.into(),
        }
    }

    /// Starts describing a fresh blank node typed with `class`.
    pub fn instance_of(&mut self, class: impl Into<Term>) -> ResourceBuilder<'_> {
        let class = class.into();
        let subject = BlankNode::default();
        self.graph
            .insert(TripleRef::new(&subject, rdf::TYPE, &class));
        ResourceBuilder {
            graph: &mut self.graph,
            subject: subject.into(),
        }
    }

    /// The graph built so far.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Discards everything built so far.
    pub fn clear(&mut self) {
        self.graph.clear();
    }

    /// Consumes the builder, returning the built graph.
    pub fn finish(self) -> Graph {
        self.graph
    }
}

/// Describes one subject inside a [`GraphBuilder`]'s graph.
///
/// Every method inserts statements about the same subject and returns the
/// builder for chaining. There is no unsupported-value failure mode: the
/// typed entry points ([`with_literal`](Self::with_literal),
/// [`with_property`](Self::with_property)) accept exactly the types that
/// convert into [`Literal`] and [`Term`].
#[derive(Debug)]
pub struct ResourceBuilder<'a> {
    graph: &'a mut Graph,
    subject: Subject,
}

impl ResourceBuilder<'_> {
    /// The subject being described.
    pub fn subject(&self) -> SubjectRef<'_> {
        self.subject.as_ref()
    }

    /// Asserts `predicate` with an arbitrary term value.
    pub fn with_property(
        &mut self,
        predicate: impl Into<NamedNode>,
        value: impl Into<Term>,
    ) -> &mut Self {
        let predicate = predicate.into();
        let value = value.into();
        self.graph
            .insert(TripleRef::new(self.subject.as_ref(), &predicate, &value));
        self
    }

    /// Asserts `predicate` with a literal value.
    ///
    /// [`Literal`]'s `From` conversions carry the XML Schema datatype
    /// tagging: `bool` becomes `xsd:boolean`, the integer types
    /// `xsd:integer`, `f32` `xsd:float`, `f64` `xsd:double`, strings simple
    /// literals, and the [`oxsdatatypes`] value types their respective
    /// datatypes.
    pub fn with_literal(
        &mut self,
        predicate: impl Into<NamedNode>,
        value: impl Into<Literal>,
    ) -> &mut Self {
        self.with_property(predicate, value.into())
    }

    /// Asserts `predicate` with the values encoded as an RDF collection.
    ///
    /// An empty sequence links to `rdf:nil`.
    pub fn with_list<I>(&mut self, predicate: impl Into<NamedNode>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        let head = self.graph.insert_list(values);
        self.with_property(predicate, head)
    }

    /// Asserts `predicate` pointing at `subject` and describes that resource
    /// in a nested builder sharing this graph.
    pub fn with_resource(
        &mut self,
        predicate: impl Into<NamedNode>,
        subject: impl Into<Subject>,
        build: impl FnOnce(&mut ResourceBuilder<'_>),
    ) -> &mut Self {
        let subject = subject.into();
        self.with_property(predicate, subject.clone());
        build(&mut ResourceBuilder {
            graph: &mut *self.graph,
            subject,
        });
        self
    }

    /// Asserts an `rdf:type`.
    pub fn with_type(&mut self, class: impl Into<Term>) -> &mut Self {
        self.with_property(rdf::TYPE, class)
    }

    /// Asserts an `rdfs:label`.
    pub fn with_label(&mut self, value: impl Into<Literal>) -> &mut Self {
        self.with_property(rdfs::LABEL, value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::xsd;
    use oxrdf::{LiteralRef, NamedNodeRef};

    const PERSON: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Person");
    const NAME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/name");
    const AGE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/age");
    const KNOWS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/knows");
    const ALICE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/alice");
    const BOB: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/bob");

    #[test]
    fn property_count_matches_insertions() {
        let mut builder = GraphBuilder::new();
        builder
            .resource(ALICE)
            .with_type(PERSON)
            .with_literal(NAME, "Alice")
            .with_literal(AGE, 30)
            .with_property(KNOWS, BOB);
        let graph = builder.finish();
        assert_eq!(graph.len(), 4);
        assert!(graph.contains(TripleRef::new(ALICE, AGE, &Literal::from(30))));
    }

    #[test]
    fn typed_literals_carry_their_datatype() {
        let mut builder = GraphBuilder::new();
        builder
            .resource(ALICE)
            .with_literal(AGE, 30_i64)
            .with_literal(NAME, true);
        let graph = builder.finish();
        let age = graph
            .object_for_subject_predicate(ALICE, AGE)
            .unwrap()
            .to_string();
        assert!(age.ends_with("integer>"), "{age}");
        assert!(graph.contains(TripleRef::new(
            ALICE,
            NAME,
            LiteralRef::new_typed_literal("true", xsd::BOOLEAN)
        )));
    }

    #[test]
    fn duplicate_values_are_set_semantics() {
        let mut builder = GraphBuilder::new();
        builder
            .resource(ALICE)
            .with_literal(NAME, "Alice")
            .with_literal(NAME, "Alice");
        assert_eq!(builder.graph().len(), 1);
    }

    #[test]
    fn instance_of_types_a_fresh_blank_node() {
        let mut builder = GraphBuilder::new();
        let subject = builder
            .instance_of(PERSON)
            .with_literal(NAME, "Alice")
            .subject()
            .into_owned();
        let graph = builder.finish();
        assert_eq!(graph.len(), 2);
        assert!(matches!(subject, Subject::BlankNode(_)));
        assert!(graph.contains(TripleRef::new(&subject, rdf::TYPE, PERSON)));
    }

    #[test]
    fn nested_resources_share_the_graph() {
        let mut builder = GraphBuilder::new();
        builder.resource(ALICE).with_resource(KNOWS, BOB, |bob| {
            bob.with_literal(NAME, "Bob");
        });
        let graph = builder.finish();
        assert_eq!(graph.len(), 2);
        assert!(graph.contains(TripleRef::new(ALICE, KNOWS, BOB)));
        assert!(graph.contains(TripleRef::new(
            BOB,
            NAME,
            LiteralRef::new_simple_literal("Bob")
        )));
    }

    #[test]
    fn list_property_links_the_head() {
        let mut builder = GraphBuilder::new();
        builder
            .resource(ALICE)
            .with_list(KNOWS, [BOB])
            .with_list(NAME, Vec::<Term>::new());
        let graph = builder.finish();
        // link + first + rest, plus the empty list linking to rdf:nil
        assert_eq!(graph.len(), 4);
        assert!(graph.contains(TripleRef::new(ALICE, NAME, rdf::NIL)));
    }

    #[test]
    fn clear_resets_the_builder() {
        let mut builder = GraphBuilder::new();
        builder.resource(ALICE).with_label("Alice");
        builder.clear();
        assert!(builder.graph().is_empty());
    }
}
