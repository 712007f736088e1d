//! Single-statement queries and whole-graph conversions over [`oxrdf::Graph`].
//!
//! Everything here is a thin layer over the pattern-matching accessors that
//! [`Graph`] already provides; the helpers only add the "first matching value
//! of the right kind" and RDF-list conveniences that call sites otherwise
//! re-implement by hand.

use crate::list::ListItems;
use crate::term::TermExt;
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{
    BlankNode, Dataset, Graph, GraphNameRef, LiteralRef, NamedNodeRef, NamedOrBlankNode,
    NamedOrBlankNodeRef, SubjectRef, Term, TermRef, TripleRef,
};
use oxsdatatypes::Boolean;

/// Convenience queries and conversions for [`Graph`].
///
/// The "first object" itself is already covered by
/// [`Graph::object_for_subject_predicate`]; the methods here narrow it by
/// term kind, look types up, and encode/decode
/// [RDF collections](https://www.w3.org/TR/rdf11-concepts/#section-list).
///
/// Usage example:
/// ```
/// use oxrdf::vocab::rdf;
/// use oxrdf::*;
/// use oxrdfutils::GraphExt;
///
/// let mut graph = Graph::new();
/// let ex = NamedNodeRef::new("http://example.com")?;
/// let name = NamedNodeRef::new("http://schema.org/name")?;
/// graph.insert(TripleRef::new(ex, name, LiteralRef::new_simple_literal("Example")));
/// graph.insert(TripleRef::new(ex, rdf::TYPE, NamedNodeRef::new("http://schema.org/Thing")?));
///
/// assert_eq!(
///     graph.first_literal(ex, name),
///     Some(LiteralRef::new_simple_literal("Example"))
/// );
/// assert!(graph.is_instance_of(ex, NamedNodeRef::new("http://schema.org/Thing")?));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub trait GraphExt {
    /// The first object of the given subject and predicate that is a literal.
    fn first_literal<'a, 'b>(
        &'a self,
        subject: impl Into<SubjectRef<'b>>,
        predicate: impl Into<NamedNodeRef<'b>>,
    ) -> Option<LiteralRef<'a>>;

    /// The first object of the given subject and predicate that is a
    /// resource, i.e. an IRI or a blank node.
    fn first_resource<'a, 'b>(
        &'a self,
        subject: impl Into<SubjectRef<'b>>,
        predicate: impl Into<NamedNodeRef<'b>>,
    ) -> Option<NamedOrBlankNodeRef<'a>>;

    /// The first literal object of the given subject and predicate, read as a
    /// boolean.
    ///
    /// A literal typed `xsd:boolean` is parsed following the XML Schema
    /// lexical rules (`true`, `false`, `1` and `0`). Any other literal is
    /// accepted only if its lexical form is `true` or `false`, ASCII
    /// case-insensitively. Everything else is `None`, never an error.
    fn first_boolean<'b>(
        &self,
        subject: impl Into<SubjectRef<'b>>,
        predicate: impl Into<NamedNodeRef<'b>>,
    ) -> Option<bool>;

    /// All `rdf:type` objects of the given subject that are resources.
    fn types<'a, 'b>(&'a self, subject: impl Into<SubjectRef<'b>>) -> Vec<NamedOrBlankNodeRef<'a>>;

    /// Checks if the graph contains the `rdf:type` assertion linking
    /// `subject` to `class`.
    fn is_instance_of<'a>(
        &self,
        subject: impl Into<SubjectRef<'a>>,
        class: impl Into<TermRef<'a>>,
    ) -> bool;

    /// Checks if the given node is the head of an
    /// [RDF collection](https://www.w3.org/TR/rdf11-concepts/#section-list):
    /// either `rdf:nil` or a node carrying an `rdf:first` value.
    fn is_list<'a>(&self, node: impl Into<SubjectRef<'a>>) -> bool;

    /// The values of the RDF collection starting at `head`, in order.
    ///
    /// See [`ListItems`] for how malformed and cyclic chains are handled.
    fn list_items<'a, 'b>(&'a self, head: impl Into<SubjectRef<'b>>) -> ListItems<'a>;

    /// Encodes `values` as an RDF collection of fresh blank nodes inside this
    /// graph and returns the head of the chain.
    ///
    /// An empty sequence inserts nothing and returns `rdf:nil`, so that
    /// decoding the returned head always yields the encoded sequence:
    /// ```
    /// use oxrdf::{Graph, Literal, Term};
    /// use oxrdfutils::GraphExt;
    ///
    /// let mut graph = Graph::new();
    /// let head = graph.insert_list([Literal::from(1), Literal::from(2)]);
    /// assert_eq!(graph.len(), 4);
    /// assert_eq!(
    ///     graph.list_items(&head).map(|t| t.into_owned()).collect::<Vec<_>>(),
    ///     [Term::from(Literal::from(1)), Term::from(Literal::from(2))]
    /// );
    /// ```
    fn insert_list<I>(&mut self, values: I) -> NamedOrBlankNode
    where
        I: IntoIterator,
        I::Item: Into<Term>;
}

impl GraphExt for Graph {
    fn first_literal<'a, 'b>(
        &'a self,
        subject: impl Into<SubjectRef<'b>>,
        predicate: impl Into<NamedNodeRef<'b>>,
    ) -> Option<LiteralRef<'a>> {
        self.objects_for_subject_predicate(subject, predicate)
            .find_map(TermExt::as_literal)
    }

    fn first_resource<'a, 'b>(
        &'a self,
        subject: impl Into<SubjectRef<'b>>,
        predicate: impl Into<NamedNodeRef<'b>>,
    ) -> Option<NamedOrBlankNodeRef<'a>> {
        self.objects_for_subject_predicate(subject, predicate)
            .find_map(TermExt::as_resource)
    }

    fn first_boolean<'b>(
        &self,
        subject: impl Into<SubjectRef<'b>>,
        predicate: impl Into<NamedNodeRef<'b>>,
    ) -> Option<bool> {
        let literal = self.first_literal(subject, predicate)?;
        if literal.datatype() == xsd::BOOLEAN {
            literal.value().parse::<Boolean>().ok().map(bool::from)
        } else if literal.value().eq_ignore_ascii_case("true") {
            Some(true)
        } else if literal.value().eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn types<'a, 'b>(&'a self, subject: impl Into<SubjectRef<'b>>) -> Vec<NamedOrBlankNodeRef<'a>> {
        self.objects_for_subject_predicate(subject, rdf::TYPE)
            .filter_map(TermExt::as_resource)
            .collect()
    }

    fn is_instance_of<'a>(
        &self,
        subject: impl Into<SubjectRef<'a>>,
        class: impl Into<TermRef<'a>>,
    ) -> bool {
        self.contains(TripleRef::new(subject, rdf::TYPE, class))
    }

    fn is_list<'a>(&self, node: impl Into<SubjectRef<'a>>) -> bool {
        let node = node.into();
        node == SubjectRef::from(rdf::NIL)
            || self
                .objects_for_subject_predicate(node, rdf::FIRST)
                .next()
                .is_some()
    }

    fn list_items<'a, 'b>(&'a self, head: impl Into<SubjectRef<'b>>) -> ListItems<'a> {
        ListItems::new(self, head.into().into_owned())
    }

    fn insert_list<I>(&mut self, values: I) -> NamedOrBlankNode
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return rdf::NIL.into_owned().into();
        };
        let head = BlankNode::default();
        let mut node = head.clone();
        let mut value = first.into();
        loop {
            self.insert(TripleRef::new(&node, rdf::FIRST, &value));
            if let Some(next) = values.next() {
                let rest = BlankNode::default();
                self.insert(TripleRef::new(&node, rdf::REST, &rest));
                node = rest;
                value = next.into();
            } else {
                self.insert(TripleRef::new(&node, rdf::REST, rdf::NIL));
                return head.into();
            }
        }
    }
}

/// The set union of the given graphs, as a new graph.
///
/// Set semantics deduplicate statements asserted by several inputs.
///
/// Usage example:
/// ```
/// use oxrdf::*;
/// use oxrdfutils::union;
///
/// let ex1 = NamedNodeRef::new("http://example.com/1")?;
/// let ex2 = NamedNodeRef::new("http://example.com/2")?;
/// let mut graph1 = Graph::new();
/// graph1.insert(TripleRef::new(ex1, ex1, ex1));
/// let mut graph2 = Graph::new();
/// graph2.insert(TripleRef::new(ex2, ex2, ex2));
/// graph2.insert(TripleRef::new(ex1, ex1, ex1));
///
/// assert_eq!(union([&graph1, &graph2]).len(), 2);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn union<'a>(graphs: impl IntoIterator<Item = &'a Graph>) -> Graph {
    let mut result = Graph::new();
    for graph in graphs {
        for triple in graph.iter() {
            result.insert(triple);
        }
    }
    result
}

/// Copies all triples of a graph into the given named graph of a new dataset.
pub fn with_graph_name<'a>(graph: &Graph, graph_name: impl Into<GraphNameRef<'a>>) -> Dataset {
    let graph_name = graph_name.into();
    let mut dataset = Dataset::new();
    for triple in graph.iter() {
        dataset.insert(triple.in_graph(graph_name));
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Literal, NamedNode};

    fn ex(name: &str) -> NamedNode {
        NamedNode::new(format!("http://example.com/{name}")).unwrap()
    }

    #[test]
    fn first_literal_skips_resources() {
        let mut graph = Graph::new();
        let (s, p) = (ex("s"), ex("p"));
        graph.insert(TripleRef::new(&s, &p, &ex("o")));
        graph.insert(TripleRef::new(&s, &p, &Literal::from("value")));
        assert_eq!(
            graph.first_literal(&s, &p),
            Some(LiteralRef::new_simple_literal("value"))
        );
        assert_eq!(graph.first_literal(&s, &ex("q")), None);
    }

    #[test]
    fn first_resource_skips_literals() {
        let mut graph = Graph::new();
        let (s, p, o) = (ex("s"), ex("p"), ex("o"));
        graph.insert(TripleRef::new(&s, &p, &Literal::from("value")));
        graph.insert(TripleRef::new(&s, &p, &o));
        assert_eq!(
            graph.first_resource(&s, &p),
            Some(NamedOrBlankNodeRef::from(&o))
        );
    }

    #[test]
    fn first_boolean_lexical_rules() {
        let mut graph = Graph::new();
        let s = ex("s");
        let cases = [
            (ex("typed"), Literal::from(true), Some(true)),
            (ex("one"), Literal::new_typed_literal("1", xsd::BOOLEAN), Some(true)),
            (ex("zero"), Literal::new_typed_literal("0", xsd::BOOLEAN), Some(false)),
            (ex("plain"), Literal::from("TRUE"), Some(true)),
            (ex("negated"), Literal::from("False"), Some(false)),
            (ex("junk"), Literal::from("yes"), None),
            (ex("bad"), Literal::new_typed_literal("yes", xsd::BOOLEAN), None),
        ];
        for (p, o, expected) in &cases {
            graph.insert(TripleRef::new(&s, p, o));
            assert_eq!(graph.first_boolean(&s, p), *expected, "{p}");
        }
    }

    #[test]
    fn types_and_is_instance_of() {
        let mut graph = Graph::new();
        let (s, t1, t2) = (ex("s"), ex("T1"), ex("T2"));
        graph.insert(TripleRef::new(&s, rdf::TYPE, &t1));
        graph.insert(TripleRef::new(&s, rdf::TYPE, &t2));
        let mut types: Vec<_> = graph.types(&s).iter().map(ToString::to_string).collect();
        types.sort();
        assert_eq!(types, [t1.to_string(), t2.to_string()]);
        assert!(graph.is_instance_of(&s, &t1));
        assert!(!graph.is_instance_of(&s, &ex("T3")));
    }

    #[test]
    fn list_detection() {
        let mut graph = Graph::new();
        let head = graph.insert_list([ex("a"), ex("b")]);
        assert!(graph.is_list(&head));
        assert!(graph.is_list(rdf::NIL));
        assert!(!graph.is_list(&ex("a")));
    }

    #[test]
    fn union_deduplicates() {
        let mut graph1 = Graph::new();
        graph1.insert(TripleRef::new(&ex("s"), &ex("p"), &ex("o")));
        let mut graph2 = Graph::new();
        graph2.insert(TripleRef::new(&ex("s"), &ex("p"), &ex("o")));
        graph2.insert(TripleRef::new(&ex("s"), &ex("p"), &ex("o2")));
        let merged = union([&graph1, &graph2]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn with_graph_name_scopes_all_triples() {
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(&ex("s"), &ex("p"), &ex("o")));
        let name = ex("g");
        let dataset = with_graph_name(&graph, &name);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.graph(&name).len(), 1);
    }
}
