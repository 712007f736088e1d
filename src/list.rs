//! Decoding of [RDF collections](https://www.w3.org/TR/rdf11-concepts/#section-list)
//! into Rust sequences.
//!
//! An RDF list is a chain of nodes, each carrying its head value as
//! `rdf:first` and the remainder of the list as `rdf:rest`, terminated by the
//! `rdf:nil` sentinel. The encoder lives in
//! [`GraphExt::insert_list`](crate::GraphExt::insert_list); this module
//! provides the decoding iterator.

use crate::term::TermExt;
use oxrdf::vocab::rdf;
use oxrdf::{Graph, Subject, TermRef};

/// Iterator over the values of an RDF list, returned by
/// [`GraphExt::list_items`](crate::GraphExt::list_items).
///
/// The walk is lenient, matching how lists found in the wild tend to be
/// shaped rather than how the specification says they should be:
///
/// * it stops at `rdf:nil`, and also when a node has no `rdf:rest` at all;
/// * a node with an `rdf:rest` but no `rdf:first` contributes no value and
///   the walk continues behind it;
/// * an `rdf:rest` that is a literal ends the walk after the current value;
/// * if a node has several `rdf:first` or `rdf:rest` values, an arbitrary one
///   is followed.
///
/// Cyclic chains terminate instead of looping: each well-formed list node
/// owns a distinct `rdf:rest` triple, so a walk visiting more nodes than the
/// graph has triples must have revisited one.
pub struct ListItems<'a> {
    graph: &'a Graph,
    current: Option<Subject>,
    remaining_nodes: usize,
}

impl<'a> ListItems<'a> {
    pub(crate) fn new(graph: &'a Graph, head: Subject) -> Self {
        Self {
            graph,
            current: Some(head),
            remaining_nodes: graph.len() + 1,
        }
    }
}

impl<'a> Iterator for ListItems<'a> {
    type Item = TermRef<'a>;

    fn next(&mut self) -> Option<TermRef<'a>> {
        loop {
            let node = self.current.take()?;
            if let Subject::NamedNode(node) = &node {
                if node.as_ref() == rdf::NIL {
                    return None;
                }
            }
            self.remaining_nodes = self.remaining_nodes.checked_sub(1)?;
            let first = self.graph.object_for_subject_predicate(&node, rdf::FIRST);
            self.current = self
                .graph
                .object_for_subject_predicate(&node, rdf::REST)
                .and_then(TermExt::as_resource)
                .map(|rest| rest.into_owned().into());
            if let Some(first) = first {
                return Some(first);
            }
            // value-less node: keep following the chain
        }
    }
}
