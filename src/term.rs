//! Kind-checked coercions between [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term) unions.
//!
//! [`oxrdf`] models term positions with enums ([`Term`], [`NamedOrBlankNode`](oxrdf::NamedOrBlankNode), …)
//! and pattern matching works everywhere, but the "give me this term as an X or
//! nothing" question comes up in every graph-walking loop. [`TermExt`] packages
//! the three useful answers.

use oxrdf::{LiteralRef, NamedNodeRef, NamedOrBlankNodeRef, Term, TermRef};

/// Fallible coercions from a term to narrower term kinds.
///
/// Implemented for [`TermRef`] and [`&Term`](Term), returning views bound to the
/// term's own lifetime so that the results can outlive the call.
///
/// Usage example:
/// ```
/// use oxrdf::{LiteralRef, NamedNodeRef, Term, TermRef};
/// use oxrdfutils::TermExt;
///
/// let iri = NamedNodeRef::new("http://example.com")?;
/// assert_eq!(TermRef::from(iri).as_named_node(), Some(iri));
/// assert_eq!(TermRef::from(iri).as_literal(), None);
///
/// let term = Term::from(LiteralRef::new_simple_literal("foo"));
/// assert_eq!(
///     term.as_literal(),
///     Some(LiteralRef::new_simple_literal("foo"))
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub trait TermExt<'a> {
    /// This term as a literal, if it is one.
    fn as_literal(self) -> Option<LiteralRef<'a>>;

    /// This term as a resource, i.e. an IRI or a blank node.
    fn as_resource(self) -> Option<NamedOrBlankNodeRef<'a>>;

    /// This term as an IRI, if it is one.
    fn as_named_node(self) -> Option<NamedNodeRef<'a>>;
}

impl<'a> TermExt<'a> for TermRef<'a> {
    #[inline]
    fn as_literal(self) -> Option<LiteralRef<'a>> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    #[inline]
    fn as_resource(self) -> Option<NamedOrBlankNodeRef<'a>> {
        match self {
            Self::NamedNode(node) => Some(node.into()),
            Self::BlankNode(node) => Some(node.into()),
            _ => None,
        }
    }

    #[inline]
    fn as_named_node(self) -> Option<NamedNodeRef<'a>> {
        match self {
            Self::NamedNode(node) => Some(node),
            _ => None,
        }
    }
}

impl<'a> TermExt<'a> for &'a Term {
    #[inline]
    fn as_literal(self) -> Option<LiteralRef<'a>> {
        self.as_ref().as_literal()
    }

    #[inline]
    fn as_resource(self) -> Option<NamedOrBlankNodeRef<'a>> {
        self.as_ref().as_resource()
    }

    #[inline]
    fn as_named_node(self) -> Option<NamedNodeRef<'a>> {
        self.as_ref().as_named_node()
    }
}
