//! OxRDF Utils is a small set of convenience utilities layered on top of
//! [OxRDF](https://crates.io/crates/oxrdf).
//!
//! It does not add any model type of its own: everything here is a thin
//! veneer over [`oxrdf::Graph`] and [`oxrdf::Dataset`] covering the idioms
//! that graph-consuming code keeps re-implementing:
//!
//! * first-value queries narrowed by term kind ([`GraphExt`]),
//! * [RDF collections](https://www.w3.org/TR/rdf11-concepts/#section-list)
//!   encoded from and decoded to Rust sequences ([`GraphExt::insert_list`],
//!   [`ListItems`]),
//! * fluent, nested construction of graphs of typed resources
//!   ([`GraphBuilder`], [`ResourceBuilder`]),
//! * quad pattern matching with positional wildcards ([`QuadPattern`]),
//! * lexical validation of literals against their XML Schema datatypes
//!   ([`is_literal_valid`]),
//! * loading and dumping whole graphs and datasets through
//!   [OxRDF I/O](https://crates.io/crates/oxrdfio) ([`load_graph`],
//!   [`dump_graph`]).
//!
//! Usage example:
//! ```
//! use oxrdf::*;
//! use oxrdfutils::{GraphBuilder, GraphExt};
//!
//! let schema_name = NamedNodeRef::new("http://schema.org/name")?;
//! let ex = NamedNodeRef::new("http://example.com")?;
//!
//! let mut builder = GraphBuilder::new();
//! builder
//!     .resource(ex)
//!     .with_literal(schema_name, "Example")
//!     .with_list(
//!         NamedNodeRef::new("http://example.com/counts")?,
//!         [Literal::from(1), Literal::from(2), Literal::from(3)],
//!     );
//! let graph = builder.finish();
//!
//! assert_eq!(
//!     graph.first_literal(ex, schema_name),
//!     Some(LiteralRef::new_simple_literal("Example"))
//! );
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod builder;
mod graph;
mod io;
mod list;
mod pattern;
mod term;
mod validation;

pub use crate::builder::{GraphBuilder, ResourceBuilder};
pub use crate::graph::{union, with_graph_name, GraphExt};
pub use crate::io::{
    dump_dataset, dump_graph, load_dataset, load_graph, LoaderError, SerializerError,
};
pub use crate::list::ListItems;
pub use crate::pattern::{set_graph_name, QuadPattern};
pub use crate::term::TermExt;
pub use crate::validation::{is_lexical_form_valid, is_literal_valid};
