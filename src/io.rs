//! Whole-graph and whole-dataset file I/O.
//!
//! Everything format-related is delegated to [`oxrdfio`]: the serialization
//! format is detected from the file extension, and the parsers and
//! serializers are the streaming ones used across the Oxigraph stack. This
//! module only adds the "one file in, one [`Graph`]/[`Dataset`] out"
//! plumbing.

use oxrdf::{Dataset, Graph, Triple};
use oxrdfio::{RdfFormat, RdfParseError, RdfParser, RdfSerializer};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// An error raised while loading a graph or dataset from a file.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// An error raised while reading the file.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// An error raised while parsing the file content.
    #[error(transparent)]
    Parse(#[from] RdfParseError),
    /// The serialization format could not be detected from the file name.
    #[error("could not detect the RDF format of {0}")]
    UnsupportedFormat(String),
}

/// An error raised while dumping a graph or dataset to a file.
#[derive(Debug, Error)]
pub enum SerializerError {
    /// An error raised while writing the file.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The serialization format could not be detected from the file name.
    #[error("could not detect the RDF format of {0}")]
    UnsupportedFormat(String),
}

/// Loads a graph from the file at `path`.
///
/// The format is detected from the file extension. Quad formats are
/// accepted as long as the file only uses the default graph; use
/// [`load_dataset`] for files spanning named graphs.
///
/// Usage example:
/// ```no_run
/// use oxrdfutils::load_graph;
///
/// let graph = load_graph("data.ttl")?;
/// # Result::<_, oxrdfutils::LoaderError>::Ok(())
/// ```
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoaderError> {
    let path = path.as_ref();
    let format = format_from_path(path)
        .ok_or_else(|| LoaderError::UnsupportedFormat(path.display().to_string()))?;
    let reader = BufReader::new(File::open(path)?);
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(format)
        .without_named_graphs()
        .for_reader(reader)
    {
        graph.insert(&Triple::from(quad?));
    }
    Ok(graph)
}

/// Loads a dataset from the file at `path`.
///
/// The format is detected from the file extension. Triple formats load into
/// the default graph.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoaderError> {
    let path = path.as_ref();
    let format = format_from_path(path)
        .ok_or_else(|| LoaderError::UnsupportedFormat(path.display().to_string()))?;
    let reader = BufReader::new(File::open(path)?);
    let mut dataset = Dataset::new();
    for quad in RdfParser::from_format(format).for_reader(reader) {
        let quad = quad?;
        dataset.insert(&quad);
    }
    Ok(dataset)
}

/// Dumps a graph to the file at `path`, in the format its extension names.
pub fn dump_graph(graph: &Graph, path: impl AsRef<Path>) -> Result<(), SerializerError> {
    let path = path.as_ref();
    let format = format_from_path(path)
        .ok_or_else(|| SerializerError::UnsupportedFormat(path.display().to_string()))?;
    let mut serializer =
        RdfSerializer::from_format(format).for_writer(BufWriter::new(File::create(path)?));
    for triple in graph.iter() {
        serializer.serialize_triple(triple)?;
    }
    serializer.finish()?.flush()?;
    Ok(())
}

/// Dumps a dataset to the file at `path`, in the format its extension names.
///
/// Dumping a dataset with named graphs to a triple-only format is an error.
pub fn dump_dataset(dataset: &Dataset, path: impl AsRef<Path>) -> Result<(), SerializerError> {
    let path = path.as_ref();
    let format = format_from_path(path)
        .ok_or_else(|| SerializerError::UnsupportedFormat(path.display().to_string()))?;
    let mut serializer =
        RdfSerializer::from_format(format).for_writer(BufWriter::new(File::create(path)?));
    for quad in dataset.iter() {
        serializer.serialize_quad(quad)?;
    }
    serializer.finish()?.flush()?;
    Ok(())
}

fn format_from_path(path: &Path) -> Option<RdfFormat> {
    RdfFormat::from_extension(path.extension()?.to_str()?)
}
