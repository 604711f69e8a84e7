//! Text provider that loads undirected weighted graphs from line-based
//! UTF-8 files.
//!
//! The format lists the vertex count, then one vertex name per line, then
//! zero or more `a b weight` edge lines:
//!
//! ```text
//! # square with diagonals
//! 4
//! A
//! B
//! C
//! D
//! A B 1
//! B C 2
//! ```
//!
//! Blank lines and lines starting with `#` are skipped everywhere.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use sapling_core::{Graph, GraphBuilder, GraphError, Weight};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a graph file.
#[derive(Debug, Error)]
pub enum GraphFileError {
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The source held no vertex count line.
    #[error("graph file is missing the vertex count line")]
    MissingVertexCount,
    /// The first significant line was not a non-negative integer.
    #[error("line {line}: invalid vertex count `{value}`")]
    InvalidVertexCount {
        /// One-based line number.
        line: usize,
        /// The offending text.
        value: String,
    },
    /// The source ended before every declared vertex was named.
    #[error("expected {expected} vertex names but found {found}")]
    MissingVertices {
        /// Declared vertex count.
        expected: usize,
        /// Names read before the end of input.
        found: usize,
    },
    /// A vertex name contained whitespace, so no edge line could refer to it.
    #[error("line {line}: vertex name `{value}` contains whitespace")]
    InvalidVertexName {
        /// One-based line number.
        line: usize,
        /// The offending name.
        value: String,
    },
    /// An edge line did not hold exactly three fields.
    #[error("line {line}: expected `<vertex> <vertex> <weight>`")]
    MalformedEdge {
        /// One-based line number.
        line: usize,
    },
    /// An edge weight was not a non-negative integer.
    #[error("line {line}: invalid weight `{value}`")]
    InvalidWeight {
        /// One-based line number.
        line: usize,
        /// The offending text.
        value: String,
    },
    /// The graph rejected a vertex or edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl GraphFileError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "GRAPH_FILE_IO",
            Self::MissingVertexCount => "GRAPH_FILE_MISSING_VERTEX_COUNT",
            Self::InvalidVertexCount { .. } => "GRAPH_FILE_INVALID_VERTEX_COUNT",
            Self::MissingVertices { .. } => "GRAPH_FILE_MISSING_VERTICES",
            Self::InvalidVertexName { .. } => "GRAPH_FILE_INVALID_VERTEX_NAME",
            Self::MalformedEdge { .. } => "GRAPH_FILE_MALFORMED_EDGE",
            Self::InvalidWeight { .. } => "GRAPH_FILE_INVALID_WEIGHT",
            Self::Graph(_) => "GRAPH_FILE_INVALID_GRAPH",
        }
    }
}

/// A named graph loaded from a text source.
#[derive(Debug)]
pub struct GraphFile {
    name: String,
    graph: Graph,
}

impl GraphFile {
    /// Parses a graph from `reader`.
    ///
    /// # Errors
    /// Returns [`GraphFileError`] when the input is unreadable or malformed.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use sapling_providers_text::GraphFile;
    ///
    /// let input = "3\nA\nB\nC\nA B 1\nB C 2\n";
    /// let file = GraphFile::try_from_reader("demo", Cursor::new(input))?;
    /// assert_eq!(file.name(), "demo");
    /// assert_eq!(file.graph().len(), 3);
    /// assert_eq!(file.graph().edge_count(), 2);
    /// # Ok::<(), sapling_providers_text::GraphFileError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, GraphFileError> {
        let name = name.into();
        let graph = parse(reader)?;
        debug!(
            data_source = name.as_str(),
            vertices = graph.len(),
            edges = graph.edge_count(),
            "loaded graph file"
        );
        Ok(Self { name, graph })
    }

    /// Opens and parses the file at `path`.
    ///
    /// # Errors
    /// Returns [`GraphFileError::Io`] when the file cannot be opened, or any
    /// parse error from [`GraphFile::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, GraphFileError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Returns the data source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the file, returning the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// Yields `(line_number, trimmed_text)` for every non-blank, non-comment line.
fn significant_lines<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<(usize, String), io::Error>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty() && !trimmed.starts_with('#'))
                    .then(|| Ok((index + 1, trimmed.to_owned())))
            }
            Err(err) => Some(Err(err)),
        })
}

fn parse<R: BufRead>(reader: R) -> Result<Graph, GraphFileError> {
    let mut lines = significant_lines(reader);

    let (line, count_text) = lines
        .next()
        .transpose()?
        .ok_or(GraphFileError::MissingVertexCount)?;
    let vertex_count: usize =
        count_text
            .parse()
            .map_err(|_| GraphFileError::InvalidVertexCount {
                line,
                value: count_text.clone(),
            })?;

    // The declared count is untrusted until every name has been read.
    let mut builder = GraphBuilder::new();
    for found in 0..vertex_count {
        let Some((line, name)) = lines.next().transpose()? else {
            return Err(GraphFileError::MissingVertices {
                expected: vertex_count,
                found,
            });
        };
        if name.contains(char::is_whitespace) {
            return Err(GraphFileError::InvalidVertexName { line, value: name });
        }
        builder.add_vertex(name)?;
    }

    for entry in lines {
        let (line, text) = entry?;
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [left, right, weight] = fields.as_slice() else {
            return Err(GraphFileError::MalformedEdge { line });
        };
        let weight: Weight = weight.parse().map_err(|_| GraphFileError::InvalidWeight {
            line,
            value: (*weight).to_owned(),
        })?;
        builder.add_edge_by_name(left, right, weight)?;
    }

    Ok(builder.build())
}
