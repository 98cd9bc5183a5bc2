//! Parser for the line-oriented `.graph` format.
//!
//! ```text
//! <vertexCount> <edgeCount>
//! <name> <lat> <lon>          repeated vertexCount times
//! <indexA> <indexB> [name]    repeated edgeCount times
//! ```
//!
//! Tokens are separated by whitespace and blank lines are ignored. Vertex
//! names and edge names are accepted but not retained. Index range checks
//! are left to [`build_graph`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph, VertexIndex};
use crate::point::GeoPoint;

/// Raw graph construction input as read from a `.graph` file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphData {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<GeoPoint>,
    pub edges: Vec<(VertexIndex, VertexIndex)>,
}

impl GraphData {
    /// Validate the counts and indices and build the read-only graph.
    pub fn into_graph(self) -> Result<Graph> {
        if self.edges.len() != self.edge_count {
            return Err(Error::EdgeCountMismatch {
                expected: self.edge_count,
                actual: self.edges.len(),
            });
        }
        build_graph(self.vertex_count, self.vertices, &self.edges)
    }
}

/// Load and build a graph from a `.graph` file on disk.
pub fn load_graph(path: &Path) -> Result<Graph> {
    debug!(path = %path.display(), "loading graph");
    let file = File::open(path)?;
    let graph = read_graph(BufReader::new(file))?;
    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Parse `.graph` data from any buffered reader and build the graph.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph> {
    parse_graph(reader)?.into_graph()
}

/// Parse `.graph` data without building the graph.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<GraphData> {
    let mut lines = Lines::new(reader);

    let (line, text) = lines
        .next_record()?
        .ok_or_else(|| Error::graph_format(1, "missing header line"))?;
    let mut header = text.split_whitespace();
    let vertex_count: usize = field(&mut header, line, "vertex count")?;
    let edge_count: usize = field(&mut header, line, "edge count")?;

    let mut vertices = Vec::with_capacity(vertex_count);
    for ordinal in 0..vertex_count {
        let (line, text) = lines.next_record()?.ok_or_else(|| {
            Error::graph_format(
                lines.last_line + 1,
                format!("expected {vertex_count} vertex lines, found {ordinal}"),
            )
        })?;
        let mut tokens = text.split_whitespace();
        tokens
            .next()
            .ok_or_else(|| Error::graph_format(line, "missing vertex name"))?;
        let lat: f64 = field(&mut tokens, line, "latitude")?;
        let lon: f64 = field(&mut tokens, line, "longitude")?;
        let point = GeoPoint::new(lat, lon);
        if !point.is_finite() {
            return Err(Error::graph_format(line, "coordinates must be finite"));
        }
        vertices.push(point);
    }

    let mut edges = Vec::with_capacity(edge_count);
    for ordinal in 0..edge_count {
        let (line, text) = lines.next_record()?.ok_or_else(|| {
            Error::graph_format(
                lines.last_line + 1,
                format!("expected {edge_count} edge lines, found {ordinal}"),
            )
        })?;
        let mut tokens = text.split_whitespace();
        let from: VertexIndex = field(&mut tokens, line, "edge start index")?;
        let to: VertexIndex = field(&mut tokens, line, "edge end index")?;
        edges.push((from, to));
    }

    if let Some((line, _)) = lines.next_record()? {
        return Err(Error::graph_format(
            line,
            format!("unexpected content after {edge_count} edges"),
        ));
    }

    Ok(GraphData {
        vertex_count,
        edge_count,
        vertices,
        edges,
    })
}

/// Non-blank lines paired with their 1-based line numbers.
struct Lines<R> {
    inner: std::io::Lines<R>,
    last_line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            last_line: 0,
        }
    }

    fn next_record(&mut self) -> Result<Option<(usize, String)>> {
        for text in self.inner.by_ref() {
            let text = text?;
            self.last_line += 1;
            if !text.trim().is_empty() {
                return Ok(Some((self.last_line, text)));
            }
        }
        Ok(None)
    }
}

fn field<T: FromStr>(tokens: &mut SplitWhitespace<'_>, line: usize, what: &str) -> Result<T> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::graph_format(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| Error::graph_format(line, format!("invalid {what} '{token}'")))
}
