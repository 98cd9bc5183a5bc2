use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::point::GeoPoint;

/// Index of a vertex slot in the order the vertices were supplied.
pub type VertexIndex = usize;

/// Undirected edge between two vertex values.
///
/// Endpoints are stored in coordinate order so that `(a, b)` and `(b, a)`
/// describe the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: GeoPoint,
    pub b: GeoPoint,
}

impl Edge {
    fn new(u: GeoPoint, v: GeoPoint) -> Self {
        if v < u {
            Self { a: v, b: u }
        } else {
            Self { a: u, b: v }
        }
    }

    /// Edge weight: the geometric distance between the endpoints in miles.
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }
}

/// Read-only undirected graph of geographic points.
///
/// Vertices keep their loaded slot order (duplicates by value included),
/// while adjacency is keyed by vertex value. Storage is shared, so clones are
/// cheap and the graph can be queried from several threads at once.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Arc<[GeoPoint]>,
    edges: Arc<[Edge]>,
    adjacency: Arc<HashMap<GeoPoint, Vec<GeoPoint>>>,
}

impl Graph {
    /// Vertices in the order they were supplied.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Distinct undirected edges in first-seen order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return the neighbours of a vertex, or an empty slice for unknown points.
    pub fn neighbours(&self, vertex: &GeoPoint) -> &[GeoPoint] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `true` when `point` is one of the graph's vertices.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.adjacency.contains_key(point)
    }

    /// Number of vertex slots, counting value duplicates separately.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            vertices: Arc::from(Vec::new()),
            edges: Arc::from(Vec::new()),
            adjacency: Arc::new(HashMap::new()),
        }
    }
}

/// Build a graph from an announced vertex count, the vertex coordinates and
/// a list of index-pair edges.
///
/// Fails when `vertices` does not hold exactly `vertex_count` points or when
/// an edge references a slot outside `0..vertex_count`. Coordinates must be
/// finite, since a NaN vertex could never be looked up again. An edge loaded twice,
/// in either orientation, contributes a single neighbour entry per endpoint.
/// Self-edges are kept and make a vertex its own neighbour.
pub fn build_graph(
    vertex_count: usize,
    vertices: Vec<GeoPoint>,
    edges: &[(VertexIndex, VertexIndex)],
) -> Result<Graph> {
    if vertices.len() != vertex_count {
        return Err(Error::VertexCountMismatch {
            expected: vertex_count,
            actual: vertices.len(),
        });
    }

    if let Some((index, point)) = vertices
        .iter()
        .enumerate()
        .find(|(_, point)| !point.is_finite())
    {
        return Err(Error::NonFiniteVertex {
            index,
            point: *point,
        });
    }

    let mut adjacency: HashMap<GeoPoint, Vec<GeoPoint>> = HashMap::with_capacity(vertex_count);
    for vertex in &vertices {
        adjacency.entry(*vertex).or_default();
    }

    let mut seen: HashSet<Edge> = HashSet::with_capacity(edges.len());
    let mut unique_edges = Vec::with_capacity(edges.len());

    for (position, &(i, j)) in edges.iter().enumerate() {
        let u = slot(&vertices, position, i)?;
        let v = slot(&vertices, position, j)?;

        let edge = Edge::new(u, v);
        if !seen.insert(edge) {
            continue;
        }
        unique_edges.push(edge);

        adjacency.entry(u).or_default().push(v);
        if u != v {
            adjacency.entry(v).or_default().push(u);
        }
    }

    debug!(
        vertices = vertices.len(),
        distinct_vertices = adjacency.len(),
        edges = unique_edges.len(),
        duplicate_edges = edges.len() - unique_edges.len(),
        "built graph"
    );

    Ok(Graph {
        vertices: Arc::from(vertices),
        edges: Arc::from(unique_edges),
        adjacency: Arc::new(adjacency),
    })
}

fn slot(vertices: &[GeoPoint], edge: usize, index: VertexIndex) -> Result<GeoPoint> {
    vertices
        .get(index)
        .copied()
        .ok_or(Error::EdgeIndexOutOfRange {
            edge,
            index,
            vertex_count: vertices.len(),
        })
}
