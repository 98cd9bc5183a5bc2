//! Snapping arbitrary points onto graph vertices.
//!
//! Both queries scan every vertex slot in loaded order and keep the first
//! strict minimum, so ties resolve to the earliest vertex. There is no spatial
//! index; each call is linear in the vertex count.

use serde::Serialize;

use crate::graph::Graph;
use crate::point::GeoPoint;

/// A graph vertex together with its distance from the query point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestVertex {
    pub vertex: GeoPoint,
    /// Distance from the query point in miles.
    pub distance: f64,
}

/// Return the vertex closest to `point`, or `None` when the graph is empty.
pub fn nearest_vertex(graph: &Graph, point: GeoPoint) -> Option<NearestVertex> {
    let mut best: Option<NearestVertex> = None;
    for vertex in graph.vertices() {
        let distance = point.distance(vertex);
        let closer = match best {
            Some(current) => distance < current.distance,
            None => true,
        };
        if closer {
            best = Some(NearestVertex {
                vertex: *vertex,
                distance,
            });
        }
    }
    best
}

/// Return the vertex closest to `point`.
///
/// On a graph with no vertices the input point is echoed back unchanged.
/// Callers that must tell the two cases apart should use [`nearest_vertex`].
pub fn nearest_point(graph: &Graph, point: GeoPoint) -> GeoPoint {
    nearest_vertex(graph, point)
        .map(|nearest| nearest.vertex)
        .unwrap_or(point)
}
