use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{DegenerateReason, Error, Result};
use crate::graph::Graph;
use crate::point::GeoPoint;

/// Shortest path between two vertices and its total length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Vertices from start to end inclusive.
    pub points: Vec<GeoPoint>,
    /// Sum of edge lengths along `points`, in miles.
    pub distance: f64,
}

/// Check whether `goal` can be reached from `start` by following edges.
///
/// Uses a depth-first traversal with an explicit stack. Points that are not
/// vertices are never visited, so they are reported as unreachable rather
/// than raising an error.
pub fn connected(graph: &Graph, start: GeoPoint, goal: GeoPoint) -> bool {
    if !graph.contains(&start) {
        return false;
    }

    let mut visited: HashSet<GeoPoint> = HashSet::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        if current == goal {
            return true;
        }
        for &next in graph.neighbours(&current) {
            if next == goal {
                return true;
            }
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }

    false
}

/// Find the shortest path from `start` to `end`, returning only the points.
pub fn route(graph: &Graph, start: GeoPoint, end: GeoPoint) -> Result<Vec<GeoPoint>> {
    shortest_path(graph, start, end).map(|path| path.points)
}

/// Run Dijkstra's algorithm from `start` and stop once `end` is settled.
///
/// Fails with [`Error::DegenerateRoute`] when `start == end` or when the two
/// points are not connected; no partial path is ever returned.
pub fn shortest_path(graph: &Graph, start: GeoPoint, end: GeoPoint) -> Result<ShortestPath> {
    if start == end {
        return Err(degenerate(start, end, DegenerateReason::SameEndpoints));
    }
    if !connected(graph, start, end) {
        return Err(degenerate(start, end, DegenerateReason::Unreachable));
    }

    let mut distances: HashMap<GeoPoint, f64> = HashMap::new();
    let mut parents: HashMap<GeoPoint, Option<GeoPoint>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut settled = 0usize;

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current_distance = match distances.get(&entry.node) {
            Some(distance) if *distance < entry.cost.0 => continue,
            Some(distance) => *distance,
            None => continue,
        };
        settled += 1;

        if entry.node == end {
            debug!(
                %start,
                %end,
                settled,
                distance = current_distance,
                "shortest path found"
            );
            let points = reconstruct_path(&parents, start, end)
                .ok_or_else(|| degenerate(start, end, DegenerateReason::Unreachable))?;
            return Ok(ShortestPath {
                points,
                distance: current_distance,
            });
        }

        for &next in graph.neighbours(&entry.node) {
            let next_cost = current_distance + entry.node.distance(&next);
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(%start, %end, settled, "search exhausted without reaching end");
    Err(degenerate(start, end, DegenerateReason::Unreachable))
}

/// Total length in miles of the polyline through `points`.
///
/// Consecutive points need not share an edge. Empty and single-point
/// sequences measure `0.0`.
pub fn route_distance(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .sum()
}

fn degenerate(start: GeoPoint, end: GeoPoint, reason: DegenerateReason) -> Error {
    Error::DegenerateRoute { start, end, reason }
}

fn reconstruct_path(
    parents: &HashMap<GeoPoint, Option<GeoPoint>>,
    start: GeoPoint,
    goal: GeoPoint,
) -> Option<Vec<GeoPoint>> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            path.reverse();
            return Some(path);
        }
        current = *parents.get(&node)?;
    }
    None
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: GeoPoint,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: GeoPoint, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
