//! Single-shot graph queries: nearest vertex, connectivity and graph size.

use anyhow::{Context, Result};

use georoute_cli::output::{render_connected, render_nearest, render_stats, OutputFormat};
use georoute_lib::{connected, nearest_point, nearest_vertex, Error as GraphError, Waypoint};

use super::{resolve_waypoint, Sources};

pub fn handle_nearest(sources: Sources<'_>, at: &Waypoint, format: OutputFormat) -> Result<String> {
    let graph = sources.graph()?;
    let places = sources.places()?;
    let query = resolve_waypoint(at, places.as_ref())?;
    let nearest = nearest_vertex(&graph, query).ok_or(GraphError::EmptyGraph)?;
    render_nearest(query, &nearest, format)
}

/// Report whether two waypoints share a component.
///
/// Waypoints are snapped onto the graph first unless `exact` is set, in which
/// case they must already be vertices to be reported as connected.
pub fn handle_connected(
    sources: Sources<'_>,
    from: &Waypoint,
    to: &Waypoint,
    exact: bool,
    format: OutputFormat,
) -> Result<String> {
    let graph = sources.graph()?;
    let places = sources.places()?;
    let mut a = resolve_waypoint(from, places.as_ref())?;
    let mut b = resolve_waypoint(to, places.as_ref())?;
    if !exact {
        a = nearest_point(&graph, a);
        b = nearest_point(&graph, b);
    }
    render_connected(a, b, connected(&graph, a, b), format)
}

pub fn handle_stats(sources: Sources<'_>, format: OutputFormat) -> Result<String> {
    let graph = sources.graph().context("stats needs a graph")?;
    render_stats(graph.vertex_count(), graph.edge_count(), format)
}
