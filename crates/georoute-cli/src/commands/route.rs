//! Route command handlers.

use anyhow::{Context, Result};

use georoute_cli::output::{render_distance, render_plan, OutputFormat};
use georoute_lib::{plan_route, route_distance, RouteRequest, Waypoint};

use super::{resolve_waypoint, Sources};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: Waypoint,
    pub to: Waypoint,
    /// Intermediate stops, visited in order.
    pub via: Vec<Waypoint>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        self.via.iter().cloned().fold(
            RouteRequest::new(self.from.clone(), self.to.clone()),
            |request, stop| request.with_via(stop),
        )
    }
}

pub fn handle_route(
    sources: Sources<'_>,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<String> {
    let graph = sources.graph()?;
    let places = sources.places()?;
    let request = args.to_request();
    let plan = plan_route(&graph, places.as_ref(), &request)
        .with_context(|| format!("failed to plan route from {} to {}", args.from, args.to))?;
    render_plan(&plan, format)
}

/// Measure an arbitrary sequence of points; no graph is needed.
///
/// clap guarantees at least one point.
pub fn handle_distance(
    sources: Sources<'_>,
    points: &[Waypoint],
    format: OutputFormat,
) -> Result<String> {
    let places = sources.places()?;
    let resolved = points
        .iter()
        .map(|waypoint| resolve_waypoint(waypoint, places.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    render_distance(&resolved, route_distance(&resolved), format)
}
