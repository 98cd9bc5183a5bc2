//! Output formatting for command results.
//!
//! Every command renders either human-readable text or a JSON document.
//! Renderers return the full string so tests can check output without
//! spawning the binary.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use georoute_lib::{GeoPoint, NearestVertex, RoutePlan};

/// Presentation style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct NearestReport<'a> {
    query: GeoPoint,
    #[serde(flatten)]
    nearest: &'a NearestVertex,
}

#[derive(Debug, Serialize)]
struct ConnectedReport {
    from: GeoPoint,
    to: GeoPoint,
    connected: bool,
}

#[derive(Debug, Serialize)]
struct DistanceReport<'a> {
    points: &'a [GeoPoint],
    distance: f64,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    vertices: usize,
    edges: usize,
}

pub fn render_nearest(
    query: GeoPoint,
    nearest: &NearestVertex,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&NearestReport { query, nearest }),
        OutputFormat::Text => Ok(format!(
            "{} is {:.3} miles from {}\n",
            nearest.vertex, nearest.distance, query
        )),
    }
}

pub fn render_connected(
    from: GeoPoint,
    to: GeoPoint,
    connected: bool,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&ConnectedReport {
            from,
            to,
            connected,
        }),
        OutputFormat::Text => {
            let verdict = if connected { "connected" } else { "disconnected" };
            Ok(format!("{from} and {to} are {verdict}\n"))
        }
    }
}

pub fn render_distance(points: &[GeoPoint], distance: f64, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&DistanceReport { points, distance }),
        OutputFormat::Text => Ok(format!("{} points, {:.3} miles\n", points.len(), distance)),
    }
}

pub fn render_stats(vertices: usize, edges: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&StatsReport { vertices, edges }),
        OutputFormat::Text => Ok(format!("vertices: {vertices}\nedges: {edges}\n")),
    }
}

/// Render a planned route.
///
/// The text form lists each snapped waypoint, every leg and then the full
/// point sequence.
pub fn render_plan(plan: &RoutePlan, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(plan);
    }

    let mut out = String::new();
    for waypoint in &plan.waypoints {
        writeln!(
            out,
            "found {} at {} ({:.3} miles from {})",
            waypoint.label, waypoint.vertex, waypoint.offset, waypoint.query
        )?;
    }
    if plan.legs.len() > 1 {
        for (index, leg) in plan.legs.iter().enumerate() {
            writeln!(
                out,
                "leg {}: {} -> {}, {} hops, {:.3} miles",
                index + 1,
                leg.from,
                leg.to,
                leg.hops,
                leg.distance
            )?;
        }
    }
    writeln!(out, "Route:")?;
    for point in &plan.points {
        writeln!(out, "- {point}")?;
    }
    writeln!(out, "short path has {} points", plan.points.len())?;
    writeln!(out, "short path is {:.3} miles in length", plan.distance)?;
    Ok(out)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}
