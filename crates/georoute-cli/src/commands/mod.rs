// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod query;
pub mod route;

use std::path::Path;

use anyhow::{bail, Context, Result};

use georoute_lib::{load_graph, GeoPoint, Graph, PlaceIndex, Waypoint};

/// Paths shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    pub graph: Option<&'a Path>,
    pub places: Option<&'a Path>,
}

impl Sources<'_> {
    pub fn graph(&self) -> Result<Graph> {
        let Some(path) = self.graph else {
            bail!("no graph file given; pass --graph or set GEOROUTE_GRAPH");
        };
        load_graph(path).with_context(|| format!("failed to load graph from {}", path.display()))
    }

    /// Load the places table only when one was configured.
    pub fn places(&self) -> Result<Option<PlaceIndex>> {
        self.places
            .map(|path| {
                PlaceIndex::from_path(path)
                    .with_context(|| format!("failed to load places from {}", path.display()))
            })
            .transpose()
    }
}

/// Turn a waypoint into coordinates, looking labels up in `places`.
pub fn resolve_waypoint(waypoint: &Waypoint, places: Option<&PlaceIndex>) -> Result<GeoPoint> {
    let resolved = waypoint.resolve(places);
    if places.is_none() {
        return resolved
            .context("place names need a places table; pass --places or set GEOROUTE_PLACES");
    }
    Ok(resolved?)
}
