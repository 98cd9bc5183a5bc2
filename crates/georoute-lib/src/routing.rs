//! Route planning from user-facing waypoints.
//!
//! A [`RouteRequest`] names an origin, a destination and optional
//! intermediate stops, each given either as a place label or as raw
//! coordinates. [`plan_route`] resolves the labels through a
//! [`PlaceIndex`], snaps every waypoint onto its nearest graph vertex, routes
//! each consecutive pair and stitches the legs into a single path.
//!
//! # Example
//!
//! ```ignore
//! use georoute_lib::{load_graph, plan_route, PlaceIndex, RouteRequest};
//!
//! let graph = load_graph("usa.graph".as_ref())?;
//! let places = PlaceIndex::from_path("uscities.csv".as_ref())?;
//! let request = RouteRequest::new("Miami FL", "Seattle WA").with_via("San Diego CA");
//! let plan = plan_route(&graph, Some(&places), &request)?;
//! println!("{} points, {:.3} miles", plan.points.len(), plan.distance);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::nearest::nearest_vertex;
use crate::path::{route_distance, shortest_path};
use crate::places::PlaceIndex;
use crate::point::GeoPoint;

/// A stop on a requested route.
#[derive(Debug, Clone, PartialEq)]
pub enum Waypoint {
    /// Label looked up in the place index, e.g. `Durham NC`.
    Place(String),
    /// Explicit coordinates.
    Coordinate(GeoPoint),
}

impl Waypoint {
    pub fn place(label: impl Into<String>) -> Self {
        Waypoint::Place(label.into())
    }

    /// Coordinates for this waypoint; labels are looked up in `places`.
    ///
    /// A label with no place index fails as an unknown place without
    /// suggestions.
    pub fn resolve(&self, places: Option<&PlaceIndex>) -> Result<GeoPoint> {
        match self {
            Waypoint::Coordinate(point) => Ok(*point),
            Waypoint::Place(label) => match places {
                Some(index) => index.resolve(label),
                None => Err(Error::UnknownPlace {
                    name: label.clone(),
                    suggestions: Vec::new(),
                }),
            },
        }
    }
}

/// Parses `lat,lon` as coordinates; anything else is treated as a label.
impl FromStr for Waypoint {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(parse_coordinates(s)
            .map(Waypoint::Coordinate)
            .unwrap_or_else(|| Waypoint::Place(s.trim().to_string())))
    }
}

impl From<GeoPoint> for Waypoint {
    fn from(point: GeoPoint) -> Self {
        Waypoint::Coordinate(point)
    }
}

impl From<&str> for Waypoint {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(waypoint) => waypoint,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::Place(label) => f.write_str(label),
            Waypoint::Coordinate(point) => write!(f, "{point}"),
        }
    }
}

/// Parse `lat,lon` (whitespace tolerated) into finite coordinates.
pub fn parse_coordinates(text: &str) -> Option<GeoPoint> {
    let (lat, lon) = text.split_once(',')?;
    let point = GeoPoint::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?);
    point.is_finite().then_some(point)
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: Waypoint,
    pub via: Vec<Waypoint>,
    pub destination: Waypoint,
}

impl RouteRequest {
    pub fn new(origin: impl Into<Waypoint>, destination: impl Into<Waypoint>) -> Self {
        Self {
            origin: origin.into(),
            via: Vec::new(),
            destination: destination.into(),
        }
    }

    /// Append an intermediate stop.
    pub fn with_via(mut self, waypoint: impl Into<Waypoint>) -> Self {
        self.via.push(waypoint.into());
        self
    }

    fn waypoints(&self) -> impl Iterator<Item = &Waypoint> {
        std::iter::once(&self.origin)
            .chain(self.via.iter())
            .chain(std::iter::once(&self.destination))
    }
}

/// A waypoint after resolution and snapping onto the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnappedWaypoint {
    /// Waypoint as the caller wrote it.
    pub label: String,
    /// Resolved coordinates before snapping.
    pub query: GeoPoint,
    /// Nearest graph vertex.
    pub vertex: GeoPoint,
    /// Distance between `query` and `vertex` in miles.
    pub offset: f64,
}

/// One leg of a planned route between consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub hops: usize,
    /// Leg length in miles.
    pub distance: f64,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub waypoints: Vec<SnappedWaypoint>,
    pub legs: Vec<RouteLeg>,
    /// Every vertex along the route, junctions between legs listed once.
    pub points: Vec<GeoPoint>,
    /// Total length in miles.
    pub distance: f64,
}

impl RoutePlan {
    pub fn start(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Resolve, snap and route every waypoint of `request`.
///
/// `places` may be omitted when every waypoint is a coordinate. Fails with
/// [`Error::EmptyGraph`] when there is nothing to snap onto, with
/// [`Error::UnknownPlace`] for unresolved labels, and with
/// [`Error::DegenerateRoute`] when two consecutive waypoints snap to the same
/// vertex or to disconnected vertices.
pub fn plan_route(
    graph: &Graph,
    places: Option<&PlaceIndex>,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let waypoints = request
        .waypoints()
        .map(|waypoint| snap(graph, places, waypoint))
        .collect::<Result<Vec<_>>>()?;

    let mut legs = Vec::with_capacity(waypoints.len() - 1);
    let mut points: Vec<GeoPoint> = Vec::new();

    for pair in waypoints.windows(2) {
        let (from, to) = (pair[0].vertex, pair[1].vertex);
        let leg = shortest_path(graph, from, to)?;
        debug!(%from, %to, hops = leg.points.len() - 1, distance = leg.distance, "planned leg");

        legs.push(RouteLeg {
            from,
            to,
            hops: leg.points.len() - 1,
            distance: leg.distance,
        });

        let skip = usize::from(!points.is_empty());
        points.extend(leg.points.into_iter().skip(skip));
    }

    let distance = route_distance(&points);
    info!(
        origin = %request.origin,
        destination = %request.destination,
        legs = legs.len(),
        points = points.len(),
        distance,
        "planned route"
    );

    Ok(RoutePlan {
        waypoints,
        legs,
        points,
        distance,
    })
}

fn snap(
    graph: &Graph,
    places: Option<&PlaceIndex>,
    waypoint: &Waypoint,
) -> Result<SnappedWaypoint> {
    let query = waypoint.resolve(places)?;
    let nearest = nearest_vertex(graph, query).ok_or(Error::EmptyGraph)?;
    debug!(
        waypoint = %waypoint,
        vertex = %nearest.vertex,
        offset = nearest.distance,
        "snapped waypoint"
    );
    Ok(SnappedWaypoint {
        label: waypoint.to_string(),
        query,
        vertex: nearest.vertex,
        offset: nearest.distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_parse_with_spaces() {
        assert_eq!(
            "35.9, -78.9".parse::<Waypoint>().unwrap(),
            Waypoint::Coordinate(GeoPoint::new(35.9, -78.9))
        );
    }

    #[test]
    fn text_parses_as_place() {
        assert_eq!(Waypoint::from(" Durham NC "), Waypoint::place("Durham NC"));
        assert_eq!(Waypoint::from("1,north"), Waypoint::place("1,north"));
    }

    #[test]
    fn non_finite_coordinates_are_labels() {
        assert!(parse_coordinates("NaN,0").is_none());
        assert!(parse_coordinates("inf,1").is_none());
    }
}
