//! georoute library entry points.
//!
//! This crate models an undirected road graph whose vertices are
//! latitude/longitude points and answers nearest-vertex, connectivity and
//! shortest-path queries over it. It also parses the `.graph` and places CSV
//! formats and plans routes between named places. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod nearest;
pub mod path;
pub mod places;
pub mod point;
pub mod routing;

pub use error::{DegenerateReason, Error, Result};
pub use graph::{build_graph, Edge, Graph, VertexIndex};
pub use loader::{load_graph, parse_graph, read_graph, GraphData};
pub use nearest::{nearest_point, nearest_vertex, NearestVertex};
pub use path::{connected, route, route_distance, shortest_path, ShortestPath};
pub use places::PlaceIndex;
pub use point::{GeoPoint, EARTH_RADIUS_MILES};
pub use routing::{
    parse_coordinates, plan_route, RouteLeg, RoutePlan, RouteRequest, SnappedWaypoint, Waypoint,
};
