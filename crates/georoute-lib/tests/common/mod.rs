#![allow(dead_code)]

use std::path::PathBuf;

use georoute_lib::{load_graph, GeoPoint, Graph, PlaceIndex};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Ten-vertex fixture: a six-vertex mainland and a four-vertex island.
pub fn simple_graph() -> Graph {
    load_graph(&fixtures_dir().join("simple.graph")).expect("load fixture simple.graph")
}

pub fn simple_places() -> PlaceIndex {
    PlaceIndex::from_path(&fixtures_dir().join("simplecities.csv"))
        .expect("load fixture simplecities.csv")
}

pub fn pt(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon)
}

/// `true` when `actual` is within `percent` of `expected`.
pub fn within_percent(actual: f64, expected: f64, percent: f64) -> bool {
    (actual - expected).abs() <= expected.abs() * percent / 100.0
}
