use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("georoute");
    cmd.arg("--graph")
        .arg(fixture("simple.graph"))
        .arg("--places")
        .arg(fixture("simplecities.csv"))
        .env("RUST_LOG", "error");
    cmd
}

#[test]
fn nearest_snaps_place_to_vertex() {
    let mut cmd = prepare_command();
    cmd.arg("nearest").arg("Raleigh NC");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("(1.0, 1.0) is "));
}

#[test]
fn nearest_json_includes_query_and_distance() {
    let mut cmd = prepare_command();
    cmd.arg("--format").arg("json").arg("nearest").arg("0.1,0.1");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["vertex"]["lat"], 0.0);
    assert_eq!(value["vertex"]["lon"], 0.0);
    assert_eq!(value["query"]["lat"], 0.1);
    assert!(value["distance"].as_f64().expect("number") > 0.0);
}

#[test]
fn connected_within_mainland() {
    let mut cmd = prepare_command();
    cmd.arg("connected").arg("Durham NC").arg("Raleigh NC");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(2.0, -1.0) and (1.0, 1.0) are connected"));
}

#[test]
fn island_is_disconnected_from_mainland() {
    let mut cmd = prepare_command();
    cmd.arg("connected").arg("Durham NC").arg("San Juan PR");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("are disconnected"));
}

#[test]
fn exact_connectivity_requires_vertices() {
    let mut cmd = prepare_command();
    cmd.arg("connected").arg("--exact").arg("2.05,-0.95").arg("2,0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("are disconnected"));
}

#[test]
fn distance_sums_consecutive_points() {
    let mut cmd = prepare_command();
    cmd.arg("distance").arg("2,-1").arg("1,-1").arg("1,0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 points, 138.331 miles"));
}

#[test]
fn stats_counts_vertices_and_edges() {
    let mut cmd = prepare_command();
    cmd.arg("stats");

    cmd.assert()
        .success()
        .stdout(predicate::eq("vertices: 10\nedges: 11\n"));
}

#[test]
fn stats_json() {
    let mut cmd = prepare_command();
    cmd.arg("--format").arg("json").arg("stats");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["vertices"], 10);
    assert_eq!(value["edges"], 11);
}

#[test]
fn place_names_without_places_table_explain_the_fix() {
    let mut cmd = cargo_bin_cmd!("georoute");
    cmd.env_remove("GEOROUTE_PLACES")
        .env("RUST_LOG", "error")
        .arg("--graph")
        .arg(fixture("simple.graph"))
        .arg("nearest")
        .arg("Raleigh NC");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("pass --places or set GEOROUTE_PLACES"))
        .stderr(predicate::str::contains("unknown place: Raleigh NC"));
}

#[test]
fn distance_requires_points() {
    let mut cmd = prepare_command();
    cmd.arg("distance");

    cmd.assert().failure();
}
