mod common;

use std::fs;

use georoute_lib::{load_graph, parse_graph, read_graph, Error, GraphData};
use tempfile::tempdir;

use common::{fixtures_dir, pt};

#[test]
fn fixture_graph_loads() {
    let data = fs::read_to_string(fixtures_dir().join("simple.graph")).expect("read fixture");
    let parsed = parse_graph(data.as_bytes()).expect("fixture parses");
    assert_eq!(parsed.vertex_count, 10);
    assert_eq!(parsed.edge_count, 11);
    assert_eq!(parsed.vertices[3], pt(1.0, -1.0));
    assert_eq!(parsed.edges[2], (1, 5));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().expect("create temp dir");
    let error = load_graph(&dir.path().join("absent.graph")).expect_err("no such file");
    assert!(matches!(error, Error::Io(_)));
}

#[test]
fn loads_from_disk() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("pair.graph");
    fs::write(&path, "2 1\nDurham 35.989709 -78.902124\nRaleigh 35.834585 -78.638592\n0 1\n")
        .expect("write graph");

    let graph = load_graph(&path).expect("valid graph");
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn empty_input_reports_missing_header() {
    let error = parse_graph("".as_bytes()).expect_err("empty");
    assert!(matches!(error, Error::GraphFormat { line: 1, .. }));
}

#[test]
fn header_needs_both_counts() {
    let error = parse_graph("3\n".as_bytes()).expect_err("edge count missing");
    match error {
        Error::GraphFormat { line, message } => {
            assert_eq!(line, 1);
            assert!(message.contains("edge count"), "{message}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn too_few_vertex_lines() {
    let error = parse_graph("3 0\nA 0 0\nB 1 1\n".as_bytes()).expect_err("one vertex short");
    match error {
        Error::GraphFormat { line, message } => {
            assert_eq!(line, 4);
            assert!(message.contains("expected 3 vertex lines, found 2"), "{message}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn too_few_edge_lines() {
    let error = parse_graph("2 2\nA 0 0\nB 1 1\n0 1\n".as_bytes()).expect_err("one edge short");
    assert!(error.to_string().contains("expected 2 edge lines, found 1"));
}

#[test]
fn extra_lines_are_rejected() {
    let error = parse_graph("1 0\nA 0 0\n0 0\n".as_bytes()).expect_err("undeclared edge");
    assert!(matches!(error, Error::GraphFormat { line: 3, .. }));
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let error = parse_graph("1 0\nA NaN 0\n".as_bytes()).expect_err("NaN latitude");
    assert!(error.to_string().contains("finite"));
}

#[test]
fn negative_edge_index_is_a_format_error() {
    let error = parse_graph("2 1\nA 0 0\nB 1 1\n0 -1\n".as_bytes()).expect_err("negative index");
    assert!(matches!(error, Error::GraphFormat { line: 4, .. }));
}

#[test]
fn out_of_range_edge_fails_construction() {
    let error = read_graph("2 1\nA 0 0\nB 1 1\n0 7\n".as_bytes()).expect_err("index 7");
    assert!(matches!(error, Error::EdgeIndexOutOfRange { index: 7, .. }));
}

#[test]
fn graph_data_with_missing_edges_fails_construction() {
    let data = GraphData {
        vertex_count: 2,
        edge_count: 5,
        vertices: vec![pt(0.0, 0.0), pt(1.0, 1.0)],
        edges: vec![(0, 1)],
    };
    let error = data.into_graph().expect_err("edge count mismatch");
    assert!(matches!(
        error,
        Error::EdgeCountMismatch {
            expected: 5,
            actual: 1
        }
    ));
}
