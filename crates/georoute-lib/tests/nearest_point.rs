mod common;

use georoute_lib::{build_graph, nearest_point, nearest_vertex, Graph};

use common::{pt, simple_graph, simple_places};

#[test]
fn vertex_is_its_own_nearest_point() {
    let graph = simple_graph();
    assert_eq!(nearest_point(&graph, pt(2.0, -1.0)), pt(2.0, -1.0));
    for vertex in graph.vertices() {
        assert_eq!(nearest_point(&graph, *vertex), *vertex);
    }
}

#[test]
fn places_snap_to_expected_vertices() {
    let graph = simple_graph();
    let places = simple_places();
    let expected = [
        ("Durham NC", pt(2.0, -1.0)),
        ("Cary NC", pt(2.0, 0.0)),
        ("Raleigh NC", pt(1.0, 1.0)),
        ("Apex NC", pt(1.0, 0.0)),
        ("San Juan PR", pt(-1.0, -1.0)),
        ("Ponce PR", pt(-1.0, 1.0)),
    ];

    for (label, vertex) in expected {
        let query = places.get(label).expect("fixture place");
        assert_eq!(nearest_point(&graph, query), vertex, "{label}");
    }
}

#[test]
fn result_is_always_a_vertex() {
    let graph = simple_graph();
    for query in [pt(40.0, -100.0), pt(-30.0, 150.0), pt(0.4, 0.6)] {
        let nearest = nearest_point(&graph, query);
        assert!(graph.vertices().contains(&nearest), "{nearest} is not a vertex");
    }
}

#[test]
fn ties_resolve_to_first_loaded_vertex() {
    let graph = build_graph(2, vec![pt(0.0, 1.0), pt(0.0, -1.0)], &[]).expect("valid graph");
    assert_eq!(nearest_point(&graph, pt(0.0, 0.0)), pt(0.0, 1.0));

    let reversed = build_graph(2, vec![pt(0.0, -1.0), pt(0.0, 1.0)], &[]).expect("valid graph");
    assert_eq!(nearest_point(&reversed, pt(0.0, 0.0)), pt(0.0, -1.0));
}

#[test]
fn isolated_vertices_are_candidates() {
    let graph = build_graph(3, vec![pt(0.0, 0.0), pt(0.0, 1.0), pt(5.0, 5.0)], &[(0, 1)])
        .expect("valid graph");
    assert_eq!(nearest_point(&graph, pt(5.1, 5.1)), pt(5.0, 5.0));
}

#[test]
fn empty_graph_echoes_query() {
    let graph = Graph::default();
    let query = pt(35.9, -78.9);
    assert_eq!(nearest_point(&graph, query), query);
    assert!(nearest_vertex(&graph, query).is_none());
}

#[test]
fn nearest_vertex_reports_distance() {
    let graph = simple_graph();
    let query = pt(2.0, 0.0);
    let nearest = nearest_vertex(&graph, query).expect("graph is not empty");
    assert_eq!(nearest.vertex, query);
    assert_eq!(nearest.distance, 0.0);

    let offset = nearest_vertex(&graph, pt(2.1, 0.1)).expect("graph is not empty");
    assert_eq!(offset.vertex, pt(2.0, 0.0));
    assert_eq!(offset.distance, pt(2.1, 0.1).distance(&pt(2.0, 0.0)));
}
