use densegraph::WeightedDenseGraph;

#[test]
fn test_empty_constructor() {
    let graph = WeightedDenseGraph::new();
    assert!(!graph.vertex_exists(0));
    assert!(!graph.vertex_exists(1));
    assert!(!graph.vertex_exists(10));
    for (v1, v2) in [(0, 0), (0, 1), (10, 5), (100, 1000)] {
        assert!(!graph.contains_edge(v1, v2));
        assert!(graph.edge_weight(v1, v2).is_nan());
    }
}

#[test]
fn test_constructor_with_vertices() {
    let graph = WeightedDenseGraph::with_vertices(10);
    assert!(graph.vertex_exists(0));
    assert!(graph.vertex_exists(1));
    assert!(graph.vertex_exists(9));
    assert!(!graph.vertex_exists(10));
    assert!(!graph.vertex_exists(20));

    assert_eq!(graph.edge_weight(0, 0), 0.0);
    assert_eq!(graph.edge_weight(5, 5), 0.0);
    assert_eq!(graph.edge_weight(9, 9), 0.0);
    for (v1, v2) in [(0, 1), (1, 0), (9, 1), (5, 8), (8, 9)] {
        assert_eq!(graph.edge_weight(v1, v2), f64::INFINITY);
        assert!(!graph.contains_edge(v1, v2));
    }
    assert!(graph.edge_weight(10, 10).is_nan());
    assert!(graph.edge_weight(10, 1).is_nan());
    assert!(graph.edge_weight(1, 10).is_nan());
}

#[test]
fn test_add_vertex() {
    let mut graph = WeightedDenseGraph::new();
    graph.add_vertex(0);
    assert!(graph.vertex_exists(0));
    graph.add_vertex(10);
    graph.add_vertex(0);
    assert!(graph.vertex_exists(0));
    assert!(!graph.vertex_exists(1));
    assert!(graph.vertex_exists(10));

    assert_eq!(graph.edge_weight(0, 10), f64::INFINITY);
    assert!(graph.edge_weight(0, 1).is_nan());
    assert!(graph.edge_weight(1, 10).is_nan());
    assert_eq!(graph.edge_weight(10, 10), 0.0);
    assert_eq!(graph.edge_weight(0, 0), 0.0);
}

#[test]
fn test_remove_vertex() {
    let mut graph = WeightedDenseGraph::with_vertices(3);
    graph.remove_vertex(3);
    graph.remove_vertex(1);
    assert_eq!(graph.edge_weight(0, 2), f64::INFINITY);
    assert!(graph.edge_weight(0, 1).is_nan());
    assert!(graph.edge_weight(1, 2).is_nan());
    assert!(graph.edge_weight(3, 3).is_nan());
}

#[test]
fn test_set_edge() {
    let mut graph = WeightedDenseGraph::with_vertices(10);
    graph.set_edge(0, 0, 100.0);
    graph.set_edge(10, 10, 100.0);
    graph.set_edge(1, 10, 100.0);
    graph.set_edge(10, 2, 100.0);
    graph.set_edge(2, 2, 100.0);
    graph.set_edge(2, 5, 100.0);
    graph.set_edge(6, 1, 100.0);
    graph.set_edge(8, 4, 100.0);

    assert_eq!(graph.edge_weight(0, 0), 0.0);
    assert!(graph.edge_weight(10, 10).is_nan());
    assert!(graph.edge_weight(1, 10).is_nan());
    assert!(graph.edge_weight(2, 10).is_nan());
    assert!(graph.edge_weight(20, 3).is_nan());
    assert_eq!(graph.edge_weight(2, 2), 0.0);
    assert_eq!(graph.edge_weight(2, 5), 100.0);
    assert_eq!(graph.edge_weight(6, 1), 100.0);
    assert_eq!(graph.edge_weight(8, 4), 100.0);
    assert_eq!(graph.edge_weight(8, 3), f64::INFINITY);
    assert_eq!(graph.edge_weight(2, 9), f64::INFINITY);

    graph.set_edge(2, 5, 200.0);
    assert_eq!(graph.edge_weight(2, 5), 200.0);
    graph.set_edge(2, 5, f64::INFINITY);
    assert_eq!(graph.edge_weight(2, 5), f64::INFINITY);
    assert!(!graph.contains_edge(5, 2));
    graph.set_edge(6, 1, f64::NAN);
    assert_eq!(graph.edge_weight(1, 6), 100.0);
}

#[test]
fn test_negative_weight_is_ignored() {
    let mut graph = WeightedDenseGraph::with_vertices(4);
    graph.set_edge(3, 1, -2.0);
    assert_eq!(graph.edge_weight(1, 3), f64::INFINITY);
    graph.set_edge(3, 1, 2.0);
    graph.set_edge(1, 3, -0.5);
    assert_eq!(graph.edge_weight(3, 1), 2.0);
}

#[test]
fn test_weights_are_symmetric() {
    let mut graph = WeightedDenseGraph::with_vertices(200);
    graph.set_edge(199, 3, 1.25);
    graph.set_edge(64, 130, 7.0);
    assert_eq!(graph.edge_weight(3, 199), 1.25);
    assert_eq!(graph.edge_weight(199, 3), 1.25);
    assert_eq!(graph.edge_weight(130, 64), 7.0);
    assert!(graph.contains_edge(64, 130));
    assert!(graph.contains_edge(130, 64));
}

#[test]
fn test_growth_keeps_existing_weights() {
    let mut graph = WeightedDenseGraph::with_vertices(3);
    graph.set_edge(0, 1, 1.0);
    graph.set_edge(2, 1, 2.0);
    graph.add_vertex(500);
    graph.add_vertex(70);

    assert_eq!(graph.edge_weight(0, 1), 1.0);
    assert_eq!(graph.edge_weight(1, 2), 2.0);
    assert_eq!(graph.edge_weight(500, 0), f64::INFINITY);
    assert_eq!(graph.edge_weight(70, 500), f64::INFINITY);
    assert!(graph.edge_weight(69, 500).is_nan());

    graph.set_edge(500, 70, 3.0);
    assert_eq!(graph.edge_weight(70, 500), 3.0);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_removed_vertex_keeps_weights_hidden() {
    let mut graph = WeightedDenseGraph::with_vertices(3);
    graph.set_edge(0, 2, 4.0);
    graph.remove_vertex(2);
    assert!(!graph.contains_edge(0, 2));
    assert!(graph.edge_weight(0, 2).is_nan());

    graph.add_vertex(2);
    assert!(graph.contains_edge(0, 2));
    assert_eq!(graph.edge_weight(2, 0), 4.0);
}
