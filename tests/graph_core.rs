//! Core container tests: node/edge stores, degrees, iteration.

use congraph::{AttrValue, Graph, GraphError, GraphSchema};

fn empty_schema() -> GraphSchema {
    GraphSchema::builder().build()
}

// ==================== Node Tests ====================

#[test]
fn test_empty_graph() {
    let schema = empty_schema();
    let graph = Graph::new(&schema);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_empty());
    assert!(!graph.contains(0));
}

#[test]
fn test_add_node_assigns_dense_positions() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    assert_eq!(graph.add_node(10).unwrap(), 0);
    assert_eq!(graph.add_node(20).unwrap(), 1);
    assert_eq!(graph.add_node(30).unwrap(), 2);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_duplicate_node_rejected() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node(7).unwrap();
    let result = graph.add_node(7);
    match result.unwrap_err() {
        GraphError::DuplicateNode(7) => {}
        e => panic!("Expected DuplicateNode(7), got {:?}", e),
    }
    // The failed insert must not grow the graph.
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_contains_tracks_successful_adds() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    assert!(!graph.contains(1));
    graph.add_node(1).unwrap();
    assert!(graph.contains(1));
    assert!(!graph.contains(2));

    // A rejected duplicate changes nothing.
    assert!(graph.add_node(1).is_err());
    assert!(graph.contains(1));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_node_count_increments_once_per_success() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    for id in 0..50 {
        let before = graph.node_count();
        graph.add_node(id).unwrap();
        assert_eq!(graph.node_count(), before + 1);
    }
}

#[test]
fn test_negative_ids_are_legal() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node(-1).unwrap();
    graph.add_node(0).unwrap();
    graph.add_node(-99).unwrap();
    assert!(graph.contains(-1));
    assert!(graph.contains(-99));
    graph.add_edge(-1, -99).unwrap();
    assert_eq!(graph.degree(-1).unwrap(), 1);
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_updates_degrees() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    for id in 0..3 {
        graph.add_node(id).unwrap();
    }
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.degree(0).unwrap(), 1);
    assert_eq!(graph.degree(1).unwrap(), 2);
    assert_eq!(graph.degree(2).unwrap(), 1);
}

#[test]
fn test_edge_is_unordered() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node(0).unwrap();
    graph.add_node(1).unwrap();

    graph.add_edge(1, 0).unwrap();
    let result = graph.add_edge(0, 1);
    match result.unwrap_err() {
        GraphError::DuplicateEdge(0, 1) => {}
        e => panic!("Expected DuplicateEdge(0, 1), got {:?}", e),
    }
    assert_eq!(graph.edge_count(), 1);
    // Degrees untouched by the rejected insert.
    assert_eq!(graph.degree(0).unwrap(), 1);
    assert_eq!(graph.degree(1).unwrap(), 1);
}

#[test]
fn test_duplicate_edge_same_order() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node(4).unwrap();
    graph.add_node(5).unwrap();
    graph.add_edge(4, 5).unwrap();
    assert!(matches!(
        graph.add_edge(4, 5),
        Err(GraphError::DuplicateEdge(4, 5))
    ));
}

#[test]
fn test_edge_to_missing_node() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node(0).unwrap();

    let result = graph.add_edge(0, 99);
    match result.unwrap_err() {
        GraphError::NodeNotFound(99) => {}
        e => panic!("Expected NodeNotFound(99), got {:?}", e),
    }
    let result = graph.add_edge(98, 0);
    match result.unwrap_err() {
        GraphError::NodeNotFound(98) => {}
        e => panic!("Expected NodeNotFound(98), got {:?}", e),
    }
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_self_loop_rejected() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node(3).unwrap();

    let result = graph.add_edge(3, 3);
    match result.unwrap_err() {
        GraphError::SelfLoop(3) => {}
        e => panic!("Expected SelfLoop(3), got {:?}", e),
    }
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.degree(3).unwrap(), 0);
}

#[test]
fn test_degrees_match_incident_edges() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    for id in 0..6 {
        graph.add_node(id).unwrap();
    }
    let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (4, 5)];
    for &(u, v) in &pairs {
        graph.add_edge(u, v).unwrap();
    }

    for id in 0..6 {
        let expected = pairs
            .iter()
            .filter(|&&(u, v)| u == id || v == id)
            .count();
        assert_eq!(graph.degree(id).unwrap(), expected, "degree of node {}", id);
    }
}

#[test]
fn test_edge_position_resolves_either_order() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    for id in 0..3 {
        graph.add_node(id).unwrap();
    }
    let pos = graph.add_edge(1, 2).unwrap();
    assert_eq!(graph.edge_position(1, 2).unwrap(), pos);
    assert_eq!(graph.edge_position(2, 1).unwrap(), pos);

    match graph.edge_position(0, 1).unwrap_err() {
        GraphError::EdgeNotFound(0, 1) => {}
        e => panic!("Expected EdgeNotFound(0, 1), got {:?}", e),
    }
}

// ==================== Fixed Contract ====================

#[test]
fn test_fixed_contract() {
    let schema = empty_schema();
    let graph = Graph::new(&schema);
    assert!(!graph.is_directed());
    assert!(!graph.is_multigraph());
}

// ==================== Iteration & Views ====================

#[test]
fn test_iteration_follows_insertion_order() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    for id in [5, 3, 8, -2] {
        graph.add_node(id).unwrap();
    }

    let ids: Vec<i64> = graph.nodes().map(|n| n.id()).collect();
    assert_eq!(ids, vec![5, 3, 8, -2]);

    // `for node in &graph` is the same iteration.
    let mut via_loop = Vec::new();
    for node in &graph {
        via_loop.push(node.id());
    }
    assert_eq!(via_loop, ids);
}

#[test]
fn test_node_view() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node(5).unwrap();
    graph.add_node(3).unwrap();
    graph.add_edge(5, 3).unwrap();

    let view = graph.node(3).unwrap();
    assert_eq!(view.id(), 3);
    assert_eq!(view.position(), 1);
    assert_eq!(view.degree(), 1);

    match graph.node(42).unwrap_err() {
        GraphError::NodeNotFound(42) => {}
        e => panic!("Expected NodeNotFound(42), got {:?}", e),
    }
}

#[test]
fn test_edge_view_canonical_endpoints() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node(5).unwrap(); // position 0
    graph.add_node(3).unwrap(); // position 1

    // Inserted as (3, 5); stored canonically by position, so the earlier
    // inserted node comes first.
    let pos = graph.add_edge(3, 5).unwrap();
    let view = graph.edge(pos).unwrap();
    assert_eq!(view.endpoints(), (5, 3));

    match graph.edge(9).unwrap_err() {
        GraphError::EdgePositionOutOfRange(9) => {}
        e => panic!("Expected EdgePositionOutOfRange(9), got {:?}", e),
    }
}

#[test]
fn test_edges_iteration_order() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    for id in 0..4 {
        graph.add_node(id).unwrap();
    }
    graph.add_edge(2, 3).unwrap();
    graph.add_edge(0, 1).unwrap();

    let endpoints: Vec<(i64, i64)> = graph.edges().map(|e| e.endpoints()).collect();
    assert_eq!(endpoints, vec![(2, 3), (0, 1)]);
}

// ==================== Batch Insertion (no attributes) ====================

#[test]
fn test_add_with_empty_attrs_is_plain_add() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    graph.add_node_with_attrs(1, &[]).unwrap();
    graph.add_node_with_attrs(2, &[]).unwrap();
    graph.add_edge_with_attrs(1, 2, &[]).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node_attr_count(), 0);
    assert_eq!(graph.edge_attr_count(), 0);
}

#[test]
fn test_attrs_require_declared_keys() {
    let schema = empty_schema();
    let mut graph = Graph::new(&schema);
    let result = graph.add_node_with_attrs(1, &[("color", AttrValue::from("red"))]);
    match result.unwrap_err() {
        GraphError::UnknownAttributeKey(key) => assert_eq!(key, "color"),
        e => panic!("Expected UnknownAttributeKey, got {:?}", e),
    }
    // Structural insert is not rolled back.
    assert!(graph.contains(1));
}
