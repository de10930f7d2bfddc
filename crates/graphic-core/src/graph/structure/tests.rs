use super::*;

fn triangle() -> Graph {
    let mut graph = Graph::new();
    graph.add_directed_edge("A", "B", 1).unwrap();
    graph.add_directed_edge("B", "C", 2).unwrap();
    graph.add_directed_edge("C", "A", 3).unwrap();
    graph
}

#[test]
fn test_new_graph_is_empty() {
    let graph = Graph::new();
    assert_eq!(graph.size(), 0);
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.roots().count(), 0);
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph = Graph::new();
    assert!(graph.add_vertex("A", false));
    assert!(!graph.add_vertex("A", false));
    assert_eq!(graph.size(), 1);
}

#[test]
fn test_add_vertex_registers_root() {
    let mut graph = Graph::new();
    assert!(graph.add_vertex("R", true));
    assert!(graph.is_root("R"));
    let roots: Vec<&str> = graph.roots().map(|(label, _)| label).collect();
    assert_eq!(roots, vec!["R"]);
}

#[test]
fn test_add_vertex_ignores_root_flag_when_present() {
    let mut graph = Graph::new();
    graph.add_vertex("A", false);
    assert!(!graph.add_vertex("A", true));
    assert!(!graph.is_root("A"));
}

#[test]
fn test_add_directed_edge_creates_endpoints() {
    let mut graph = Graph::new();
    assert!(graph.add_directed_edge("A", "B", 5).unwrap());
    assert_eq!(graph.size(), 2);
    assert!(graph.contains_edge("A", "B").unwrap());
    assert!(!graph.contains_edge("B", "A").unwrap());
    assert!(!graph.is_root("A"));
    assert!(!graph.is_root("B"));
}

#[test]
fn test_add_directed_edge_keeps_first_weight() {
    let mut graph = Graph::new();
    assert!(graph.add_directed_edge("A", "B", 4).unwrap());
    assert!(!graph.add_directed_edge("A", "B", 10).unwrap());
    assert_eq!(graph.weight("A", "B").unwrap(), 4);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_self_loop_rejected() {
    let mut graph = Graph::new();
    let err = graph.add_directed_edge("A", "A", 5).unwrap_err();
    assert!(matches!(err, GraphicError::SelfLoopRejected { ref label } if label == "A"));
    // Validation happens before any vertex is created
    assert!(graph.is_empty());
}

#[test]
fn test_remove_vertex_drops_incoming_edges() {
    let mut graph = triangle();
    graph.add_directed_edge("B", "A", 7).unwrap();

    assert!(graph.remove_vertex("A"));
    assert_eq!(graph.size(), 2);
    assert!(!graph.contains_vertex("A"));
    assert!(graph.edges().all(|(_, to, _)| to != "A"));
    assert!(graph.contains_edge("B", "C").unwrap());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_missing_vertex() {
    let mut graph = triangle();
    assert!(!graph.remove_vertex("Z"));
    assert_eq!(graph.size(), 3);
}

#[test]
fn test_remove_root_vertex_unregisters_root() {
    let mut graph = Graph::new();
    graph.add_vertex("R", true);
    graph.remove_vertex("R");
    assert!(!graph.is_root("R"));
    assert_eq!(graph.roots().count(), 0);
}

#[test]
fn test_remove_directed_edge() {
    let mut graph = triangle();
    assert!(graph.remove_directed_edge("A", "B").unwrap());
    assert!(!graph.contains_edge("A", "B").unwrap());
    assert!(!graph.remove_directed_edge("A", "B").unwrap());
    // Vertices survive edge removal
    assert_eq!(graph.size(), 3);
}

#[test]
fn test_remove_directed_edge_errors() {
    let mut graph = triangle();
    assert!(matches!(
        graph.remove_directed_edge("A", "A"),
        Err(GraphicError::SelfLoopRejected { .. })
    ));
    assert!(matches!(
        graph.remove_directed_edge("A", "Z"),
        Err(GraphicError::VertexNotFound { ref label }) if label == "Z"
    ));
    assert!(matches!(
        graph.remove_directed_edge("Y", "A"),
        Err(GraphicError::VertexNotFound { ref label }) if label == "Y"
    ));
}

#[test]
fn test_contains_edge_missing_vertex() {
    let graph = triangle();
    assert!(matches!(
        graph.contains_edge("A", "Z"),
        Err(GraphicError::VertexNotFound { .. })
    ));
}

#[test]
fn test_weight_lookups() {
    let graph = triangle();
    assert_eq!(graph.weight("B", "C").unwrap(), 2);
    assert!(matches!(
        graph.weight("A", "C"),
        Err(GraphicError::EdgeNotFound { ref from, ref to }) if from == "A" && to == "C"
    ));
    assert!(matches!(
        graph.weight("Z", "C"),
        Err(GraphicError::VertexNotFound { .. })
    ));
}

#[test]
fn test_enumerations() {
    let graph = triangle();
    let mut labels: Vec<&str> = graph.labels().collect();
    labels.sort();
    assert_eq!(labels, vec!["A", "B", "C"]);
    assert_eq!(graph.vertices().count(), 3);

    let mut edges: Vec<(&str, &str, i64)> = graph.edges().collect();
    edges.sort();
    assert_eq!(edges, vec![("A", "B", 1), ("B", "C", 2), ("C", "A", 3)]);
    assert_eq!(graph.vertex("A").unwrap().out_degree(), 1);
    assert!(graph.vertex("Z").is_none());
}

#[test]
fn test_negative_weights_are_stored() {
    let mut graph = Graph::new();
    graph.add_directed_edge("A", "B", -3).unwrap();
    assert_eq!(graph.weight("A", "B").unwrap(), -3);
}

#[test]
fn test_clear() {
    let mut graph = triangle();
    graph.add_vertex("R", true);
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.roots().count(), 0);
}

#[test]
fn test_missing_edge_message_names_both_endpoints() {
    let graph = triangle();
    let err = graph.weight("B", "A").unwrap_err();
    assert_eq!(err.to_string(), "edge not found: B -> A");
}

fn assert_no_dangling_edges(graph: &Graph) {
    for (from, to, _) in graph.edges() {
        assert!(graph.contains_vertex(from), "edge source {from} is not a vertex");
        assert!(graph.contains_vertex(to), "edge target {to} is not a vertex");
    }
}

#[test]
fn test_edges_never_dangle() {
    let mut graph = triangle();
    graph.add_directed_edge("A", "D", 5).unwrap();
    graph.add_directed_edge("D", "B", 1).unwrap();
    assert_no_dangling_edges(&graph);

    graph.remove_vertex("B");
    assert_no_dangling_edges(&graph);

    graph.remove_directed_edge("C", "A").unwrap();
    graph.remove_vertex("A");
    assert_no_dangling_edges(&graph);

    graph.add_directed_edge("E", "C", 2).unwrap();
    assert_no_dangling_edges(&graph);
    assert_eq!(graph.edge_count(), 1);
}
