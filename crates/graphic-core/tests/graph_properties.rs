//! Property tests for graph mutation and the forest algorithms

use std::collections::{HashMap, HashSet, VecDeque};

use graphic_core::graph::{Graph, INFINITE_DISTANCE};
use proptest::prelude::*;

type EdgeList = Vec<(usize, usize, i64)>;

fn label(i: usize) -> String {
    format!("v{i}")
}

/// Vertex count plus non-negative edges between distinct vertices
fn graph_input() -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..12).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n, 0i64..20), 0..(n * 3));
        (Just(n), edges)
    })
}

fn build(n: usize, edges: &EdgeList) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_vertex(&label(i), false);
    }
    for &(u, v, w) in edges {
        if u != v {
            graph.add_directed_edge(&label(u), &label(v), w).unwrap();
        }
    }
    graph
}

fn labels(graph: &Graph) -> HashSet<String> {
    graph.labels().map(str::to_string).collect()
}

fn reachable(graph: &Graph, source: &str) -> HashSet<String> {
    let mut seen = HashSet::from([source.to_string()]);
    let mut queue = VecDeque::from([source.to_string()]);
    while let Some(current) = queue.pop_front() {
        for neighbor in graph.vertex(&current).unwrap().neighbors() {
            if seen.insert(neighbor.to_string()) {
                queue.push_back(neighbor.to_string());
            }
        }
    }
    seen
}

/// Bellman-Ford over the whole graph; weights are non-negative here
fn brute_force_distances(graph: &Graph, source: &str) -> HashMap<String, i64> {
    let mut dist: HashMap<String, i64> = HashMap::from([(source.to_string(), 0)]);
    for _ in 0..graph.size() {
        for (from, to, weight) in graph.edges() {
            if let Some(&d) = dist.get(from) {
                let candidate = d + weight;
                let entry = dist.entry(to.to_string()).or_insert(i64::MAX);
                if candidate < *entry {
                    *entry = candidate;
                }
            }
        }
    }
    dist
}

/// Every vertex appears once; every non-root has exactly one parent
fn assert_spanning_forest(graph: &Graph, forest: &Graph) {
    assert_eq!(labels(forest), labels(graph));

    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    for (_, to, _) in forest.edges() {
        *in_degree.entry(to).or_default() += 1;
    }
    for (label, _) in forest.vertices() {
        let expected = if forest.is_root(label) { 0 } else { 1 };
        assert_eq!(in_degree.get(label).copied().unwrap_or(0), expected);
    }
    assert_eq!(
        forest.edge_count() + forest.roots().count(),
        forest.size()
    );
}

proptest! {
    #[test]
    fn bfs_forest_spans_all_vertices((n, edges) in graph_input(), source in 0usize..12) {
        let graph = build(n, &edges);
        let source = label(source % n);

        let forest = graph.bfs(&source).unwrap();

        assert_spanning_forest(&graph, &forest);
        prop_assert!(forest.is_root(&source));
        for (from, to, weight) in forest.edges() {
            prop_assert_eq!(graph.weight(from, to).unwrap(), weight);
        }
    }

    #[test]
    fn dfs_forest_spans_all_vertices((n, edges) in graph_input(), source in 0usize..12) {
        let graph = build(n, &edges);
        let source = label(source % n);

        let forest = graph.dfs(&source).unwrap();

        assert_spanning_forest(&graph, &forest);
        prop_assert!(forest.is_root(&source));
        for (from, to, weight) in forest.edges() {
            prop_assert!(graph.contains_edge(from, to).unwrap());
            prop_assert_eq!(weight, 1);
        }
    }

    #[test]
    fn dfs_stamps_nest_like_parentheses((n, edges) in graph_input(), source in 0usize..12) {
        let graph = build(n, &edges);
        let forest = graph.dfs(&label(source % n)).unwrap();

        let intervals: Vec<(u64, u64)> = forest
            .vertices()
            .map(|(_, vertex)| (vertex.start(), vertex.finish()))
            .collect();

        let mut stamps: Vec<u64> = intervals.iter().flat_map(|&(s, f)| [s, f]).collect();
        stamps.sort_unstable();
        let expected: Vec<u64> = (1..=(2 * n as u64)).collect();
        prop_assert_eq!(stamps, expected);

        for &(s1, f1) in &intervals {
            prop_assert!(s1 < f1);
            for &(s2, f2) in &intervals {
                let disjoint = f1 < s2 || f2 < s1;
                let nested = (s1 <= s2 && f2 <= f1) || (s2 <= s1 && f1 <= f2);
                prop_assert!(disjoint || nested);
            }
        }

        // Children start after and finish before their parent
        for (from, to, _) in forest.edges() {
            let parent = forest.vertex(from).unwrap();
            let child = forest.vertex(to).unwrap();
            prop_assert!(parent.start() < child.start());
            prop_assert!(child.finish() < parent.finish());
        }
    }

    #[test]
    fn dijkstra_covers_exactly_reachable((n, edges) in graph_input(), source in 0usize..12) {
        let graph = build(n, &edges);
        let source = label(source % n);

        let tree = graph.dijkstra(&source).unwrap();

        prop_assert_eq!(labels(&tree), reachable(&graph, &source));
        prop_assert_eq!(tree.roots().count(), 1);
        prop_assert!(tree.is_root(&source));
        prop_assert_eq!(tree.edge_count() + 1, tree.size());
    }

    #[test]
    fn dijkstra_matches_brute_force((n, edges) in graph_input(), source in 0usize..12) {
        let graph = build(n, &edges);
        let source = label(source % n);

        let tree = graph.dijkstra(&source).unwrap();
        let expected = brute_force_distances(&graph, &source);

        for (name, vertex) in tree.vertices() {
            prop_assert_eq!(expected.get(name).copied(), Some(vertex.distance()));
            prop_assert_ne!(vertex.distance(), INFINITE_DISTANCE);
            // The parent chain reproduces the same cost
            let path = tree.path_from_root(name).unwrap();
            prop_assert_eq!(path.cost, vertex.distance());
            prop_assert_eq!(path.labels.first().map(String::as_str), Some(source.as_str()));
        }
        for (from, to, weight) in tree.edges() {
            prop_assert_eq!(graph.weight(from, to).unwrap(), weight);
        }
    }

    #[test]
    fn algorithms_leave_source_graph_untouched((n, edges) in graph_input(), source in 0usize..12) {
        let graph = build(n, &edges);
        let before = graph.clone();
        let source = label(source % n);

        graph.bfs(&source).unwrap();
        graph.dfs(&source).unwrap();
        graph.dijkstra(&source).unwrap();

        prop_assert_eq!(graph, before);
    }

    #[test]
    fn mutations_are_idempotent((n, edges) in graph_input()) {
        let mut graph = build(n, &edges);
        let snapshot = graph.clone();

        for i in 0..n {
            prop_assert!(!graph.add_vertex(&label(i), false));
        }
        for &(u, v, w) in &edges {
            if u != v {
                prop_assert!(!graph.add_directed_edge(&label(u), &label(v), w + 100).unwrap());
            }
        }
        prop_assert_eq!(graph, snapshot);
    }

    #[test]
    fn remove_vertex_clears_incoming_edges((n, edges) in graph_input(), victim in 0usize..12) {
        let mut graph = build(n, &edges);
        let victim = label(victim % n);

        prop_assert!(graph.remove_vertex(&victim));
        prop_assert_eq!(graph.size(), n - 1);
        for (from, to, _) in graph.edges() {
            prop_assert_ne!(from, victim.as_str());
            prop_assert_ne!(to, victim.as_str());
        }
    }

    #[test]
    fn edge_targets_stay_vertices(
        (n, edges) in graph_input(),
        victims in prop::collection::vec(0usize..12, 0..4),
    ) {
        let mut graph = build(n, &edges);
        for victim in victims {
            graph.remove_vertex(&label(victim % n));
            for (from, to, _) in graph.edges() {
                prop_assert!(graph.contains_vertex(from));
                prop_assert!(graph.contains_vertex(to));
            }
        }
    }
}
