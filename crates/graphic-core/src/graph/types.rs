use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{GraphicError, Result};
use crate::graph::Graph;

/// Sentinel distance for vertices not (yet) reached by Dijkstra
pub const INFINITE_DISTANCE: i64 = i64::MAX;

/// Weight given to every edge of a depth-first forest.
/// The forest records tree shape and timestamps, not source weights.
pub const DFS_EDGE_WEIGHT: i64 = 1;

/// The three forest-producing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    /// Run this algorithm on `graph` from `source`
    pub fn run(self, graph: &Graph, source: &str) -> Result<Graph> {
        match self {
            Algorithm::Bfs => graph.bfs(source),
            Algorithm::Dfs => graph.dfs(source),
            Algorithm::Dijkstra => graph.dijkstra(source),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphicError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(GraphicError::invalid_value(
                "algorithm (expected: bfs, dfs, dijkstra)",
                other,
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Vertex in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexEntry {
    pub label: String,
    pub root: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<String>,
}

/// Edge in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeEntry {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

/// Sorted, serializable snapshot of a graph or algorithm result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub size: usize,
    pub roots: Vec<String>,
    pub vertices: Vec<VertexEntry>,
    pub edges: Vec<EdgeEntry>,
}

impl GraphReport {
    /// Snapshot a plain graph
    pub fn from_graph(graph: &Graph) -> Self {
        Self::build(None, None, graph)
    }

    /// Snapshot an algorithm result
    pub fn from_forest(algorithm: Algorithm, source: &str, forest: &Graph) -> Self {
        Self::build(Some(algorithm), Some(source.to_string()), forest)
    }

    fn build(algorithm: Option<Algorithm>, source: Option<String>, graph: &Graph) -> Self {
        let mut roots: Vec<String> = graph.roots().map(|(label, _)| label.to_string()).collect();
        roots.sort();

        let mut vertices: Vec<VertexEntry> = graph
            .vertices()
            .map(|(label, vertex)| {
                let stamped = algorithm == Some(Algorithm::Dfs);
                VertexEntry {
                    label: label.to_string(),
                    root: graph.is_root(label),
                    start: stamped.then(|| vertex.start()),
                    finish: stamped.then(|| vertex.finish()),
                    distance: (vertex.distance() != INFINITE_DISTANCE)
                        .then(|| vertex.distance()),
                    predecessor: vertex.predecessor().map(str::to_string),
                }
            })
            .collect();
        vertices.sort_by(|a, b| a.label.cmp(&b.label));

        let mut edges: Vec<EdgeEntry> = graph
            .edges()
            .map(|(from, to, weight)| EdgeEntry {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            })
            .collect();
        edges.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));

        GraphReport {
            algorithm,
            source,
            size: graph.size(),
            roots,
            vertices,
            edges,
        }
    }
}
