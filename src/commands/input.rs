//! Graphs built from `--vertex` and `--edge` arguments

use graphic_core::error::Result;
use graphic_core::graph::Graph;
use tracing::{debug, warn};

use crate::cli::GraphArgs;

/// Build a graph from inline arguments.
///
/// Vertices are added before edges; an edge without a weight gets
/// `default_weight`. A repeated edge keeps its first weight.
pub fn build_graph(args: &GraphArgs, default_weight: i64) -> Result<Graph> {
    let mut graph = Graph::new();

    for label in &args.vertices {
        graph.add_vertex(label, false);
    }

    for edge in &args.edges {
        let weight = edge.weight.unwrap_or(default_weight);
        if !graph.add_directed_edge(&edge.from, &edge.to, weight)? {
            warn!(
                from = %edge.from,
                to = %edge.to,
                weight,
                "edge already in graph, keeping the first weight"
            );
        }
    }

    debug!(
        vertices = graph.size(),
        edges = graph.edge_count(),
        "build_graph"
    );
    Ok(graph)
}
