use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::graph::algos::state::{resolve_source, TraversalState};
use crate::graph::Graph;

/// Visit everything reachable from `root`, adding tree edges with their
/// original weights to `forest`
fn bfs_visit<'g>(
    graph: &'g Graph,
    forest: &mut Graph,
    state: &mut TraversalState<'g>,
    root: &'g str,
) -> Result<()> {
    let mut queue: VecDeque<&'g str> = VecDeque::new();
    state.discover(root);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        let Some(vertex) = graph.vertex(current) else {
            continue;
        };
        for (neighbor, weight) in vertex.edges() {
            if state.is_discovered(neighbor) {
                continue;
            }
            state.discover(neighbor);
            forest.add_directed_edge(current, neighbor, weight)?;
            queue.push_back(neighbor);
        }
    }

    Ok(())
}

/// Build the breadth-first forest of `graph` starting at `source`.
///
/// Vertices unreachable from `source` seed further trees, each registered
/// as a root; the forest spans every vertex of `graph`.
#[tracing::instrument(skip(graph), fields(vertices = graph.size()))]
pub fn bfs_forest(graph: &Graph, source: &str) -> Result<Graph> {
    let source = resolve_source(graph, source)?;
    let mut state = TraversalState::reset(graph);
    let mut forest = Graph::new();

    forest.add_vertex(source, true);
    bfs_visit(graph, &mut forest, &mut state, source)?;

    for label in graph.labels() {
        if !state.is_discovered(label) {
            forest.add_vertex(label, true);
            bfs_visit(graph, &mut forest, &mut state, label)?;
        }
    }

    debug!(
        roots = forest.roots().count(),
        edges = forest.edge_count(),
        "bfs_forest"
    );
    Ok(forest)
}
