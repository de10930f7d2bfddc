use tracing::debug;

use crate::error::Result;
use crate::graph::algos::state::{resolve_source, TraversalState};
use crate::graph::types::DFS_EDGE_WEIGHT;
use crate::graph::vertex::Neighbors;
use crate::graph::Graph;

/// Stack frame: a vertex and the neighbors it has yet to try
type Frame<'g> = (&'g str, Neighbors<'g>);

fn stamp_start(forest: &mut Graph, label: &str, time: u64) {
    if let Some(vertex) = forest.vertex_mut(label) {
        vertex.set_discovered(true);
        vertex.set_start(time);
    }
}

fn stamp_finish(forest: &mut Graph, label: &str, time: u64) {
    if let Some(vertex) = forest.vertex_mut(label) {
        vertex.set_finish(time);
    }
}

fn frame<'g>(graph: &'g Graph, label: &'g str) -> Option<Frame<'g>> {
    graph.vertex(label).map(|vertex| (label, vertex.neighbors()))
}

/// Explore from `root` with an explicit stack, stamping start/finish
/// times on the forest's copies of the vertices.
///
/// `root` must already be a forest vertex.
fn dfs_visit<'g>(
    graph: &'g Graph,
    forest: &mut Graph,
    state: &mut TraversalState<'g>,
    root: &'g str,
    time: &mut u64,
) -> Result<()> {
    let mut stack: Vec<Frame<'g>> = Vec::new();

    *time += 1;
    state.discover(root);
    stamp_start(forest, root, *time);
    stack.extend(frame(graph, root));

    while let Some((current, pending)) = stack.last_mut() {
        let current = *current;
        let next = pending.find(|neighbor| !state.is_discovered(neighbor));

        match next {
            Some(neighbor) => {
                forest.add_directed_edge(current, neighbor, DFS_EDGE_WEIGHT)?;
                *time += 1;
                state.discover(neighbor);
                stamp_start(forest, neighbor, *time);
                stack.extend(frame(graph, neighbor));
            }
            None => {
                stack.pop();
                *time += 1;
                stamp_finish(forest, current, *time);
            }
        }
    }

    Ok(())
}

/// Build the depth-first forest of `graph` starting at `source`.
///
/// Each forest vertex carries `start`/`finish` timestamps from a single
/// timer that keeps running across trees. Forest edges all weigh
/// [`DFS_EDGE_WEIGHT`], whatever the source weight.
#[tracing::instrument(skip(graph), fields(vertices = graph.size()))]
pub fn dfs_forest(graph: &Graph, source: &str) -> Result<Graph> {
    let source = resolve_source(graph, source)?;
    let mut state = TraversalState::reset(graph);
    let mut forest = Graph::new();
    let mut time = 0;

    forest.add_vertex(source, true);
    dfs_visit(graph, &mut forest, &mut state, source, &mut time)?;

    for label in graph.labels() {
        if !state.is_discovered(label) {
            forest.add_vertex(label, true);
            dfs_visit(graph, &mut forest, &mut state, label, &mut time)?;
        }
    }

    debug!(
        roots = forest.roots().count(),
        edges = forest.edge_count(),
        time,
        "dfs_forest"
    );
    Ok(forest)
}
