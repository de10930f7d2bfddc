use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{GraphicError, Result};
use crate::graph::algos::state::{resolve_source, TraversalState};
use crate::graph::types::INFINITE_DISTANCE;
use crate::graph::Graph;

/// Largest distance a reachable vertex can have; keeps saturated sums
/// distinguishable from the unreachable sentinel
const MAX_FINITE_DISTANCE: i64 = INFINITE_DISTANCE - 1;

/// Min-priority queue of `(distance, label)`.
///
/// Updating a priority is remove-then-reinsert on the ordered set. Ties on
/// distance pop in label order, which callers must not rely on.
#[derive(Debug, Default)]
struct DistanceQueue<'g> {
    entries: BTreeSet<(i64, &'g str)>,
}

impl<'g> DistanceQueue<'g> {
    fn push(&mut self, distance: i64, label: &'g str) {
        self.entries.insert((distance, label));
    }

    fn pop_min(&mut self) -> Option<(i64, &'g str)> {
        self.entries.pop_first()
    }

    fn update(&mut self, label: &'g str, old: i64, new: i64) {
        self.entries.remove(&(old, label));
        self.entries.insert((new, label));
    }
}

/// Build the shortest-path tree of `graph` rooted at `source`.
///
/// Vertices unreachable from `source` are left out. A negative edge fails
/// the call with `NegativeWeightOnActivePath` as soon as the vertex it
/// leaves is settled; negative edges elsewhere are never inspected.
///
/// Tree vertices carry their final `distance` and `predecessor`; tree
/// edges carry the original weights.
#[tracing::instrument(skip(graph), fields(vertices = graph.size()))]
pub fn dijkstra_tree(graph: &Graph, source: &str) -> Result<Graph> {
    let source = resolve_source(graph, source)?;
    let mut state = TraversalState::reset(graph);
    state.set_distance(source, 0);

    let mut queue = DistanceQueue::default();
    for label in graph.labels() {
        queue.push(state.distance(label), label);
    }

    let mut tree = Graph::new();
    tree.add_vertex(source, true);
    let mut settled: Vec<&str> = Vec::with_capacity(graph.size());

    while let Some((distance, current)) = queue.pop_min() {
        if distance == INFINITE_DISTANCE {
            // Everything left is unreachable
            break;
        }
        tree.add_vertex(current, false);
        state.discover(current);
        settled.push(current);

        let Some(vertex) = graph.vertex(current) else {
            continue;
        };
        for (neighbor, weight) in vertex.edges() {
            if state.is_discovered(neighbor) {
                continue;
            }
            if weight < 0 {
                return Err(GraphicError::NegativeWeightOnActivePath {
                    from: current.to_string(),
                    to: neighbor.to_string(),
                    weight,
                });
            }
            let candidate = distance.saturating_add(weight).min(MAX_FINITE_DISTANCE);
            let known = state.distance(neighbor);
            if candidate < known {
                queue.update(neighbor, known, candidate);
                state.relax(neighbor, candidate, current);
            }
        }
    }

    // Second pass: materialize tree edges from the final predecessors
    for &label in &settled {
        let predecessor = state.predecessor(label);
        if let Some(parent) = predecessor {
            tree.add_directed_edge(parent, label, graph.weight(parent, label)?)?;
        }
        if let Some(vertex) = tree.vertex_mut(label) {
            vertex.set_discovered(true);
            vertex.set_distance(state.distance(label));
            vertex.set_predecessor(predecessor.map(str::to_string));
        }
    }

    debug!(
        reached = settled.len(),
        unreachable = graph.size() - settled.len(),
        "dijkstra_tree"
    );
    Ok(tree)
}
