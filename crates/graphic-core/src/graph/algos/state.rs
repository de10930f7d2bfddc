//! Per-call traversal state
//!
//! Every algorithm call starts from a fresh table: all vertices
//! undiscovered, at infinite distance, without a predecessor. The source
//! graph's vertices are never written to.

use std::collections::HashMap;

use crate::error::{GraphicError, Result};
use crate::graph::types::INFINITE_DISTANCE;
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VertexState<'g> {
    discovered: bool,
    distance: i64,
    predecessor: Option<&'g str>,
}

impl Default for VertexState<'_> {
    fn default() -> Self {
        Self {
            discovered: false,
            distance: INFINITE_DISTANCE,
            predecessor: None,
        }
    }
}

/// Transient state for one traversal of a graph, keyed by the graph's labels
#[derive(Debug)]
pub(crate) struct TraversalState<'g> {
    entries: HashMap<&'g str, VertexState<'g>>,
}

impl<'g> TraversalState<'g> {
    /// Fresh state for every vertex of `graph`
    pub(crate) fn reset(graph: &'g Graph) -> Self {
        Self {
            entries: graph
                .labels()
                .map(|label| (label, VertexState::default()))
                .collect(),
        }
    }

    pub(crate) fn is_discovered(&self, label: &str) -> bool {
        self.entries.get(label).is_some_and(|entry| entry.discovered)
    }

    /// Flag `label` as discovered
    pub(crate) fn discover(&mut self, label: &str) {
        if let Some(entry) = self.entries.get_mut(label) {
            entry.discovered = true;
        }
    }

    pub(crate) fn distance(&self, label: &str) -> i64 {
        self.entries
            .get(label)
            .map_or(INFINITE_DISTANCE, |entry| entry.distance)
    }

    pub(crate) fn predecessor(&self, label: &str) -> Option<&'g str> {
        self.entries.get(label).and_then(|entry| entry.predecessor)
    }

    pub(crate) fn set_distance(&mut self, label: &str, distance: i64) {
        if let Some(entry) = self.entries.get_mut(label) {
            entry.distance = distance;
        }
    }

    /// Record an improved distance to `label` reached from `via`
    pub(crate) fn relax(&mut self, label: &str, distance: i64, via: &'g str) {
        if let Some(entry) = self.entries.get_mut(label) {
            entry.distance = distance;
            entry.predecessor = Some(via);
        }
    }
}

/// Look up `source` in `graph`, failing with `SourceNotFound`
pub(crate) fn resolve_source<'g>(graph: &'g Graph, source: &str) -> Result<&'g str> {
    graph
        .key(source)
        .ok_or_else(|| GraphicError::source_not_found(source))
}
