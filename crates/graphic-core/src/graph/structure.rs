use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::{GraphicError, Result};
use crate::graph::Vertex;

/// A directed weighted graph keyed by vertex label.
///
/// Algorithm results are also `Graph`s; their tree heads are registered
/// in the root set.
///
/// Every edge target is a vertex of the graph. Vertices are only reachable
/// through shared references, so edges cannot be added around
/// [`Graph::add_directed_edge`]:
///
/// ```compile_fail
/// let mut graph = graphic_core::Graph::new();
/// graph.add_vertex("A", false);
/// graph.vertex_mut("A").unwrap().add_edge("Z", 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: HashMap<String, Vertex>,
    roots: HashSet<String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(label)
    }

    /// Annotation access for the algorithms; edges go through the graph
    pub(crate) fn vertex_mut(&mut self, label: &str) -> Option<&mut Vertex> {
        self.vertices.get_mut(label)
    }

    /// The graph's own copy of `label`, borrowed for the graph's lifetime
    pub(crate) fn key(&self, label: &str) -> Option<&str> {
        self.vertices
            .get_key_value(label)
            .map(|(key, _)| key.as_str())
    }

    /// All `(label, vertex)` pairs, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = (&str, &Vertex)> + '_ {
        self.vertices
            .iter()
            .map(|(label, vertex)| (label.as_str(), vertex))
    }

    /// All labels, in no particular order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.keys().map(String::as_str)
    }

    /// Root `(label, vertex)` pairs, in no particular order
    pub fn roots(&self) -> impl Iterator<Item = (&str, &Vertex)> + '_ {
        self.roots.iter().filter_map(|label| {
            self.vertices
                .get_key_value(label)
                .map(|(key, vertex)| (key.as_str(), vertex))
        })
    }

    pub fn is_root(&self, label: &str) -> bool {
        self.roots.contains(label)
    }

    /// All `(from, to, weight)` triples, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, i64)> + '_ {
        self.vertices.iter().flat_map(|(from, vertex)| {
            vertex
                .edges()
                .map(move |(to, weight)| (from.as_str(), to, weight))
        })
    }

    /// Add vertex `label` if absent, registering it as a root when `is_root`.
    ///
    /// Returns `false` (and ignores `is_root`) if the vertex already exists.
    pub fn add_vertex(&mut self, label: &str, is_root: bool) -> bool {
        if self.vertices.contains_key(label) {
            return false;
        }
        self.vertices.insert(label.to_string(), Vertex::new());
        if is_root {
            self.roots.insert(label.to_string());
        }
        trace!(label, is_root, "add_vertex");
        true
    }

    /// Add the edge `u -> v`, creating missing endpoints as non-roots.
    ///
    /// Returns `Ok(false)` if the edge already exists; its weight is kept.
    pub fn add_directed_edge(&mut self, u: &str, v: &str, weight: i64) -> Result<bool> {
        if u == v {
            return Err(GraphicError::self_loop(u));
        }
        self.add_vertex(u, false);
        self.add_vertex(v, false);

        let created = self
            .vertices
            .get_mut(u)
            .is_some_and(|vertex| vertex.add_edge(v, weight));
        trace!(from = u, to = v, weight, created, "add_directed_edge");
        Ok(created)
    }

    /// Remove `u` and every edge pointing at it.
    ///
    /// Scans all remaining vertices; there is no reverse index.
    pub fn remove_vertex(&mut self, u: &str) -> bool {
        if self.vertices.remove(u).is_none() {
            return false;
        }
        self.roots.remove(u);
        for vertex in self.vertices.values_mut() {
            vertex.remove_edge(u);
        }
        trace!(label = u, "remove_vertex");
        true
    }

    /// Remove the edge `u -> v`, returning whether it existed
    pub fn remove_directed_edge(&mut self, u: &str, v: &str) -> Result<bool> {
        if u == v {
            return Err(GraphicError::self_loop(u));
        }
        self.require_endpoints(u, v)?;

        let removed = self
            .vertices
            .get_mut(u)
            .is_some_and(|vertex| vertex.remove_edge(v));
        trace!(from = u, to = v, removed, "remove_directed_edge");
        Ok(removed)
    }

    pub fn contains_edge(&self, u: &str, v: &str) -> Result<bool> {
        Ok(self.require_endpoints(u, v)?.has_neighbor(v))
    }

    /// Weight of the edge `u -> v`
    pub fn weight(&self, u: &str, v: &str) -> Result<i64> {
        self.require_endpoints(u, v)?
            .weight(v)
            .ok_or_else(|| GraphicError::edge_not_found(u, v))
    }

    /// Remove every vertex and root
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.roots.clear();
    }

    /// Both endpoints must exist; returns the tail vertex
    fn require_endpoints(&self, u: &str, v: &str) -> Result<&Vertex> {
        let tail = self
            .vertices
            .get(u)
            .ok_or_else(|| GraphicError::vertex_not_found(u))?;
        if !self.vertices.contains_key(v) {
            return Err(GraphicError::vertex_not_found(v));
        }
        Ok(tail)
    }
}

#[cfg(test)]
mod tests;
