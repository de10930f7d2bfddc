use std::collections::hash_map;
use std::collections::HashMap;

use crate::graph::types::INFINITE_DISTANCE;

/// A named node: its outgoing edges plus the annotations an algorithm
/// leaves on result vertices (discovered flag, DFS stamps, Dijkstra
/// distance and predecessor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// Neighbor label -> edge weight
    edges: HashMap<String, i64>,
    discovered: bool,
    start: u64,
    finish: u64,
    distance: i64,
    predecessor: Option<String>,
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new()
    }
}

impl Vertex {
    /// Create a vertex with no edges
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
            discovered: false,
            start: 0,
            finish: 0,
            distance: INFINITE_DISTANCE,
            predecessor: None,
        }
    }

    pub fn has_neighbor(&self, v: &str) -> bool {
        self.edges.contains_key(v)
    }

    /// Add a directed edge to `v`. An existing edge keeps its weight.
    ///
    /// Returns `true` if the edge was created.
    pub fn add_edge(&mut self, v: &str, weight: i64) -> bool {
        match self.edges.entry(v.to_string()) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(weight);
                true
            }
        }
    }

    /// Remove the edge to `v`, returning whether one existed
    pub fn remove_edge(&mut self, v: &str) -> bool {
        self.edges.remove(v).is_some()
    }

    /// Weight of the edge to `v`, if there is one
    pub fn weight(&self, v: &str) -> Option<i64> {
        self.edges.get(v).copied()
    }

    /// Neighbor labels, in no particular order
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            inner: self.edges.keys(),
        }
    }

    /// `(neighbor, weight)` pairs, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.edges.iter().map(|(label, weight)| (label.as_str(), *weight))
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub fn discovered(&self) -> bool {
        self.discovered
    }

    pub fn set_discovered(&mut self, discovered: bool) {
        self.discovered = discovered;
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn set_start(&mut self, start: u64) {
        self.start = start;
    }

    pub fn finish(&self) -> u64 {
        self.finish
    }

    pub fn set_finish(&mut self, finish: u64) {
        self.finish = finish;
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: i64) {
        self.distance = distance;
    }

    /// Shortest-path-tree parent, set on Dijkstra results
    pub fn predecessor(&self) -> Option<&str> {
        self.predecessor.as_deref()
    }

    pub fn set_predecessor(&mut self, predecessor: Option<String>) {
        self.predecessor = predecessor;
    }

    /// Restore all annotations to their initial values; edges are untouched
    pub fn reset_state(&mut self) {
        self.discovered = false;
        self.start = 0;
        self.finish = 0;
        self.distance = INFINITE_DISTANCE;
        self.predecessor = None;
    }
}

/// Iterator over a vertex's neighbor labels
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: hash_map::Keys<'a, String, i64>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
