//! Read-only views over algorithm results
//!
//! A forest is a `Graph` whose trees hang off its root set. These helpers
//! walk it the way a renderer lays it out: root by root, parent before
//! children. Labels are sorted so output is stable across runs.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{GraphicError, Result};
use crate::graph::Graph;

/// One line of a pre-order forest walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStep<'a> {
    pub depth: usize,
    pub label: &'a str,
    /// Edge from the parent, `None` for roots
    pub parent: Option<&'a str>,
}

/// Labels from a tree root down to a vertex, with the summed edge weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForestPath {
    pub labels: Vec<String>,
    pub cost: i64,
}

impl Graph {
    /// Children of `label`, sorted
    pub fn children(&self, label: &str) -> Vec<&str> {
        let mut children: Vec<&str> = self
            .vertex(label)
            .map(|vertex| vertex.neighbors().collect())
            .unwrap_or_default();
        children.sort_unstable();
        children
    }

    /// The vertex with an edge into `label`, if any.
    ///
    /// In a forest there is at most one.
    pub fn parent(&self, label: &str) -> Option<&str> {
        self.vertices()
            .find(|(_, vertex)| vertex.has_neighbor(label))
            .map(|(parent, _)| parent)
    }

    /// Pre-order walk of every tree, roots in label order
    pub fn tree_walk(&self) -> Vec<TreeStep<'_>> {
        let mut roots: Vec<&str> = self.roots().map(|(label, _)| label).collect();
        roots.sort_unstable();

        let mut steps = Vec::with_capacity(self.size());
        let mut seen: HashSet<&str> = HashSet::new();
        let mut stack: Vec<TreeStep<'_>> = roots
            .into_iter()
            .rev()
            .map(|label| TreeStep {
                depth: 0,
                label,
                parent: None,
            })
            .collect();

        while let Some(step) = stack.pop() {
            if !seen.insert(step.label) {
                continue;
            }
            steps.push(step);
            for child in self.children(step.label).into_iter().rev() {
                stack.push(TreeStep {
                    depth: step.depth + 1,
                    label: child,
                    parent: Some(step.label),
                });
            }
        }

        steps
    }

    /// Path from the root of `label`'s tree down to `label`
    pub fn path_from_root(&self, label: &str) -> Result<ForestPath> {
        let mut current = self
            .key(label)
            .ok_or_else(|| GraphicError::vertex_not_found(label))?;

        let mut labels = vec![current.to_string()];
        let mut cost: i64 = 0;
        let mut seen: HashSet<&str> = HashSet::from([current]);

        while !self.is_root(current) {
            let Some(parent) = self.parent(current) else {
                break;
            };
            if !seen.insert(parent) {
                break;
            }
            cost = cost.saturating_add(self.weight(parent, current)?);
            labels.push(parent.to_string());
            current = parent;
        }

        labels.reverse();
        Ok(ForestPath { labels, cost })
    }
}
