//! Graph algorithm implementations
//!
//! Each algorithm borrows the graph, builds its own traversal state and
//! returns a new forest:
//! - `bfs`: Breadth-first forest
//! - `dfs`: Depth-first forest with start/finish timestamps
//! - `dijkstra`: Shortest-path tree
//! - `state`: Per-call traversal state shared by all three

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub(crate) mod state;

pub use bfs::bfs_forest;
pub use dfs::dfs_forest;
pub use dijkstra::dijkstra_tree;

use crate::error::Result;
use crate::graph::Graph;

impl Graph {
    /// Breadth-first forest from `source`; see [`bfs_forest`]
    pub fn bfs(&self, source: &str) -> Result<Graph> {
        bfs_forest(self, source)
    }

    /// Depth-first forest from `source`; see [`dfs_forest`]
    pub fn dfs(&self, source: &str) -> Result<Graph> {
        dfs_forest(self, source)
    }

    /// Shortest-path tree rooted at `source`; see [`dijkstra_tree`]
    pub fn dijkstra(&self, source: &str) -> Result<Graph> {
        dijkstra_tree(self, source)
    }
}
