//! Directed weighted graphs and the forests derived from them
//!
//! Provides:
//! - `Vertex` and `Graph` with label-keyed mutation and queries
//! - BFS and DFS forests and the Dijkstra shortest-path tree
//! - Forest views for walking algorithm results

pub mod algos;
pub mod forest;
pub mod structure;
pub mod types;
pub mod vertex;

pub use algos::{bfs_forest, dfs_forest, dijkstra_tree};
pub use forest::{ForestPath, TreeStep};
pub use structure::Graph;
pub use types::{
    Algorithm, EdgeEntry, GraphReport, VertexEntry, DFS_EDGE_WEIGHT, INFINITE_DISTANCE,
};
pub use vertex::{Neighbors, Vertex};
