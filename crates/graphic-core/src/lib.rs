//! Graphic Core Library
//!
//! Mutable directed weighted graphs plus the forests derived from them:
//! breadth-first and depth-first forests and Dijkstra shortest-path trees.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use error::{GraphicError, Result};
pub use graph::{Algorithm, Graph, Vertex};
