//! Output formatting for graphs and forests
//!
//! Each format renders to a `String` so commands decide where it goes.

pub mod human;
pub mod json;
pub mod records;

use graphic_core::error::Result;
use graphic_core::graph::{Algorithm, Graph, GraphReport};

use crate::cli::OutputFormat;

/// Render an algorithm result
pub fn render_forest(
    format: OutputFormat,
    algorithm: Algorithm,
    source: &str,
    forest: &Graph,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::forest(algorithm, source, forest)),
        OutputFormat::Json => json::report(&GraphReport::from_forest(algorithm, source, forest)),
        OutputFormat::Records => Ok(records::report(&GraphReport::from_forest(
            algorithm, source, forest,
        ))),
    }
}

/// Render a plain graph
pub fn render_graph(format: OutputFormat, graph: &Graph) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::graph(&GraphReport::from_graph(graph))),
        OutputFormat::Json => json::report(&GraphReport::from_graph(graph)),
        OutputFormat::Records => Ok(records::report(&GraphReport::from_graph(graph))),
    }
}
