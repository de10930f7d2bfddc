//! Per-line session output
//!
//! Human output reads like the interactive tool. JSON output is one object
//! per line. Records output prefixes each result with an `R` line.

use graphic_core::error::{GraphicError, Result};
use graphic_core::graph::GraphReport;
use serde_json::json;

use super::{Instruction, Outcome};
use crate::cli::OutputFormat;
use crate::commands::render;

/// Text to print for one applied line, if any
pub fn render(
    format: OutputFormat,
    quiet: bool,
    line_no: usize,
    instruction: &Instruction,
    outcome: &Outcome,
) -> Result<Option<String>> {
    let command = instruction.name();
    let text = match format {
        OutputFormat::Human => match outcome {
            Outcome::Mutation { changed: true, .. } if quiet => return Ok(None),
            Outcome::Mutation { message, .. } => format!("{message}\n"),
            Outcome::Answer(value) => format!("{value}\n"),
            Outcome::Snapshot(graph) => render::render_graph(format, graph)?,
            Outcome::Forest {
                algorithm,
                source,
                forest,
            } => render::render_forest(format, *algorithm, source, forest)?,
        },
        OutputFormat::Json => {
            let value = match outcome {
                Outcome::Mutation { changed, message } => json!({
                    "line": line_no,
                    "command": command,
                    "changed": changed,
                    "message": message,
                }),
                Outcome::Answer(value) => json!({
                    "line": line_no,
                    "command": command,
                    "value": value,
                }),
                Outcome::Snapshot(graph) => json!({
                    "line": line_no,
                    "command": command,
                    "result": GraphReport::from_graph(graph),
                }),
                Outcome::Forest {
                    algorithm,
                    source,
                    forest,
                } => json!({
                    "line": line_no,
                    "command": command,
                    "result": GraphReport::from_forest(*algorithm, source, forest),
                }),
            };
            format!("{}\n", serde_json::to_string(&value)?)
        }
        OutputFormat::Records => {
            let head = format!("R line={line_no} command={command}");
            match outcome {
                Outcome::Mutation { changed, .. } => format!("{head} changed={changed}\n"),
                Outcome::Answer(value) => format!("{head} value={value}\n"),
                Outcome::Snapshot(graph) => {
                    format!("{head}\n{}", render::render_graph(format, graph)?)
                }
                Outcome::Forest {
                    algorithm,
                    source,
                    forest,
                } => format!(
                    "{head}\n{}",
                    render::render_forest(format, *algorithm, source, forest)?
                ),
            }
        }
    };
    Ok(Some(text))
}

/// Report a failed line on stderr
pub fn report_error(format: OutputFormat, quiet: bool, line_no: usize, error: &GraphicError) {
    if format == OutputFormat::Json {
        let mut envelope = error.to_json();
        envelope["line"] = json!(line_no);
        eprintln!("{envelope}");
    } else if !quiet {
        eprintln!("error: line {line_no}: {error}");
    }
}
