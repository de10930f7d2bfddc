//! `graphic session` - apply a stream of graph commands to one graph
//!
//! Every line is parsed and applied in order. A failing line is reported
//! with its line number and the session carries on; the command fails at
//! the end if any line did.

mod output;
mod parse;

pub use parse::{parse_line, Instruction};

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use graphic_core::error::{GraphicError, Result};
use graphic_core::graph::{Algorithm, Graph};
use serde_json::json;
use tracing::{debug, trace};

use crate::commands::dispatch::CommandContext;

/// Result of one applied instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A mutation; `changed` is false when the graph was left as it was
    Mutation { changed: bool, message: String },
    /// Answer to a query
    Answer(serde_json::Value),
    /// Copy of the session graph
    Snapshot(Graph),
    /// Algorithm result
    Forest {
        algorithm: Algorithm,
        source: String,
        forest: Graph,
    },
}

fn mutation(changed: bool, done: String, unchanged: String) -> Outcome {
    Outcome::Mutation {
        changed,
        message: if changed { done } else { unchanged },
    }
}

/// One graph mutated by a sequence of instructions
#[derive(Debug, Clone)]
pub struct Session {
    graph: Graph,
    default_weight: i64,
}

impl Session {
    pub fn new(default_weight: i64) -> Self {
        Self {
            graph: Graph::new(),
            default_weight,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn apply(&mut self, instruction: &Instruction) -> Result<Outcome> {
        let graph = &mut self.graph;
        let outcome = match instruction {
            Instruction::AddVertex(label) => mutation(
                graph.add_vertex(label, false),
                format!("added vertex {label}"),
                format!("vertex already in graph: {label}"),
            ),
            Instruction::AddEdge { from, to, weight } => {
                let weight = weight.unwrap_or(self.default_weight);
                mutation(
                    graph.add_directed_edge(from, to, weight)?,
                    format!("added edge {from} -> {to} ({weight})"),
                    format!("edge already in graph: {from} -> {to}"),
                )
            }
            Instruction::RemoveEdge { from, to } => mutation(
                graph.remove_directed_edge(from, to)?,
                format!("removed edge {from} -> {to}"),
                format!("edge not in graph: {from} -> {to}"),
            ),
            Instruction::RemoveVertex(label) => mutation(
                graph.remove_vertex(label),
                format!("removed vertex {label}"),
                format!("vertex not in graph: {label}"),
            ),
            Instruction::Contains { from, to } => Outcome::Answer(json!(graph.contains_edge(from, to)?)),
            Instruction::Weight { from, to } => Outcome::Answer(json!(graph.weight(from, to)?)),
            Instruction::Size => Outcome::Answer(json!(graph.size())),
            Instruction::Show => Outcome::Snapshot(graph.clone()),
            Instruction::Clear => {
                let changed = !graph.is_empty();
                graph.clear();
                mutation(
                    changed,
                    "cleared graph".to_string(),
                    "graph already empty".to_string(),
                )
            }
            Instruction::Run { algorithm, source } => {
                if graph.is_empty() {
                    return Err(GraphicError::EmptyGraph);
                }
                Outcome::Forest {
                    algorithm: *algorithm,
                    source: source.clone(),
                    forest: algorithm.run(graph, source)?,
                }
            }
        };
        trace!(instruction = instruction.name(), "apply");
        Ok(outcome)
    }
}

fn read_script(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            GraphicError::Other(format!("failed to read {}: {}", path.display(), e))
        }),
        None => {
            let mut script = String::new();
            io::stdin().read_to_string(&mut script)?;
            Ok(script)
        }
    }
}

pub fn execute(ctx: &CommandContext, file: Option<&Path>) -> Result<()> {
    let script = read_script(file)?;
    let mut session = Session::new(ctx.config.default_weight);
    let mut applied = 0usize;
    let mut failed = 0usize;

    for (index, line) in script.lines().enumerate() {
        let line_no = index + 1;
        let result = parse_line(line).and_then(|parsed| match parsed {
            Some(instruction) => session
                .apply(&instruction)
                .map(|outcome| Some((instruction, outcome))),
            None => Ok(None),
        });

        match result {
            Ok(None) => {}
            Ok(Some((instruction, outcome))) => {
                applied += 1;
                let rendered =
                    output::render(ctx.format, ctx.cli.quiet, line_no, &instruction, &outcome)?;
                if let Some(text) = rendered {
                    print!("{text}");
                }
            }
            Err(e) => {
                failed += 1;
                output::report_error(ctx.format, ctx.cli.quiet, line_no, &e);
            }
        }
    }

    debug!(
        applied,
        failed,
        vertices = session.graph().size(),
        edges = session.graph().edge_count(),
        elapsed = ?ctx.start.elapsed(),
        "session"
    );

    if failed > 0 {
        return Err(GraphicError::Other(format!(
            "{failed} of {} session commands failed",
            applied + failed
        )));
    }
    Ok(())
}
