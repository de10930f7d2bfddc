//! Session script lines
//!
//! One instruction per line, words separated by whitespace. Everything
//! after `#` is a comment.

use graphic_core::error::{GraphicError, Result};
use graphic_core::graph::Algorithm;
use graphic_core::{bail_invalid, bail_usage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    AddVertex(String),
    AddEdge {
        from: String,
        to: String,
        weight: Option<i64>,
    },
    RemoveEdge {
        from: String,
        to: String,
    },
    RemoveVertex(String),
    Contains {
        from: String,
        to: String,
    },
    Weight {
        from: String,
        to: String,
    },
    Size,
    Show,
    Clear,
    Run {
        algorithm: Algorithm,
        source: String,
    },
}

impl Instruction {
    /// Keyword the instruction was written with
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::AddVertex(_) => "vertex",
            Instruction::AddEdge { .. } => "edge",
            Instruction::RemoveEdge { .. } => "remove-edge",
            Instruction::RemoveVertex(_) => "remove-vertex",
            Instruction::Contains { .. } => "contains",
            Instruction::Weight { .. } => "weight",
            Instruction::Size => "size",
            Instruction::Show => "show",
            Instruction::Clear => "clear",
            Instruction::Run { algorithm, .. } => match algorithm {
                Algorithm::Bfs => "bfs",
                Algorithm::Dfs => "dfs",
                Algorithm::Dijkstra => "dijkstra",
            },
        }
    }
}

fn expect_args(keyword: &str, args: &[&str], usage: &str, count: usize) -> Result<()> {
    if args.len() != count {
        return Err(GraphicError::UsageError(format!(
            "`{keyword}` expects {usage}"
        )));
    }
    Ok(())
}

fn pair(args: &[&str]) -> (String, String) {
    (args[0].to_string(), args[1].to_string())
}

/// Parse one line; `Ok(None)` for blank and comment lines
pub fn parse_line(line: &str) -> Result<Option<Instruction>> {
    let line = line.split('#').next().unwrap_or_default();
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = words.split_first() else {
        return Ok(None);
    };

    let instruction = match keyword {
        "vertex" => {
            expect_args(keyword, args, "LABEL", 1)?;
            Instruction::AddVertex(args[0].to_string())
        }
        "edge" => {
            if args.len() != 2 && args.len() != 3 {
                bail_usage!("`edge` expects FROM TO [WEIGHT]");
            }
            let weight = match args.get(2) {
                Some(w) => match w.parse::<i64>() {
                    Ok(w) => Some(w),
                    Err(_) => bail_invalid!("edge weight (expected an integer)", w),
                },
                None => None,
            };
            let (from, to) = pair(args);
            Instruction::AddEdge { from, to, weight }
        }
        "remove-edge" => {
            expect_args(keyword, args, "FROM TO", 2)?;
            let (from, to) = pair(args);
            Instruction::RemoveEdge { from, to }
        }
        "remove-vertex" => {
            expect_args(keyword, args, "LABEL", 1)?;
            Instruction::RemoveVertex(args[0].to_string())
        }
        "contains" => {
            expect_args(keyword, args, "FROM TO", 2)?;
            let (from, to) = pair(args);
            Instruction::Contains { from, to }
        }
        "weight" => {
            expect_args(keyword, args, "FROM TO", 2)?;
            let (from, to) = pair(args);
            Instruction::Weight { from, to }
        }
        "size" | "show" | "clear" => {
            expect_args(keyword, args, "no arguments", 0)?;
            match keyword {
                "size" => Instruction::Size,
                "show" => Instruction::Show,
                _ => Instruction::Clear,
            }
        }
        "bfs" | "dfs" | "dijkstra" => {
            expect_args(keyword, args, "SOURCE", 1)?;
            Instruction::Run {
                algorithm: keyword.parse()?,
                source: args[0].to_string(),
            }
        }
        other => bail_usage!(format!("unknown session command: {other}")),
    };

    Ok(Some(instruction))
}
