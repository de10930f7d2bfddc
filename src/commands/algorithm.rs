//! `graphic bfs|dfs|dijkstra` - grow a forest from a source vertex

use graphic_core::error::{GraphicError, Result};
use graphic_core::graph::Algorithm;
use graphic_core::trace_time;

use crate::cli::AlgorithmArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input::build_graph;
use crate::commands::render;

pub fn execute(ctx: &CommandContext, algorithm: Algorithm, args: &AlgorithmArgs) -> Result<()> {
    let graph = build_graph(&args.graph, ctx.config.default_weight)?;
    if graph.is_empty() {
        return Err(GraphicError::EmptyGraph);
    }

    let forest = algorithm.run(&graph, &args.source)?;
    trace_time!(ctx.start, "run_algorithm", source = args.source.as_str());

    let output = render::render_forest(ctx.format, algorithm, &args.source, &forest)?;
    print!("{output}");
    Ok(())
}
