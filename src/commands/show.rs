//! `graphic show` - print the graph built from the arguments

use graphic_core::error::Result;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input::build_graph;
use crate::commands::render;

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let graph = build_graph(args, ctx.config.default_weight)?;
    let output = render::render_graph(ctx.format, &graph)?;
    print!("{output}");
    Ok(())
}
