//! Command implementations for all graphic commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{algorithm, config, session, show};
use graphic_core::error::Result;
use graphic_core::graph::Algorithm;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => algorithm::execute(ctx, Algorithm::Bfs, args),
            Commands::Dfs(args) => algorithm::execute(ctx, Algorithm::Dfs, args),
            Commands::Dijkstra(args) => algorithm::execute(ctx, Algorithm::Dijkstra, args),
            Commands::Show(args) => show::execute(ctx, args),
            Commands::Session { file } => session::execute(ctx, file.as_deref()),
            Commands::Config {
                default_weight,
                default_format,
                default_log_level,
            } => config::execute(
                ctx,
                config::ConfigUpdate {
                    default_weight: *default_weight,
                    format: *default_format,
                    log_level: default_log_level.clone(),
                },
            ),
        }
    }
}
