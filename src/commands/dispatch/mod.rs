//! Command dispatch logic for graphic

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use graphic_core::config::GlobalConfig;
use graphic_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, NoCommand};

pub use command::CommandContext;

pub fn run(cli: &Cli, config: &GlobalConfig, format: OutputFormat, start: Instant) -> Result<()> {
    debug!(
        elapsed = ?start.elapsed(),
        %format,
        default_weight = config.default_weight,
        "resolve_config"
    );

    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
