//! Graphic - directed weighted graphs and their traversal forests
//!
//! Builds a graph from command-line edges or a session script and prints
//! the BFS, DFS or Dijkstra forest grown from a source vertex.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, Commands, OutputFormat};
use graphic_core::config::GlobalConfig;
use graphic_core::error::{ExitCode as GraphicExitCode, GraphicError};
use graphic_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let graphic_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        GraphicError::UsageError(err.to_string())
                    }
                    _ => GraphicError::Other(err.to_string()),
                };

                eprintln!("{}", graphic_error.to_json());
                return ExitCode::from(graphic_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    // A broken config file is reported after logging is up
    let (config, config_error) = match GlobalConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (GlobalConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init_tracing(
        cli.verbose,
        cli.log_level.as_deref(),
        config.log_level.as_deref(),
        cli.log_json,
    ) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let format = cli.format.or(config.format).unwrap_or_default();

    // `graphic config` starts from the defaults so it can overwrite a broken file
    let result = match config_error {
        Some(e) if !matches!(cli.command, Some(Commands::Config { .. })) => Err(e),
        Some(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config");
            commands::dispatch::run(&cli, &config, format, start)
        }
        None => commands::dispatch::run(&cli, &config, format, start),
    };

    match result {
        Ok(()) => ExitCode::from(GraphicExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
