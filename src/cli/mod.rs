//! CLI argument parsing for graphic
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AlgorithmArgs, GraphArgs};
pub use graphic_core::format::OutputFormat;
use parse::parse_output_format;

/// Graphic - build directed weighted graphs and grow BFS, DFS and Dijkstra forests
#[derive(Parser, Debug)]
#[command(name = "graphic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug output and phase timings to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first forest from a source vertex
    Bfs(AlgorithmArgs),

    /// Depth-first forest with start/finish timestamps
    Dfs(AlgorithmArgs),

    /// Shortest-path tree from a source vertex
    Dijkstra(AlgorithmArgs),

    /// Print the graph built from the arguments
    Show(GraphArgs),

    /// Apply graph commands read line by line from a file or stdin
    Session {
        /// Script file (reads stdin when omitted)
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Show or update the global configuration
    Config {
        /// Weight for edges given without one
        #[arg(long)]
        default_weight: Option<i64>,

        /// Output format used when --format is not given
        #[arg(long, value_parser = parse_output_format)]
        default_format: Option<OutputFormat>,

        /// Log level used when neither --verbose nor --log-level is given
        #[arg(long)]
        default_log_level: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::parse::EdgeSpec;

    #[test]
    fn test_parse_algorithm_command() {
        let cli = Cli::try_parse_from([
            "graphic", "dijkstra", "--source", "A", "--edge", "A:B:4", "-e", "B:C",
        ])
        .unwrap();
        let Some(Commands::Dijkstra(args)) = cli.command else {
            panic!("expected dijkstra");
        };
        assert_eq!(args.source, "A");
        assert_eq!(
            args.graph.edges,
            vec![
                EdgeSpec {
                    from: "A".into(),
                    to: "B".into(),
                    weight: Some(4)
                },
                EdgeSpec {
                    from: "B".into(),
                    to: "C".into(),
                    weight: None
                },
            ]
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["graphic", "show", "--format", "json", "--quiet"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.quiet);
    }

    #[test]
    fn test_format_is_unset_by_default() {
        let cli = Cli::try_parse_from(["graphic", "show"]).unwrap();
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_algorithm_requires_source() {
        assert!(Cli::try_parse_from(["graphic", "bfs", "--edge", "A:B"]).is_err());
    }

    #[test]
    fn test_bad_edge_is_rejected() {
        assert!(Cli::try_parse_from(["graphic", "show", "--edge", "A"]).is_err());
    }
}
