use super::parse::{parse_edge_spec, EdgeSpec};
use clap::Args;

/// Graph given inline on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Directed edge as FROM:TO or FROM:TO:WEIGHT (can be specified multiple times)
    #[arg(long = "edge", short, value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Vertex with no edges required (can be specified multiple times)
    #[arg(long = "vertex", action = clap::ArgAction::Append)]
    pub vertices: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AlgorithmArgs {
    /// Vertex to start from
    #[arg(long, short)]
    pub source: String,

    #[command(flatten)]
    pub graph: GraphArgs,
}
