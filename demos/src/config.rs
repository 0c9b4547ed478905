//! Command-line interface of the demo binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "staypath",
    about = "Find, list and route between places to stay",
    after_help = "Set STAYPATH_LOG to a level (error, warn, info, debug, trace) or a filter directive for diagnostics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// What the demo should do.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show every place ordered by name
    List,
    /// Show places whose name, type or address contains the query
    Search {
        /// Words of the query, joined with single spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Find the shortest route between two places
    Route {
        from: String,
        to: String,
        /// Guide the search with straight-line estimates (A*)
        #[arg(long)]
        astar: bool,
    },
}
