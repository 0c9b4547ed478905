//! Places-to-stay directory built on the staypath engine.
//!
//! Demonstrates: aggregating per-place neighbour and heuristic maps into a
//! graph, Dijkstra / A* route finding between places, case-insensitive
//! search over name, type and address, and name-ordered listings.

pub mod config;
pub mod directory;
pub mod logging;
pub mod place;

use std::io::Write;

pub use config::{Cli, Command};
pub use directory::Directory;
pub use place::{Address, Place, PlaceKind};

/// Write `options` as a numbered list; continuation lines are indented.
pub fn display_options<T: ToString>(
    out: &mut impl Write,
    options: &[T],
    empty_prompt: &str,
) -> std::io::Result<()> {
    if options.is_empty() {
        return writeln!(out, "{empty_prompt}");
    }
    for (i, option) in options.iter().enumerate() {
        let text = option.to_string();
        let mut lines = text.lines();
        writeln!(out, "{}.\t{}", i + 1, lines.next().unwrap_or_default())?;
        for line in lines {
            writeln!(out, "  \t{line}")?;
        }
    }
    Ok(())
}

/// Execute one command against `directory`, writing the result to `out`.
pub fn run(
    command: &Command,
    directory: &Directory,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::List => {
            display_options(out, &directory.listing(), "No places to stay!")?;
        }
        Command::Search { query } => {
            let query = query.join(" ");
            let found = directory.search(&query);
            log::info!("{} place(s) match {query:?}", found.len());
            display_options(out, &found, "No places match your search!")?;
        }
        Command::Route { from, to, astar } => {
            let route = directory.route(from, to, *astar)?;
            if route.is_reachable() {
                writeln!(out, "Route: {}", route.path.join(" -> "))?;
                writeln!(out, "Distance: {}", route.distance)?;
            } else {
                writeln!(out, "No route from {from} to {to}.")?;
            }
        }
    }
    Ok(())
}
