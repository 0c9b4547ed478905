//! Places-to-stay demo: list, search and route between places.
//!
//! Run: cargo run --bin staypath -- route Park Cinema --astar

use clap::Parser;
use staypath_demos::{Cli, Directory, logging, run};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {e}");
    }

    let directory = Directory::sample();
    let stdout = std::io::stdout();
    if let Err(e) = run(&cli.command, &directory, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
