//! Hexwheel CLI: the `hexwheel` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Position { gate, line, json } => {
            commands::position::run(&cli.preset, gate, line, json)
        }

        Commands::Angle {
            degrees,
            tolerance,
            json,
        } => commands::angle::run(&cli.preset, degrees, tolerance, json),

        Commands::Identity { gate, json } => commands::identity::run(gate, json),

        Commands::Presets { json } => commands::presets::run(json),

        Commands::Dock { dataset, json } => commands::dock::run(&cli.preset, &dataset, json),
    }
}
