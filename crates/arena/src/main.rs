//! Turn-based arena combat simulator.
//!
//! Main entry point for the `arena` command line.
//!
//! # Examples
//!
//! ```bash
//! # Warrior versus mage, sword for Conan, saved afterwards
//! arena battle warrior:Conan mage:Merlin --item Conan:Sword:weapon:3 --save arena.json
//!
//! # Inspect the save
//! arena show arena.json
//!
//! # Fight the loaded roster again with a fixed seed
//! arena rematch arena.json 1 0 --seed 42
//! ```

mod commands;
mod config;
mod logging;
mod roster;

use anyhow::Result;
use clap::Parser;
use commands::{Battle, Rematch, Show};
use config::ArenaConfig;

/// Turn-based arena combat simulator
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Fight, save and reload turn-based arena battles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Fight a battle between two new characters
    Battle(Battle),

    /// Load a save and battle two of its characters
    Rematch(Rematch),

    /// Print every character stored in a save file
    Show(Show),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ARENA_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ArenaConfig::from_env();

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    match cli.command {
        Command::Battle(cmd) => cmd.execute(config),
        Command::Rematch(cmd) => cmd.execute(config),
        Command::Show(cmd) => cmd.execute(),
    }
}
