//! Development tasks for the grid game
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, Play, ReadState};

/// Development tasks for the grid game
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the grid game", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play one turn from action text
    Play(Play),

    /// Read and inspect saved or encoded states
    ReadState(ReadState),

    /// Clean save data
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SAVE_DATA_DIR and GAME_SEED)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(cmd) => cmd.execute(),
        Command::ReadState(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
