//! Read and inspect saved or encoded states
//!
//! Decodes `{identity}.state` records from the save directory, raw record
//! files, or hex state text, and displays their contents.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use game_core::{BoardView, GameState, Identity, decode_state, decode_state_hex};
use runtime::FileStateRepository;

use crate::dirs;

/// Read and inspect saved or encoded states
#[derive(Parser)]
pub struct ReadState {
    /// Identity whose saved state to read (e.g., alice)
    #[arg(value_name = "IDENTITY", required_unless_present_any = ["hex", "file"])]
    identity: Option<String>,

    /// Decode hex state text instead of a saved record
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["identity", "file"])]
    hex: Option<String>,

    /// Decode a raw state record file
    #[arg(long, value_name = "PATH", conflicts_with = "identity")]
    file: Option<PathBuf>,

    /// Custom data directory (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (level, score, pieces, board)
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl ReadState {
    pub fn execute(self) -> Result<()> {
        let (source, size, state) = self.load()?;

        println!("{} {}", style("Source:").bold().cyan(), source);
        if let Some(size) = size {
            println!("{} {}", style("Record Size:").bold().cyan(), format_bytes(size));
        }
        println!("{} {}", style("Identity:").bold().cyan(), state.identity);
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&state),
            OutputFormat::Json => print_json(&state)?,
            OutputFormat::Debug => print_debug(&state),
        }

        Ok(())
    }

    fn load(&self) -> Result<(String, Option<usize>, GameState)> {
        if let Some(text) = &self.hex {
            let state = decode_state_hex(text.trim()).context("Failed to decode state text")?;
            return Ok(("hex text".to_string(), None, state));
        }

        let path = match (&self.file, &self.identity) {
            (Some(path), _) => path.clone(),
            (None, Some(name)) => {
                let identity =
                    Identity::new(name).with_context(|| format!("Invalid identity: {name}"))?;
                let data_dir = dirs::data_dir(self.data_dir.clone());
                FileStateRepository::new(&data_dir)
                    .with_context(|| format!("Failed to open {}", data_dir.display()))?
                    .state_path(identity)
            }
            (None, None) => anyhow::bail!("Pass an identity, --hex or --file"),
        };

        if !path.exists() {
            anyhow::bail!(
                "State file not found: {}\n\nHint: Check saved states in {}",
                path.display(),
                path.parent().map(|p| p.display().to_string()).unwrap_or_default()
            );
        }

        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read state file: {}", path.display()))?;
        let state = decode_state(&bytes)
            .with_context(|| format!("Failed to decode state file: {}", path.display()))?;

        Ok((path.display().to_string(), Some(bytes.len()), state))
    }
}

fn print_summary(state: &GameState) {
    let view = BoardView::new(state);

    println!("{}", style("=== Game State Summary ===").bold().green());
    println!();

    println!("{}", style("Progress:").bold().yellow());
    println!("  Level: {}", state.level);
    println!("  Score: {}", state.score);
    println!("  Round Over: {}", state.is_round_over());
    println!();

    println!("{}", style("Player:").bold().yellow());
    println!("  Position: {}", state.player.position);
    println!("  Health: {}", state.player.health);
    println!("  Pattern: {}", state.pattern.name());
    println!();

    println!("{}", style("Board:").bold().yellow());
    println!("  Door: {}", state.door);
    println!("  Obstacles: {}", state.obstacles.len());
    if state.enemies.is_empty() {
        println!("  Enemies: none");
    } else {
        println!("  Enemies:");
        for (index, enemy) in state.enemies.iter().enumerate() {
            println!(
                "    #{:<2} Position: {} - HP: {}",
                index, enemy.position, enemy.health
            );
        }
    }
    println!();

    for line in view.render_ascii().lines() {
        println!("  {}", line);
    }
    println!();
}

fn print_json(state: &GameState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_debug(state: &GameState) {
    println!("{:#?}", state);
}

fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    }
}
