//! Play one turn from the command line
//!
//! Feeds action text to the file-backed runtime (or, with `--state-hex`,
//! to the stateless path) and prints the resulting board with every link
//! the player can follow next.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use game_core::{BoardView, MoveKind, Resolution};
use runtime::{FileRuntime, TurnKind, TurnReport};

use crate::dirs;

/// Play one turn from action text
#[derive(Parser)]
pub struct Play {
    /// Action text: `identity,tag,player_x,player_y,target_x,target_y`
    /// (e.g., alice,00000003,00,00,00,00)
    #[arg(value_name = "ACTION")]
    action: String,

    /// Play against hex state text instead of the saved state
    /// (pass an empty string to start a new game)
    #[arg(long, value_name = "TEXT")]
    state_hex: Option<String>,

    /// Fixed seed for board generation (overrides GAME_SEED)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Custom data directory (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print the resulting state as hex text
    #[arg(long)]
    show_hex: bool,
}

impl Play {
    pub fn execute(self) -> Result<()> {
        init_tracing();

        let mut config = dirs::runtime_config(self.data_dir);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        let data_dir = config.save_data_dir.clone();
        let runtime = FileRuntime::open(config)
            .with_context(|| format!("Failed to open save directory {}", data_dir.display()))?;

        let report = match &self.state_hex {
            Some(text) => runtime.advance_encoded(text, &self.action),
            None => runtime.play(&self.action),
        }
        .context("Turn failed")?;

        print_outcome(&report);
        print_board(&report);

        if self.show_hex || self.state_hex.is_some() {
            println!("{}", style("State:").bold().yellow());
            println!("  {}", report.state_hex());
        }

        Ok(())
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome(report: &TurnReport) {
    let state = &report.state;
    println!(
        "{} level {} - score {} - health {} - pattern {}",
        style(state.identity).bold().cyan(),
        state.level,
        state.score,
        state.player.health,
        state.pattern.name()
    );

    match report.kind {
        TurnKind::NewGame => println!("{}", style("New game dealt").green()),
        TurnKind::Restarted {
            final_score,
            highscore_rank,
        } => {
            println!(
                "{} final score {}",
                style("Game over:").red().bold(),
                final_score
            );
            if let Some(rank) = highscore_rank {
                println!("{} #{}", style("Highscore:").green().bold(), rank + 1);
            }
        }
        TurnKind::Played {
            resolution,
            enemies,
        } => {
            let label = match resolution {
                Resolution::Rejected(_) => style(format!("{:?}", resolution)).red(),
                Resolution::LevelComplete { .. } => style(format!("{:?}", resolution)).green(),
                _ => style(format!("{:?}", resolution)).dim(),
            };
            println!("{} {}", style("Action:").bold(), label);
            println!(
                "{} moved {}, attacked {}, stuck {}",
                style("Enemies:").bold(),
                enemies.moved,
                enemies.attacks,
                enemies.stuck
            );
        }
    }
    println!();
}

fn print_board(report: &TurnReport) {
    let view = BoardView::new(&report.state);

    for line in view.render_ascii().lines() {
        println!("  {}", line);
    }
    println!();

    println!("{}", style("Moves:").bold().yellow());
    for link in view.available_moves() {
        let kind = match link.kind {
            MoveKind::Step => style("step").dim(),
            MoveKind::Attack => style("attack").red(),
        };
        println!("  {} {:<6} {}", link.target, kind, link.link);
    }
    for link in view.pattern_links() {
        println!("  {} {}", style(link.pattern.name()).cyan(), link.link);
    }
    println!("  {} {}", style("wait").cyan(), view.wait_link());
    println!("  {} {}", style("reset").cyan(), view.reset_link());
    println!();
}
