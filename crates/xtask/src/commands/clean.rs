//! Clean save data command
//!
//! Removes either one identity's saved state or the whole save directory
//! (state records and the highscore table).
//!
//! Safety: Always prompts for confirmation before deletion.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;

use game_core::Identity;
use runtime::{FileStateRepository, StateRepository};

use crate::dirs;

/// Clean save data
#[derive(Parser, Debug)]
pub struct Clean {
    /// Delete only this identity's saved state
    #[arg(long, value_name = "IDENTITY")]
    pub identity: Option<String>,

    /// Custom data directory (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir.clone());

        if !data_dir.exists() {
            println!(
                "{}",
                style("Nothing to clean - save directory doesn't exist yet").dim()
            );
            return Ok(());
        }

        match &self.identity {
            Some(name) => self.clean_identity(data_dir, name),
            None => self.clean_all(data_dir),
        }
    }

    fn clean_identity(&self, data_dir: PathBuf, name: &str) -> Result<()> {
        let identity = Identity::new(name).with_context(|| format!("Invalid identity: {name}"))?;
        let repo = FileStateRepository::new(&data_dir)
            .with_context(|| format!("Failed to open {}", data_dir.display()))?;

        if !repo.exists(identity) {
            eprintln!(
                "{} No saved state for {}",
                style("✗").red().bold(),
                style(identity).cyan()
            );
            anyhow::bail!("Saved state does not exist");
        }

        println!("{}", style("Clean Save Data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!("  {} {}", style("→").cyan(), style(identity).bold());
        println!("    {}", style(repo.state_path(identity).display()).dim());
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        repo.delete(identity)
            .with_context(|| format!("Failed to delete state for {identity}"))?;
        println!("{}", style("✓ Cleanup complete!").green().bold());

        Ok(())
    }

    fn clean_all(&self, data_dir: PathBuf) -> Result<()> {
        let saved = FileStateRepository::new(&data_dir)
            .and_then(|repo| repo.list_identities())
            .map(|ids| ids.len())
            .unwrap_or(0);

        println!("{}", style("Clean Save Data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!(
            "  {} {}",
            style("→").cyan(),
            style(format!("Save data ({saved} saved game(s) and highscores)")).bold()
        );
        println!("    {}", style(data_dir.display()).dim());
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        print!("Deleting save data... ");
        io::stdout().flush()?;

        std::fs::remove_dir_all(&data_dir)
            .with_context(|| format!("Failed to delete: {}", data_dir.display()))?;

        println!("{}", style("✓").green());
        println!();
        println!("{}", style("✓ Cleanup complete!").green().bold());

        Ok(())
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
