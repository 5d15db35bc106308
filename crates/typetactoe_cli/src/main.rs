//! Typetactoe - command-line tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use typetactoe::Player;
use typetactoe_cli::{Cli, Command, Script, play_interactive, play_script};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay { script } => run_script(Script::load(&script)?, cli.quiet),
        Command::Play { first, moves } => {
            run_script(Script::from_inline(first, &moves)?, cli.quiet)
        }
        Command::Interactive { first } => run_interactive(first),
    }
}

/// Play back a script to stdout
#[instrument(skip(script), fields(moves = script.moves.len()))]
fn run_script(script: Script, quiet: bool) -> Result<()> {
    info!(first = %script.first_player, "Starting playback");

    let mut stdout = std::io::stdout().lock();
    let playback = play_script(&script, &mut stdout, quiet)?;

    if let Some(error) = playback.error {
        bail!(error);
    }
    Ok(())
}

/// Play a game from stdin
#[instrument]
fn run_interactive(first: Player) -> Result<()> {
    info!("Starting interactive game");

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let outcome = play_interactive(first, stdin, &mut stdout)?;

    info!(%outcome, "Game ended");
    Ok(())
}
