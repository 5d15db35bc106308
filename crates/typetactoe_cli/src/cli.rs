//! Command-line interface for typetactoe.

use clap::{Parser, Subcommand};
use typetactoe::Player;

/// Typetactoe - play tic-tac-toe games against the rules engine
#[derive(Parser, Debug)]
#[command(name = "typetactoe")]
#[command(about = "Tic-tac-toe rules engine playback and play", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Only print the final board and status
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play back a game script (TOML)
    Replay {
        /// Path to the script file
        #[arg(short, long)]
        script: std::path::PathBuf,
    },

    /// Play back moves given inline as ROW-COLUMN:PLAYER
    Play {
        /// Player who moves first
        #[arg(long, default_value = "X")]
        first: Player,

        /// Moves, e.g. TOP-LEFT:X MIDDLE-CENTER:O
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Play interactively, reading "ROW COLUMN" lines from stdin
    Interactive {
        /// Player who moves first
        #[arg(long, default_value = "X")]
        first: Player,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_command() {
        let cli = Cli::try_parse_from(["typetactoe", "play", "--first", "o", "TOP-LEFT:O"])
            .expect("valid arguments");
        match cli.command {
            Command::Play { first, moves } => {
                assert_eq!(first, Player::O);
                assert_eq!(moves, vec!["TOP-LEFT:O".to_string()]);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(!cli.quiet);
    }

    #[test]
    fn test_quiet_is_global() {
        let cli = Cli::try_parse_from(["typetactoe", "replay", "--script", "game.toml", "-q"])
            .expect("valid arguments");
        assert!(cli.quiet);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
