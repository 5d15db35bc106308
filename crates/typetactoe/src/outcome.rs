//! Derived game outcome.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Status of a game, recomputed from the grid on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing; holds the player to move.
    InProgress(Player),
    /// Player completed a line.
    Won(Player),
    /// Grid is full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns the player to move while the game is in progress.
    pub fn next_player(&self) -> Option<Player> {
        match self {
            Outcome::InProgress(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress(_))
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress(player) => write!(f, "Your move, player \"{}\"...", player),
            Outcome::Won(player) => write!(f, "Player \"{}\" has won.", player),
            Outcome::Draw => write!(f, "Game over, nobody has won."),
        }
    }
}
