//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`]. Rules are kept apart from board
//! storage so the outcome can always be recomputed from the cells alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, has_won, winner, winning_line};

use crate::{Grid, Outcome, Player};
use tracing::instrument;

/// Derives the outcome of a grid, given whose turn it would be.
///
/// A win always takes precedence over a full grid, so a last move that
/// both completes a line and fills the grid is reported as a win.
#[instrument(level = "trace", skip(grid))]
pub fn evaluate(grid: &Grid, next_player: Player) -> Outcome {
    if has_won(grid, Player::X) {
        Outcome::Won(Player::X)
    } else if has_won(grid, Player::O) {
        Outcome::Won(Player::O)
    } else if is_full(grid) {
        Outcome::Draw
    } else {
        Outcome::InProgress(next_player)
    }
}
