//! Monotonic grid invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, Grid};

/// Invariant: replaying the move history onto an empty grid, never marking
/// an occupied cell, rebuilds the board's grid exactly.
pub struct MonotonicGridInvariant;

impl Invariant<Board> for MonotonicGridInvariant {
    fn holds(board: &Board) -> bool {
        let mut rebuilt = Grid::new();

        for mov in board.history() {
            if !rebuilt.is_empty_at(mov.coordinate) {
                return false;
            }
            rebuilt = rebuilt.with_cell_set(mov.coordinate, mov.player);
        }

        rebuilt == *board.grid()
    }

    fn description() -> &'static str {
        "Grid cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Coordinate, Move, Player, Row};

    #[test]
    fn test_empty_board_holds() {
        assert!(MonotonicGridInvariant::holds(&Board::default()));
    }

    #[test]
    fn test_overwrite_in_history_violates() {
        let center = Coordinate::new(Row::Middle, Column::Center);
        let mut board = Board::default();
        board.history = vec![Move::new(Player::X, center), Move::new(Player::O, center)];
        board.grid = Grid::new().with_cell_set(center, Player::O);

        assert!(!MonotonicGridInvariant::holds(&board));
    }
}
