//! History consistency invariant: one history entry per marked cell.

use super::Invariant;
use crate::{Board, Cell};
use std::collections::HashSet;

/// Invariant: the history has one move per occupied cell, no coordinate
/// appears twice, and each move's mark is on the grid.
pub struct HistoryConsistentInvariant;

impl Invariant<Board> for HistoryConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let history = board.history();
        let grid = board.grid();

        let distinct: HashSet<_> = history.iter().map(|m| m.coordinate).collect();

        history.len() == grid.occupied_count()
            && distinct.len() == history.len()
            && history
                .iter()
                .all(|m| grid.get(m.coordinate) == Cell::Occupied(m.player))
    }

    fn description() -> &'static str {
        "Move history matches the marked cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Coordinate, Player, Row};

    #[test]
    fn test_holds_after_moves() {
        let board = Board::default()
            .apply_move(Coordinate::new(Row::Bottom, Column::Right), Player::X)
            .expect("legal move");
        assert!(HistoryConsistentInvariant::holds(&board));
    }

    #[test]
    fn test_missing_history_violates() {
        let mut board = Board::default()
            .apply_move(Coordinate::new(Row::Bottom, Column::Right), Player::X)
            .expect("legal move");
        board.history.clear();

        assert!(!HistoryConsistentInvariant::holds(&board));
    }
}
