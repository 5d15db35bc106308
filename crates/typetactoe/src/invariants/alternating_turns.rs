//! Alternating turns invariant: the first player, then the other, and so on.

use super::Invariant;
use crate::Board;

/// Invariant: players alternate turns.
///
/// History starts with the board's first player, no player moves twice in
/// a row, and the player to move is the one the alternation predicts.
pub struct AlternatingTurnsInvariant;

impl Invariant<Board> for AlternatingTurnsInvariant {
    fn holds(board: &Board) -> bool {
        let history = board.history();

        if let Some(first) = history.first()
            && first.player != board.first_player()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            board.first_player()
        } else {
            board.first_player().opponent()
        };

        board.next_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
