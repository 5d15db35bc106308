//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions run on every move; postconditions run in
//! debug builds.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::{Board, Column, Coordinate, Move, MoveError, Player, Row};
use std::str::FromStr;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: nobody has won yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with the winner once a line is complete.
    #[instrument(level = "trace", skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match crate::rules::winner(board.grid()) {
            Some(winner) => Err(MoveError::GameAlreadyDecided {
                next_player: board.next_player(),
                winner,
            }),
            None => Ok(()),
        }
    }
}

/// Precondition: the player symbol names X or O.
pub struct KnownPlayer;

impl KnownPlayer {
    /// Parses a player symbol, case-insensitively.
    #[instrument(level = "trace")]
    pub fn parse(value: &str) -> Result<Player, MoveError> {
        Player::from_str(value.trim()).map_err(|_| MoveError::InvalidPlayer {
            value: value.to_string(),
        })
    }
}

/// Precondition: row and column symbols name a cell on the grid.
pub struct KnownCoordinate;

impl KnownCoordinate {
    /// Parses row and column symbols, reporting every part that is invalid.
    #[instrument(level = "trace")]
    pub fn parse(row: &str, column: &str) -> Result<Coordinate, MoveError> {
        match (Row::from_str(row.trim()), Column::from_str(column.trim())) {
            (Ok(row), Ok(column)) => Ok(Coordinate::new(row, column)),
            (parsed_row, parsed_column) => Err(MoveError::InvalidCoordinate {
                row: parsed_row.is_err().then(|| row.to_string()),
                column: parsed_column.is_err().then(|| column.to_string()),
            }),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with the occupying mark if the cell is taken.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        match board.get(mov.coordinate).occupant() {
            Some(occupant) => Err(MoveError::CellOccupied {
                coordinate: mov.coordinate,
                occupant,
            }),
            None => Ok(()),
        }
    }
}

/// Precondition: it is the moving player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with the expected player if `mov` is out of turn.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if mov.player != board.next_player() {
            Err(MoveError::OutOfTurn {
                expected: board.next_player(),
                actual: mov.player,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a typed move.
///
/// Checks run in a fixed order and the first failure is reported:
/// undecided game, empty cell, player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        GameUndecided::check(board)?;
        CellIsEmpty::check(mov, board)?;
        PlayersTurn::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Exactly one more cell is marked than before
/// - Grid is monotonic, turns alternate, history matches the grid
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        let mut descriptions = Vec::new();

        if after.grid().occupied_count() != before.grid().occupied_count() + 1 {
            descriptions.push("Exactly one cell is marked per move".to_string());
        }

        if let Err(violations) = BoardInvariants::check_all(after) {
            descriptions.extend(violations.into_iter().map(|v| v.description));
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation {
                description: format!("Postcondition failed: {}", descriptions.join("; ")),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: Row, column: Column) -> Coordinate {
        Coordinate::new(row, column)
    }

    #[test]
    fn test_precondition_empty_cell() {
        let board = Board::default();
        let action = Move::new(Player::X, at(Row::Middle, Column::Center));
        assert!(MoveContract::pre(&board, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let board = Board::default()
            .apply_move(at(Row::Middle, Column::Center), Player::X)
            .expect("legal move");
        let action = Move::new(Player::O, at(Row::Middle, Column::Center));

        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::CellOccupied {
                coordinate: at(Row::Middle, Column::Center),
                occupant: Player::X,
            })
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let board = Board::default();
        let action = Move::new(Player::O, at(Row::Middle, Column::Center));

        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::OutOfTurn {
                expected: Player::X,
                actual: Player::O,
            })
        );
    }

    #[test]
    fn test_occupied_reported_before_wrong_turn() {
        let board = Board::default()
            .apply_move(at(Row::Top, Column::Left), Player::X)
            .expect("legal move");
        // X again (wrong turn) on an occupied cell
        let action = Move::new(Player::X, at(Row::Top, Column::Left));

        assert!(matches!(
            LegalMove::check(&action, &board),
            Err(MoveError::CellOccupied { .. })
        ));
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(KnownPlayer::parse("x"), Ok(Player::X));
        assert_eq!(
            KnownPlayer::parse("Y"),
            Err(MoveError::InvalidPlayer {
                value: "Y".to_string(),
            })
        );
        assert_eq!(
            KnownCoordinate::parse("bottom", "RIGHT"),
            Ok(at(Row::Bottom, Column::Right))
        );
        assert_eq!(
            KnownCoordinate::parse("TOP", "MIDDLE"),
            Err(MoveError::InvalidCoordinate {
                row: None,
                column: Some("MIDDLE".to_string()),
            })
        );
        assert_eq!(
            KnownCoordinate::parse("SIDE", "EDGE"),
            Err(MoveError::InvalidCoordinate {
                row: Some("SIDE".to_string()),
                column: Some("EDGE".to_string()),
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Board::default();
        let after = before
            .apply_move(at(Row::Middle, Column::Center), Player::X)
            .expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::default();
        let mut after = before
            .apply_move(at(Row::Middle, Column::Center), Player::X)
            .expect("legal move");

        after.grid = after.grid.with_cell_set(at(Row::Top, Column::Left), Player::O);

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation { .. })
        ));
    }
}
