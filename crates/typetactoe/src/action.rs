//! First-class move and move-error types.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and are validated against a board before anything changes.

use crate::{Coordinate, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the player places their mark.
    pub coordinate: Coordinate,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinate)
    }
}

/// Reasons a move is rejected.
///
/// Variants are listed in the order the board checks them; when a move
/// breaks several rules, the first one in this list is reported.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game already has a winner.
    #[display("Illegal move by player \"{}\": \"{}\" has already won.", next_player, winner)]
    GameAlreadyDecided {
        /// Player the board would have let move next.
        next_player: Player,
        /// Player who won.
        winner: Player,
    },

    /// The row or column symbol is not one of the grid's names.
    #[display("Illegal coordinates {}", describe_coordinate(row, column))]
    InvalidCoordinate {
        /// Unrecognized row symbol, if the row was invalid.
        row: Option<String>,
        /// Unrecognized column symbol, if the column was invalid.
        column: Option<String>,
    },

    /// The player symbol is not X or O.
    #[display("Illegal player character: \"{}\"", value)]
    InvalidPlayer {
        /// Symbol as supplied by the caller.
        value: String,
    },

    /// The target cell already holds a mark.
    #[display("Illegal move: {} is already occupied by \"{}\"", coordinate, occupant)]
    CellOccupied {
        /// Cell that was targeted.
        coordinate: Coordinate,
        /// Player whose mark is there.
        occupant: Player,
    },

    /// The player moved when it was the other player's turn.
    #[display("Illegal move by {}: It is {}'s move", actual, expected)]
    OutOfTurn {
        /// Player whose turn it is.
        expected: Player,
        /// Player who tried to move.
        actual: Player,
    },

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// Descriptions of the violated invariants.
        description: String,
    },
}

fn describe_coordinate(row: &Option<String>, column: &Option<String>) -> String {
    let row = row.as_deref().map_or("<valid row>".to_string(), |r| format!("row \"{r}\""));
    let column = column
        .as_deref()
        .map_or("<valid column>".to_string(), |c| format!("column \"{c}\""));
    format!("{row}-{column}")
}
