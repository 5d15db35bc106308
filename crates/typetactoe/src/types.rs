//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (moves first unless the game says otherwise).
    #[default]
    X,
    /// Player O.
    O,
}

impl Player {
    /// Both players, X first.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The character drawn for this cell: the player's mark, or a space.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Row of the grid, top to bottom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Row {
    /// First row.
    Top,
    /// Second row.
    Middle,
    /// Third row.
    Bottom,
}

impl Row {
    /// All rows in order.
    pub const ALL: [Row; 3] = [Row::Top, Row::Middle, Row::Bottom];

    /// Zero-based row index.
    pub fn index(self) -> usize {
        match self {
            Row::Top => 0,
            Row::Middle => 1,
            Row::Bottom => 2,
        }
    }
}

/// Column of the grid, left to right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Column {
    /// First column.
    Left,
    /// Second column.
    Center,
    /// Third column.
    Right,
}

impl Column {
    /// All columns in order.
    pub const ALL: [Column; 3] = [Column::Left, Column::Center, Column::Right];

    /// Zero-based column index.
    pub fn index(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Center => 1,
            Column::Right => 2,
        }
    }
}

/// A cell address: one of exactly nine (row, column) pairs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Coordinate {
    /// Row of the cell.
    pub row: Row,
    /// Column of the cell.
    pub column: Column,
}

impl Coordinate {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        at(Row::Top, Column::Left),
        at(Row::Top, Column::Center),
        at(Row::Top, Column::Right),
        at(Row::Middle, Column::Left),
        at(Row::Middle, Column::Center),
        at(Row::Middle, Column::Right),
        at(Row::Bottom, Column::Left),
        at(Row::Bottom, Column::Center),
        at(Row::Bottom, Column::Right),
    ];

    /// Converts the coordinate to a row-major grid index (0-8).
    pub fn to_index(self) -> usize {
        self.row.index() * 3 + self.column.index()
    }

    /// Creates a coordinate from a row-major grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Const constructor for coordinate tables.
pub(crate) const fn at(row: Row, column: Column) -> Coordinate {
    Coordinate { row, column }
}

/// Formats as `ROW-COLUMN`, e.g. `TOP-LEFT`.
impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}
