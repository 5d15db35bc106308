//! Typetactoe - a tic-tac-toe rules engine.
//!
//! The [`Board`] is a persistent state machine: every accepted move yields a
//! new board, and the outcome is always derived from the grid.
//!
//! # Architecture
//!
//! - **Types**: players, cells, rows, columns and coordinates
//! - **Grid**: nine cells addressed by coordinate
//! - **Rules**: win and draw detection, outcome evaluation
//! - **Contracts**: move preconditions and debug-build postconditions
//! - **Session**: a registry hosting many independently locked games
//!
//! # Example
//!
//! ```
//! use typetactoe::{Board, Outcome, Player};
//!
//! # fn main() -> Result<(), typetactoe::MoveError> {
//! let board = Board::default()
//!     .play("TOP", "LEFT", "X")?
//!     .play("MIDDLE", "CENTER", "O")?;
//!
//! assert_eq!(board.status(), Outcome::InProgress(Player::X));
//! println!("{}", board.render());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
mod grid;
pub mod invariants;
mod outcome;
mod render;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use board::Board;
pub use grid::Grid;
pub use outcome::Outcome;
pub use render::{ROW_SEPARATOR, render_grid};
pub use rules::Line;
pub use session::{GameId, SessionError, SessionRegistry};
pub use types::{Cell, Column, Coordinate, Player, Row};
