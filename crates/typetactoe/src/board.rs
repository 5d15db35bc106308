//! The board state machine.
//!
//! A [`Board`] is a persistent value: every accepted move returns a new
//! board and leaves the receiver untouched, so a rejected move can never
//! be half-applied and two games never share state.

use crate::contracts::{Contract, GameUndecided, KnownCoordinate, KnownPlayer, MoveContract};
use crate::{Cell, Coordinate, Grid, Move, MoveError, Outcome, Player, rules};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game state: the grid, whose turn it is, and how it got here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) first_player: Player,
    pub(crate) next_player: Player,
    pub(crate) history: Vec<Move>,
}

impl Board {
    /// Creates an empty board where `first_player` moves first.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            grid: Grid::new(),
            first_player,
            next_player: first_player,
            history: Vec::new(),
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gets the cell at a coordinate.
    pub fn get(&self, coordinate: Coordinate) -> Cell {
        self.grid.get(coordinate)
    }

    /// Player who moved first in this game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Player whose turn it is.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Derives the game outcome from the grid.
    ///
    /// Order: X won, O won, grid full (draw), otherwise in progress.
    pub fn status(&self) -> Outcome {
        rules::evaluate(&self.grid, self.next_player)
    }

    /// Renders the grid as plain text.
    pub fn render(&self) -> String {
        crate::render::render_grid(&self.grid)
    }

    /// Empty coordinates while the game is in progress; none once decided.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Coordinate> {
        if self.status().is_over() {
            return Vec::new();
        }
        self.grid.empty_coordinates().collect()
    }

    /// Applies a typed move, returning the resulting board.
    ///
    /// # Errors
    ///
    /// The first failing check, in order:
    /// - [`MoveError::GameAlreadyDecided`] if a player has already won
    /// - [`MoveError::CellOccupied`] if the cell holds a mark
    /// - [`MoveError::OutOfTurn`] if `player` is not next to move
    ///
    /// On error `self` is unchanged.
    #[instrument(skip(self), fields(next_player = %self.next_player))]
    pub fn apply_move(&self, coordinate: Coordinate, player: Player) -> Result<Board, MoveError> {
        let action = Move::new(player, coordinate);

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(%action, error = %e, "Move rejected");
            return Err(e);
        }

        let after = self.advance(action);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &after)?;

        debug!(%action, status = %after.status(), "Move applied");
        Ok(after)
    }

    /// Applies a move given as row, column and player symbols
    /// (`"TOP"`, `"LEFT"`, `"X"`; case-insensitive).
    ///
    /// # Errors
    ///
    /// The first failing check, in order:
    /// - [`MoveError::GameAlreadyDecided`]
    /// - [`MoveError::InvalidCoordinate`] for unknown row or column symbols
    /// - [`MoveError::InvalidPlayer`] for a symbol other than X or O
    /// - [`MoveError::CellOccupied`]
    /// - [`MoveError::OutOfTurn`]
    #[instrument(skip(self))]
    pub fn play(&self, row: &str, column: &str, player: &str) -> Result<Board, MoveError> {
        let parsed = GameUndecided::check(self)
            .and_then(|()| KnownCoordinate::parse(row, column))
            .and_then(|coordinate| Ok((coordinate, KnownPlayer::parse(player)?)));

        match parsed {
            Ok((coordinate, player)) => self.apply_move(coordinate, player),
            Err(e) => {
                warn!(row, column, player, error = %e, "Move rejected");
                Err(e)
            }
        }
    }

    /// Rebuilds a board by applying `moves` in order from an empty grid.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected move.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<Board, MoveError> {
        moves
            .iter()
            .try_fold(Board::new(first_player), |board, mov| {
                board.apply_move(mov.coordinate, mov.player)
            })
    }

    /// Unchecked transition; callers run the move contract first.
    fn advance(&self, action: Move) -> Board {
        let mut history = self.history.clone();
        history.push(action);

        Board {
            grid: self.grid.with_cell_set(action.coordinate, action.player),
            first_player: self.first_player,
            next_player: action.player.opponent(),
            history,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}
