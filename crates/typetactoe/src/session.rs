//! Registry of concurrently hosted games.
//!
//! Each game sits behind its own lock, so moves submitted to the same game
//! are applied one at a time while separate games never contend.

use crate::{Board, Coordinate, MoveError, Outcome, Player};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a hosted game.
pub type GameId = String;

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// No game with this id.
    #[display("Game {} not found", id)]
    NotFound {
        /// Requested id.
        id: GameId,
    },
    /// A game with this id already exists.
    #[display("Game {} already exists", id)]
    AlreadyExists {
        /// Requested id.
        id: GameId,
    },
    /// The move was rejected by the board.
    #[display("{}", _0)]
    Move(MoveError),
    /// A thread panicked while holding a lock.
    #[display("Lock poisoned while accessing {}", what)]
    Poisoned {
        /// Which lock.
        what: String,
    },
}

type SharedBoard = Arc<Mutex<Board>>;

/// Hosts many games, each independently lockable.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    games: Arc<Mutex<HashMap<GameId, SharedBoard>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session registry");
        Self::default()
    }

    fn games(&self) -> Result<MutexGuard<'_, HashMap<GameId, SharedBoard>>, SessionError> {
        self.games.lock().map_err(|_| SessionError::Poisoned {
            what: "game registry".to_string(),
        })
    }

    fn handle(&self, id: &str) -> Result<SharedBoard, SessionError> {
        self.games()?
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound { id: id.to_string() })
    }

    fn lock_board<'a>(
        id: &str,
        handle: &'a SharedBoard,
    ) -> Result<MutexGuard<'a, Board>, SessionError> {
        handle.lock().map_err(|_| SessionError::Poisoned {
            what: format!("game {id}"),
        })
    }

    /// Starts a new empty game under `id`.
    #[instrument(skip(self))]
    pub fn create(
        &self,
        id: impl Into<GameId> + std::fmt::Debug,
        first_player: Player,
    ) -> Result<GameId, SessionError> {
        let id = id.into();
        let mut games = self.games()?;

        if games.contains_key(&id) {
            warn!(game_id = %id, "Game already exists");
            return Err(SessionError::AlreadyExists { id });
        }

        games.insert(id.clone(), Arc::new(Mutex::new(Board::new(first_player))));
        info!(game_id = %id, %first_player, "Created game");
        Ok(id)
    }

    /// Returns a snapshot of the game's board.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<Board, SessionError> {
        let handle = self.handle(id)?;
        let board = Self::lock_board(id, &handle)?;
        Ok(board.clone())
    }

    /// Applies a typed move to a hosted game, returning its new outcome.
    ///
    /// Validation and replacement happen under the game's lock, so
    /// concurrent callers observe either the old board or the new one.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        id: &str,
        coordinate: Coordinate,
        player: Player,
    ) -> Result<Outcome, SessionError> {
        self.update(id, |board| board.apply_move(coordinate, player))
    }

    /// Applies a move given as symbols to a hosted game.
    #[instrument(skip(self))]
    pub fn play(
        &self,
        id: &str,
        row: &str,
        column: &str,
        player: &str,
    ) -> Result<Outcome, SessionError> {
        self.update(id, |board| board.play(row, column, player))
    }

    fn update(
        &self,
        id: &str,
        transition: impl FnOnce(&Board) -> Result<Board, MoveError>,
    ) -> Result<Outcome, SessionError> {
        let handle = self.handle(id)?;
        let mut board = Self::lock_board(id, &handle)?;

        let next = transition(&board).map_err(SessionError::Move)?;
        *board = next;

        let outcome = board.status();
        debug!(game_id = id, %outcome, "Game updated");
        Ok(outcome)
    }

    /// Removes a game, returning its final board.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<Option<Board>, SessionError> {
        let removed = self.games()?.remove(id);
        match removed {
            Some(handle) => {
                info!(game_id = id, "Removed game");
                let board = Self::lock_board(id, &handle)?.clone();
                Ok(Some(board))
            }
            None => Ok(None),
        }
    }

    /// Lists hosted game ids in sorted order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<GameId>, SessionError> {
        let mut ids: Vec<_> = self.games()?.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed games");
        Ok(ids)
    }
}
