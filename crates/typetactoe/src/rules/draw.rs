//! Draw detection logic for tic-tac-toe.

use crate::Grid;
use tracing::instrument;

/// Checks if the grid is full (all cells occupied).
///
/// A full grid with no winner is a draw; see [`super::evaluate`].
#[instrument(level = "trace", skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|c| !c.is_empty())
}
