//! The 3x3 grid of cells.

use crate::{Cell, Coordinate, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe grid.
///
/// Every coordinate maps to exactly one cell. The grid is a `Copy` value:
/// changing a cell produces a new grid and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Grid {
    /// Creates a new empty grid.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coordinate: Coordinate) -> Cell {
        self.cells[coordinate.to_index()]
    }

    /// Returns a copy of this grid with one cell marked by `player`.
    ///
    /// The caller is responsible for checking that the cell is empty;
    /// the board's move contract does so before calling this.
    #[instrument(level = "trace", skip(self))]
    pub fn with_cell_set(&self, coordinate: Coordinate, player: Player) -> Self {
        let mut cells = self.cells;
        cells[coordinate.to_index()] = Cell::Occupied(player);
        Self { cells }
    }

    /// Checks if the cell at a coordinate is empty.
    pub fn is_empty_at(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells marked by `player`.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Empty coordinates in row-major order.
    pub fn empty_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::ALL
            .into_iter()
            .filter(|coord| self.is_empty_at(*coord))
    }
}
