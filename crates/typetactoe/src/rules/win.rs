//! Win detection logic for tic-tac-toe.

use crate::types::at;
use crate::{Cell, Column, Coordinate, Grid, Player, Row};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 triples of coordinates that wins when owned by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Coordinate; 3]);

impl Line {
    /// The 8 canonical lines: 3 rows, 3 columns, 2 diagonals.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([
            at(Row::Top, Column::Left),
            at(Row::Top, Column::Center),
            at(Row::Top, Column::Right),
        ]),
        Line([
            at(Row::Middle, Column::Left),
            at(Row::Middle, Column::Center),
            at(Row::Middle, Column::Right),
        ]),
        Line([
            at(Row::Bottom, Column::Left),
            at(Row::Bottom, Column::Center),
            at(Row::Bottom, Column::Right),
        ]),
        // Columns
        Line([
            at(Row::Top, Column::Left),
            at(Row::Middle, Column::Left),
            at(Row::Bottom, Column::Left),
        ]),
        Line([
            at(Row::Top, Column::Center),
            at(Row::Middle, Column::Center),
            at(Row::Bottom, Column::Center),
        ]),
        Line([
            at(Row::Top, Column::Right),
            at(Row::Middle, Column::Right),
            at(Row::Bottom, Column::Right),
        ]),
        // Diagonals
        Line([
            at(Row::Top, Column::Left),
            at(Row::Middle, Column::Center),
            at(Row::Bottom, Column::Right),
        ]),
        Line([
            at(Row::Top, Column::Right),
            at(Row::Middle, Column::Center),
            at(Row::Bottom, Column::Left),
        ]),
    ];

    /// The three coordinates of this line.
    pub fn cells(&self) -> [Coordinate; 3] {
        self.0
    }

    /// Checks whether every cell of the line holds `player`'s mark.
    pub fn is_owned_by(&self, grid: &Grid, player: Player) -> bool {
        self.0
            .iter()
            .all(|coord| grid.get(*coord) == Cell::Occupied(player))
    }
}

/// Checks if `player` has three in a row on any line.
#[instrument(level = "trace", skip(grid))]
pub fn has_won(grid: &Grid, player: Player) -> bool {
    Line::ALL.iter().any(|line| line.is_owned_by(grid, player))
}

/// Returns the winning player, if any.
///
/// X is checked before O. A grid reached through legal play never
/// has lines for both players.
pub fn winner(grid: &Grid) -> Option<Player> {
    Player::ALL.into_iter().find(|p| has_won(grid, *p))
}

/// Returns the first completed line, if any.
pub fn winning_line(grid: &Grid) -> Option<Line> {
    Line::ALL.into_iter().find(|line| {
        grid.get(line.0[0])
            .occupant()
            .is_some_and(|p| line.is_owned_by(grid, p))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(player: Player, coords: &[Coordinate]) -> Grid {
        coords
            .iter()
            .fold(Grid::new(), |grid, c| grid.with_cell_set(*c, player))
    }

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = Grid::new();
        assert_eq!(winner(&grid), None);
        assert!(!has_won(&grid, Player::X));
        assert!(!has_won(&grid, Player::O));
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for player in Player::ALL {
            for line in Line::ALL {
                let grid = grid_with(player, &line.cells());
                assert!(has_won(&grid, player), "{player} should win on {line:?}");
                assert!(!has_won(&grid, player.opponent()));
                assert_eq!(winning_line(&grid), Some(line));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid = grid_with(
            Player::X,
            &[at(Row::Top, Column::Left), at(Row::Top, Column::Center)],
        );
        assert_eq!(winner(&grid), None);
        assert_eq!(winning_line(&grid), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let grid = Grid::new()
            .with_cell_set(at(Row::Top, Column::Left), Player::X)
            .with_cell_set(at(Row::Top, Column::Center), Player::O)
            .with_cell_set(at(Row::Top, Column::Right), Player::X);
        assert_eq!(winner(&grid), None);
    }
}
