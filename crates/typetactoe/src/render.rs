//! Plain-text rendering of the grid.

use crate::{Column, Coordinate, Grid, Row};

/// Separator drawn between rows.
pub const ROW_SEPARATOR: &str = "---+---+---";

/// Renders one row as `" c | c | c "`.
fn render_row(grid: &Grid, row: Row) -> String {
    let [left, center, right] =
        Column::ALL.map(|column| grid.get(Coordinate::new(row, column)).symbol());
    format!(" {left} | {center} | {right} ")
}

/// Renders the grid as three rows separated by [`ROW_SEPARATOR`] lines.
///
/// ```text
///  X | O |
/// ---+---+---
///    | X |
/// ---+---+---
///    |   | O
/// ```
pub fn render_grid(grid: &Grid) -> String {
    let separator = format!("\n{ROW_SEPARATOR}\n");
    Row::ALL
        .map(|row| render_row(grid, row))
        .join(separator.as_str())
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_grid(self))
    }
}
