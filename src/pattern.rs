use crate::GridCoord;
use crate::cell::CellState;
use crate::grid::Grid;
use crate::grid::GridError;

/// A fixed arrangement of live cells, given as offsets from an origin
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

/// ```notrust
/// .#.
/// ..#
/// ###
/// ```
///
/// The origin is the top cell, so the pattern reaches one column to the left of it. Moves one
/// cell right and one cell down every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 0), (-1, 2), (0, 2), (1, 1), (1, 2)],
};

/// Where the board's starting glider goes
pub const GLIDER_ORIGIN: (GridCoord, GridCoord) = (4, 5);

/// Still life: every cell has exactly 3 neighbors
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Period 2 oscillator, starting horizontal
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

impl Pattern {
    /// Set the pattern's cells alive with its origin at `(x, y)`. Cells already alive stay alive.
    ///
    /// Fails without touching the grid if any cell would land outside of it.
    pub fn stamp(&self, grid: &mut Grid, x: GridCoord, y: GridCoord) -> Result<(), GridError> {
        let mut placed = Vec::with_capacity(self.cells.len());

        for &(dx, dy) in self.cells {
            match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                (Some(px), Some(py)) if Grid::contains(px, py) => placed.push((px, py)),
                _ => {
                    return Err(GridError::OutOfBounds {
                        x: x.saturating_add_signed(dx),
                        y: y.saturating_add_signed(dy),
                    });
                }
            }
        }

        for (px, py) in placed {
            grid.set(px, py, CellState::Alive)?;
        }

        Ok(())
    }
}
