use std::fmt;
use std::ops::Index;
use std::ops::IndexMut;

use thiserror::Error;

use crate::GridCoord;
use crate::HEIGHT;
use crate::WIDTH;
use crate::cell::CellState;

/// Relative positions of the 8 cells surrounding a cell.
///
///   (-1, -1) (0, -1) (1, -1)
///   (-1,  0)         (1,  0)
///   (-1,  1) (0,  1) (1,  1)
///
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({x}, {y}) is outside of the {WIDTH}x{HEIGHT} grid")]
    OutOfBounds { x: GridCoord, y: GridCoord },
}

/// A fixed `WIDTH` x `HEIGHT` board, addressed by `(column, row)`.
///
/// Cells are stored column-major, so `cells[x][y]` is column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[CellState; HEIGHT]; WIDTH],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// A grid where every cell is dead
    pub const fn empty() -> Self {
        Self {
            cells: [[CellState::Dead; HEIGHT]; WIDTH],
        }
    }

    pub const fn contains(x: GridCoord, y: GridCoord) -> bool {
        x < WIDTH && y < HEIGHT
    }

    pub fn get(&self, x: GridCoord, y: GridCoord) -> Option<CellState> {
        if !Self::contains(x, y) {
            return None;
        }

        Some(self.cells[x][y])
    }

    /// Whether the cell is alive. Anything outside the grid counts as dead.
    pub fn is_alive(&self, x: GridCoord, y: GridCoord) -> bool {
        self.get(x, y).is_some_and(CellState::is_alive)
    }

    pub fn set(&mut self, x: GridCoord, y: GridCoord, state: CellState) -> Result<(), GridError> {
        if !Self::contains(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }

        self.cells[x][y] = state;

        Ok(())
    }

    /// Flip a cell, returning its new state
    pub fn toggle(&mut self, x: GridCoord, y: GridCoord) -> Result<CellState, GridError> {
        if !Self::contains(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }

        let cell = &mut self.cells[x][y];
        *cell = cell.toggled();

        Ok(*cell)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells = [[CellState::Dead; HEIGHT]; WIDTH];
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    pub fn any_alive(&self) -> bool {
        self.cells.iter().flatten().any(|cell| cell.is_alive())
    }

    /// Count the alive cells around `(x, y)`.
    ///
    /// Neighbors that would fall outside of the grid are not counted. There is no wraparound, so
    /// a corner cell only ever looks at 3 cells and an edge cell at 5.
    pub fn live_neighbors(&self, x: GridCoord, y: GridCoord) -> u8 {
        let mut n = 0;

        for (dx, dy) in NEIGHBORHOOD {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };

            if self.is_alive(nx, ny) {
                n += 1;
            }
        }

        n
    }

    /// Every cell along with its coordinates, column by column
    pub fn cells(&self) -> impl Iterator<Item = (GridCoord, GridCoord, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, &state)| (x, y, state))
        })
    }
}

/// Panics if `(x, y)` is outside of the grid, like indexing an array would
impl Index<(GridCoord, GridCoord)> for Grid {
    type Output = CellState;

    fn index(&self, (x, y): (GridCoord, GridCoord)) -> &Self::Output {
        &self.cells[x][y]
    }
}

impl IndexMut<(GridCoord, GridCoord)> for Grid {
    fn index_mut(&mut self, (x, y): (GridCoord, GridCoord)) -> &mut Self::Output {
        &mut self.cells[x][y]
    }
}

/// One line per row, `#` for alive cells and `.` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT {
            if y > 0 {
                writeln!(f)?;
            }

            for x in 0..WIDTH {
                let c = if self.cells[x][y].is_alive() { '#' } else { '.' };
                write!(f, "{c}")?;
            }
        }

        Ok(())
    }
}
