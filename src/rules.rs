use crate::cell::CellState;

/// # Representation
/// Life rules are represented as a pair of bitmasks, where bit `i` is on if `i` live neighbors
/// cause a birth (for `BIRTHS`) or let a live cell survive (for `SURVIVALS`).
///
/// ```notrust
/// b3:   0000_0000_0000_1000
/// s23:  0000_0000_0000_1100
/// ```
///
/// Only Conway's rules are supported.
///
/// See: https://conwaylife.com/wiki/Rulestring
const BIRTHS: u16 = 1 << 3;
const SURVIVALS: u16 = (1 << 2) | (1 << 3);

/// Compute the next state of a cell given how many of its neighbors are alive.
///
/// 1. A live cell with fewer than two live neighbors dies.
/// 2. A live cell with more than three live neighbors dies.
/// 3. A live cell with two or three live neighbors lives on.
/// 4. A dead cell with exactly three live neighbors becomes alive.
pub fn next_state(cell: CellState, live_neighbors: u8) -> CellState {
    // a cell has at most 8 neighbors, anything past that can't be in the masks
    if live_neighbors > 8 {
        return CellState::Dead;
    }

    let n = 1u16 << live_neighbors;

    match cell {
        CellState::Alive if n & SURVIVALS == 0 => CellState::Dead,
        CellState::Dead if n & BIRTHS == n => CellState::Alive,
        _ => cell,
    }
}
