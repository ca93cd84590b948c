// rules.rs - B3/S23

use crate::grid::Cell;

/// Next state of one cell from its state and live-neighbor count.
#[inline]
pub fn decide_next(current: Cell, alive_neighbors: u8) -> Cell {
    match (current, alive_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,   // Survival
        (Cell::Dead, 3)                     => Cell::Alive,   // Birth
        _                                   => Cell::Dead,    // Death or stays dead
    }
}
