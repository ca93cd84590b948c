// editor.rs - Click-to-toggle editing of the pending generation

use crate::error::Result;
use crate::grid::Cell;
use crate::stepper::Generation;

/// Flips one cell of the pending generation and returns its new value.
/// The change becomes visible once the buffer is committed.
pub fn toggle(pending: &mut Generation, row: usize, col: usize) -> Result<Cell> {
    let cell = pending.cell_mut(row, col)?;
    *cell = cell.flipped();
    Ok(*cell)
}

/// Converts a raster pixel into `(row, col)`, or `None` when the point lies
/// outside the grid's rendered area.
pub fn pick_cell(x: f32, y: f32, cell_size: usize, width: usize, height: usize) -> Option<(usize, usize)> {
    if !(x >= 0.0 && y >= 0.0) || cell_size == 0 {
        return None;
    }
    let col = x as usize / cell_size;
    let row = y as usize / cell_size;
    (row < height && col < width).then_some((row, col))
}
