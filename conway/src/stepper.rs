// stepper.rs - Computes the next generation into a separate buffer
//
// Reads only ever see the grid (current generation); writes only ever land in
// the `Generation` buffer. The grid is overwritten as a whole by `commit`.

use std::sync::Arc;

use log::trace;
use tokio::runtime::{Builder, Runtime};

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};
use crate::neighbors::NeighborIndex;
use crate::rules::decide_next;

/// The pending ("next") generation. Same shape as the grid it was made for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Generation {
    /// Starts as a copy of the grid's current values.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells().to_vec(),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.height && col < self.width {
            Ok(row * self.width + col)
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cells[self.offset(row, col)?])
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        let i = self.offset(row, col)?;
        Ok(&mut self.cells[i])
    }

    fn check(&self, grid: &Grid) -> Result<()> {
        if self.cells.len() == grid.len() && self.dimensions() == grid.dimensions() {
            Ok(())
        } else {
            Err(LifeError::ShapeMismatch {
                buffer: self.cells.len(),
                grid: grid.len(),
            })
        }
    }

    /// Copies the whole buffer into the grid.
    pub fn commit(&self, grid: &mut Grid) -> Result<()> {
        self.check(grid)?;
        grid.cells_mut().copy_from_slice(&self.cells);
        Ok(())
    }
}

/// Fills `next` with the generation following `grid`. The grid is untouched.
pub fn step(grid: &Grid, index: &NeighborIndex, next: &mut Generation) -> Result<()> {
    index.check(grid)?;
    next.check(grid)?;

    let current = grid.cells();
    for (offset, slot) in next.cells.iter_mut().enumerate() {
        *slot = decide_next(current[offset], index.alive_count(current, offset));
    }
    trace!("stepped {}x{} grid", grid.width(), grid.height());
    Ok(())
}

/// `step` followed by `commit`.
pub fn advance(grid: &mut Grid, index: &NeighborIndex, next: &mut Generation) -> Result<()> {
    step(grid, index, next)?;
    next.commit(grid)
}

/// Row coroutine: computes one row of the next generation from a frozen snapshot
async fn process_row(
    row: usize,
    width: usize,
    snapshot: Arc<Vec<Cell>>,
    index: Arc<NeighborIndex>,
) -> (usize, Vec<Cell>) {
    let mut row_result = Vec::with_capacity(width);
    for col in 0..width {
        let offset = row * width + col;
        let count = index.alive_count(&snapshot, offset);
        row_result.push(decide_next(snapshot[offset], count));
    }
    tokio::task::yield_now().await;  // Let the other rows run
    (row, row_result)
}

/// Runs one tokio task per row on a single-threaded runtime.
///
/// Every task reads the same immutable snapshot of the current generation, and
/// nothing is written to `next` until all of them have finished.
pub struct RowTaskStepper {
    runtime: Runtime,
}

impl RowTaskStepper {
    pub fn new() -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().build()?;
        Ok(Self { runtime })
    }

    pub fn step(&self, grid: &Grid, index: &Arc<NeighborIndex>, next: &mut Generation) -> Result<()> {
        index.check(grid)?;
        next.check(grid)?;

        let width = grid.width();
        let snapshot = Arc::new(grid.cells().to_vec());

        let rows = self.runtime.block_on(async {
            let handles: Vec<_> = (0..grid.height())
                .map(|row| tokio::spawn(process_row(row, width, Arc::clone(&snapshot), Arc::clone(index))))
                .collect();

            let mut rows = Vec::with_capacity(handles.len());
            for handle in handles {
                rows.push(handle.await?);
            }
            Ok::<_, LifeError>(rows)
        })?;

        for (row, completed) in rows {
            next.cells[row * width..(row + 1) * width].copy_from_slice(&completed);
        }
        trace!("stepped {}x{} grid in {} row tasks", width, grid.height(), grid.height());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(rows: &[&str]) -> (Grid, NeighborIndex, Generation) {
        let grid = Grid::from_rows(rows).unwrap();
        let index = NeighborIndex::for_grid(&grid);
        let next = Generation::for_grid(&grid);
        (grid, index, next)
    }

    #[test]
    fn test_step_leaves_grid_untouched() {
        let (grid, index, mut next) = setup(&[".....", "..#..", "..#..", "..#..", "....."]);
        let before = grid.clone();
        step(&grid, &index, &mut next).unwrap();
        assert_eq!(grid, before);
        assert_eq!(next.get(2, 1).unwrap(), Cell::Alive);
        assert_eq!(next.get(1, 2).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_step_is_deterministic() {
        let grid = Grid::random(30, 20, 99);
        let index = NeighborIndex::for_grid(&grid);
        let mut a = Generation::for_grid(&grid);
        let mut b = Generation::for_grid(&grid);
        step(&grid, &index, &mut a).unwrap();
        step(&grid, &index, &mut b).unwrap();
        assert_eq!(a, b);

        // A scratch buffer with stale contents gives the same result
        let mut stale = Generation::for_grid(&Grid::random(30, 20, 1));
        step(&grid, &index, &mut stale).unwrap();
        assert_eq!(a, stale);
    }

    #[test]
    fn test_reads_previous_generation_only() {
        // An in-place update would let the birth at (1,0) feed the count of
        // (1,1) in the same pass; with two buffers the row just rotates.
        let (mut grid, index, mut next) = setup(&["...", "###", "..."]);
        advance(&mut grid, &index, &mut next).unwrap();
        assert_eq!(grid, Grid::from_rows(&[".#.", ".#.", ".#."]).unwrap());
    }

    #[test]
    fn test_block_is_still_life() {
        let (mut grid, index, mut next) = setup(&["....", ".##.", ".##.", "...."]);
        let start = grid.clone();
        for _ in 0..10 {
            advance(&mut grid, &index, &mut next).unwrap();
            assert_eq!(grid, start);
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]).unwrap();
        let vertical = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).unwrap();
        let index = NeighborIndex::for_grid(&horizontal);
        let mut grid = horizontal.clone();
        let mut next = Generation::for_grid(&grid);

        advance(&mut grid, &index, &mut next).unwrap();
        assert_eq!(grid, vertical);
        advance(&mut grid, &index, &mut next).unwrap();
        assert_eq!(grid, horizontal);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // On a torus the left column would feed the right one
        let (mut grid, index, mut next) = setup(&["#...", "#...", "#...", "...."]);
        advance(&mut grid, &index, &mut next).unwrap();
        assert_eq!(grid, Grid::from_rows(&["....", "##..", "....", "...."]).unwrap());
    }

    #[test]
    fn test_topology_mismatch_rejected() {
        let grid = Grid::empty(4, 4);
        let index = NeighborIndex::build(4, 5);
        let mut next = Generation::for_grid(&grid);
        assert!(matches!(step(&grid, &index, &mut next), Err(LifeError::TopologyMismatch { .. })));
    }

    #[test]
    fn test_commit_rejects_other_shape() {
        let next = Generation::for_grid(&Grid::empty(3, 3));
        let mut grid = Grid::empty(3, 4);
        assert!(matches!(next.commit(&mut grid), Err(LifeError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_row_tasks_match_sequential() {
        let grid = Grid::random(25, 17, 2024);
        let index = Arc::new(NeighborIndex::for_grid(&grid));

        let mut sequential = Generation::for_grid(&grid);
        step(&grid, &index, &mut sequential).unwrap();

        let stepper = RowTaskStepper::new().unwrap();
        let mut tasks = Generation::for_grid(&grid);
        stepper.step(&grid, &index, &mut tasks).unwrap();

        assert_eq!(sequential, tasks);
    }

    #[test]
    fn test_row_tasks_reject_mismatch() {
        let grid = Grid::empty(4, 4);
        let index = Arc::new(NeighborIndex::build(5, 4));
        let mut next = Generation::for_grid(&grid);
        let stepper = RowTaskStepper::new().unwrap();
        assert!(stepper.step(&grid, &index, &mut next).is_err());
    }
}
