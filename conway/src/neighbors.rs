// neighbors.rs - Precomputed Moore-neighborhood adjacency
//
// Built once per grid shape and reused for every generation. Each cell gets
// eight slots holding the flat offset of its neighbor, or `None` past an edge.

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// `(d_row, d_col)`
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::DownLeft => (1, -1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Current values of one cell's neighbors, `None` where the edge cuts it off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborSet([Option<Cell>; 8]);

impl NeighborSet {
    pub fn get(&self, direction: Direction) -> Option<Cell> {
        self.0[direction as usize]
    }

    pub fn present(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn alive(&self) -> usize {
        self.0.iter().flatten().filter(|c| c.is_alive()).count()
    }
}

#[derive(Clone, Debug)]
pub struct NeighborIndex {
    width: usize,
    height: usize,
    links: Vec<[Option<usize>; 8]>,
}

impl NeighborIndex {
    pub fn build(width: usize, height: usize) -> Self {
        let mut links = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let mut slots = [None; 8];
                for (slot, dir) in slots.iter_mut().zip(Direction::ALL) {
                    let (dr, dc) = dir.offset();
                    let r = row.checked_add_signed(dr).filter(|&r| r < height);
                    let c = col.checked_add_signed(dc).filter(|&c| c < width);
                    if let (Some(r), Some(c)) = (r, c) {
                        *slot = Some(r * width + c);
                    }
                }
                links.push(slots);
            }
        }
        Self { width, height, links }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::build(grid.width(), grid.height())
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Raw adjacency of the cell at `offset`.
    pub fn links(&self, offset: usize) -> &[Option<usize>; 8] {
        &self.links[offset]
    }

    pub fn matches(&self, grid: &Grid) -> bool {
        self.dimensions() == grid.dimensions()
    }

    pub fn check(&self, grid: &Grid) -> Result<()> {
        if self.matches(grid) {
            Ok(())
        } else {
            Err(LifeError::TopologyMismatch {
                index_width: self.width,
                index_height: self.height,
                grid_width: grid.width(),
                grid_height: grid.height(),
            })
        }
    }

    pub fn neighbors_of(&self, grid: &Grid, row: usize, col: usize) -> Result<NeighborSet> {
        self.check(grid)?;
        let offset = grid.offset(row, col)?;
        let cells = grid.cells();
        Ok(NeighborSet(self.links[offset].map(|link| link.map(|i| cells[i]))))
    }

    /// Live neighbors of the cell at `offset`; absent neighbors are skipped.
    #[inline]
    pub fn alive_count(&self, cells: &[Cell], offset: usize) -> u8 {
        self.links[offset]
            .iter()
            .flatten()
            .filter(|&&i| cells[i].is_alive())
            .count() as u8
    }
}
