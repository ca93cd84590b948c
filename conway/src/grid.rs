// grid.rs - Grid types for Conway's Game of Life

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LifeError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn flipped(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Row-major `width x height` board. The dimensions never change once built;
/// the cell storage is the authoritative current generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Every cell drawn independently, 50/50 alive or dead.
    pub fn random(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..width * height)
            .map(|_| Cell::from(rng.random_bool(0.5)))
            .collect();
        Self { width, height, cells }
    }

    /// Builds a grid from text rows, `#` or `O` marking live cells.
    /// All rows must be the same length.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(LifeError::InvalidConfig(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }
            cells.extend(line.chars().map(|c| Cell::from(c == '#' || c == 'O')));
        }
        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Flat offset of `(row, col)`, or `OutOfBounds`.
    pub fn offset(&self, row: usize, col: usize) -> Result<usize> {
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

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let i = self.offset(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row slice, for rendering and tests.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }
}
