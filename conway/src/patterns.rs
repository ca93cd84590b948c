// patterns.rs - Named seed patterns, as offsets from their top-left corner

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// `(rows, cols)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }

    /// Sets the pattern's cells alive with its top-left corner at `(row, col)`.
    /// Nothing is written if any cell would land off the grid.
    pub fn stamp(&self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = self.extent();
        if rows > 0 {
            let last_row = row.checked_add(rows - 1);
            let last_col = col.checked_add(cols - 1);
            match (last_row, last_col) {
                (Some(r), Some(c)) => {
                    grid.offset(r, c)?;
                }
                _ => {
                    return Err(LifeError::OutOfBounds {
                        row,
                        col,
                        width: grid.width(),
                        height: grid.height(),
                    });
                }
            }
        }
        for &(r, c) in self.cells {
            grid.set(row + r, col + c, Cell::Alive)?;
        }
        Ok(())
    }

    /// Stamps the pattern in the middle of the grid.
    pub fn stamp_centered(&self, grid: &mut Grid) -> Result<()> {
        let (rows, cols) = self.extent();
        let row = grid.height().saturating_sub(rows) / 2;
        let col = grid.width().saturating_sub(cols) / 2;
        self.stamp(grid, row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::NeighborIndex;
    use crate::stepper::{advance, Generation};

    fn run(grid: &mut Grid, generations: usize) {
        let index = NeighborIndex::for_grid(grid);
        let mut next = Generation::for_grid(grid);
        for _ in 0..generations {
            advance(grid, &index, &mut next).unwrap();
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("glider").unwrap().name, "Glider");
        assert_eq!(find("GOSPER GLIDER GUN").unwrap().cells.len(), 36);
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn test_stamp_out_of_bounds_writes_nothing() {
        let mut grid = Grid::empty(10, 10);
        let pulsar = find("pulsar").unwrap();
        assert!(pulsar.stamp(&mut grid, 0, 0).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_stamp_at_huge_origin_fails() {
        let mut grid = Grid::empty(10, 10);
        let glider = find("glider").unwrap();
        assert!(matches!(
            glider.stamp(&mut grid, usize::MAX, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(glider.stamp(&mut grid, 0, usize::MAX - 1).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_r_pentomino_grows() {
        let mut grid = Grid::empty(20, 20);
        let pentomino = find("r-pentomino").unwrap();
        assert_eq!(pentomino.extent(), (3, 3));
        pentomino.stamp_centered(&mut grid).unwrap();
        assert_eq!(grid.population(), 5);
        run(&mut grid, 1);
        assert_eq!(grid.population(), 6);
    }

    #[test]
    fn test_isolated_block_never_changes() {
        let mut grid = Grid::empty(8, 8);
        find("block").unwrap().stamp(&mut grid, 3, 3).unwrap();
        let start = grid.clone();
        run(&mut grid, 25);
        assert_eq!(grid, start);
    }

    #[test]
    fn test_blinker_period_two() {
        let mut grid = Grid::empty(9, 9);
        find("blinker").unwrap().stamp_centered(&mut grid).unwrap();
        let start = grid.clone();

        run(&mut grid, 1);
        assert_ne!(grid, start);
        assert_eq!(grid.get(3, 4).unwrap(), Cell::Alive);
        assert_eq!(grid.get(4, 4).unwrap(), Cell::Alive);
        assert_eq!(grid.get(5, 4).unwrap(), Cell::Alive);
        assert_eq!(grid.population(), 3);

        run(&mut grid, 1);
        assert_eq!(grid, start);
    }

    #[test]
    fn test_pulsar_period_three() {
        let mut grid = Grid::empty(17, 17);
        find("pulsar").unwrap().stamp(&mut grid, 2, 2).unwrap();
        let start = grid.clone();
        run(&mut grid, 3);
        assert_eq!(grid, start);
    }

    #[test]
    fn test_glider_translates() {
        let mut grid = Grid::empty(12, 12);
        let glider = find("glider").unwrap();
        glider.stamp(&mut grid, 1, 1).unwrap();

        let mut expected = Grid::empty(12, 12);
        glider.stamp(&mut expected, 2, 2).unwrap();

        run(&mut grid, 4);
        assert_eq!(grid, expected);
    }
}
