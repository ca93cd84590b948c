// raster.rs - Projects the grid into an RGBA pixel buffer

use crate::grid::{Cell, Grid};

pub const ALIVE_RGBA: [u8; 4] = [255, 255, 255, 255];
pub const DEAD_RGBA: [u8; 4] = [0, 0, 0, 255];
pub const MARKER_RGBA: [u8; 4] = [0, 0, 255, 255];   // Top-left pixel of every cell

/// Row-major RGBA8 image of the grid, `cell_size` pixels per cell side.
#[derive(Clone, Debug)]
pub struct Raster {
    width: usize,
    height: usize,
    cell_size: usize,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn for_grid(grid: &Grid, cell_size: usize) -> Self {
        let width = grid.width() * cell_size;
        let height = grid.height() * cell_size;
        let mut raster = Self {
            width,
            height,
            cell_size,
            pixels: vec![0; width * height * 4],
        };
        raster.project(grid);
        raster
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at `(x, y)`, or `None` off the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    /// Repaints every cell. The grid must have the shape this raster was made for.
    pub fn project(&mut self, grid: &Grid) {
        debug_assert_eq!(grid.width() * self.cell_size, self.width);
        debug_assert_eq!(grid.height() * self.cell_size, self.height);

        let size = self.cell_size;
        let stride = self.width * 4;
        for row in 0..grid.height() {
            let Some(cells) = grid.row(row) else { continue };
            for (col, &cell) in cells.iter().enumerate() {
                let colour = if cell == Cell::Alive { ALIVE_RGBA } else { DEAD_RGBA };
                for dy in 0..size {
                    let start = (row * size + dy) * stride + col * size * 4;
                    for px in self.pixels[start..start + size * 4].chunks_exact_mut(4) {
                        px.copy_from_slice(&colour);
                    }
                }
                let corner = row * size * stride + col * size * 4;
                self.pixels[corner..corner + 4].copy_from_slice(&MARKER_RGBA);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_colours() {
        let grid = Grid::from_rows(&["#.", ".."]).unwrap();
        let raster = Raster::for_grid(&grid, 4);
        assert_eq!((raster.width(), raster.height()), (8, 8));
        assert_eq!(raster.pixels().len(), 8 * 8 * 4);

        assert_eq!(raster.pixel(0, 0), Some(MARKER_RGBA));
        assert_eq!(raster.pixel(1, 0), Some(ALIVE_RGBA));
        assert_eq!(raster.pixel(3, 3), Some(ALIVE_RGBA));
        assert_eq!(raster.pixel(4, 0), Some(MARKER_RGBA));
        assert_eq!(raster.pixel(5, 1), Some(DEAD_RGBA));
        assert_eq!(raster.pixel(0, 4), Some(MARKER_RGBA));
        assert_eq!(raster.pixel(7, 7), Some(DEAD_RGBA));
        assert_eq!(raster.cell_size(), 4);
    }

    #[test]
    fn test_pixel_off_image() {
        let raster = Raster::for_grid(&Grid::from_rows(&["##", "##"]).unwrap(), 4);
        // Would land on (0, 5) with unchecked row-major indexing
        assert_eq!(raster.pixel(8, 4), None);
        assert_eq!(raster.pixel(0, 8), None);
        assert_eq!(raster.pixel(7, 7), Some(ALIVE_RGBA));
    }

    #[test]
    fn test_project_follows_grid() {
        let mut grid = Grid::empty(3, 2);
        let mut raster = Raster::for_grid(&grid, 2);
        assert_eq!(raster.pixel(3, 3), Some(DEAD_RGBA));

        grid.set(1, 1, Cell::Alive).unwrap();
        raster.project(&grid);
        assert_eq!(raster.pixel(3, 3), Some(ALIVE_RGBA));
        assert_eq!(raster.pixel(2, 2), Some(MARKER_RGBA));
    }
}
