// config.rs - Tunable parameters for a simulation run

use std::time::Duration;

use crate::error::{LifeError, Result};
use crate::viewport::{BASE_VIEW_SIZE, ZOOM_STEP};

pub const DEFAULT_COLUMNS: usize = 80;                // 800px wide at the default cell size
pub const DEFAULT_ROWS: usize = 80;
pub const DEFAULT_CELL_SIZE: usize = 10;              // Pixels per cell side
pub const DEFAULT_TICK: Duration = Duration::from_millis(60);

/// How a generation is computed. Both modes give identical results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepMode {
    #[default]
    Sequential,
    /// One cooperative tokio task per row, reading a frozen snapshot.
    RowTasks,
}

#[derive(Clone, Debug)]
pub struct LifeConfig {
    pub columns: usize,
    pub rows: usize,
    pub cell_size: usize,
    pub base_view_size: u32,
    pub zoom_step: u32,
    pub tick_interval: Duration,
    /// `None` draws a fresh seed from the thread RNG.
    pub seed: Option<u64>,
    pub step_mode: StepMode,
    pub start_paused: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            base_view_size: BASE_VIEW_SIZE,
            zoom_step: ZOOM_STEP,
            tick_interval: DEFAULT_TICK,
            seed: None,
            step_mode: StepMode::default(),
            start_paused: false,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(LifeError::InvalidConfig(format!(
                "grid must have at least one cell, got {}x{}",
                self.columns, self.rows
            )));
        }
        if self.cell_size == 0 {
            return Err(LifeError::InvalidConfig("cell size must be positive".into()));
        }
        if self.zoom_step == 0 || self.zoom_step >= self.base_view_size {
            return Err(LifeError::InvalidConfig(format!(
                "zoom step {} must be positive and smaller than the base view size {}",
                self.zoom_step, self.base_view_size
            )));
        }
        Ok(())
    }

    /// Raster size in pixels.
    pub fn raster_size(&self) -> (usize, usize) {
        (self.columns * self.cell_size, self.rows * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.raster_size(), (800, 800));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = LifeConfig { columns: 0, ..LifeConfig::default() };
        assert!(matches!(config.validate(), Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zoom_step_larger_than_view() {
        let config = LifeConfig { zoom_step: 1000, ..LifeConfig::default() };
        assert!(config.validate().is_err());

        let config = LifeConfig { cell_size: 0, ..LifeConfig::default() };
        assert!(config.validate().is_err());
    }
}
