// simulation.rs - Engine state owned by the tick driver
//
// Holds everything one running game needs and nothing about windows. The
// driver samples input, packs it into a `TickInput` and calls `tick` once per
// discrete tick.

use std::sync::Arc;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{LifeConfig, StepMode};
use crate::editor::{pick_cell, toggle};
use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::neighbors::NeighborIndex;
use crate::patterns::Pattern;
use crate::raster::Raster;
use crate::stepper::{step, Generation, RowTaskStepper};
use crate::viewport::{Viewport, ZoomEvent};

/// One tick's worth of already-debounced input. Points are raster pixels.
#[derive(Clone, Debug, Default)]
pub struct TickInput {
    pub pointer: Option<(f32, f32)>,
    pub click: Option<(f32, f32)>,
    pub toggle_pause: bool,
    pub restart: bool,
    /// Advance one generation even though paused.
    pub step_once: bool,
    pub zoom: Option<ZoomEvent>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub stepped: bool,
    pub edited: bool,
    pub zoomed: bool,
    pub restarted: bool,
}

pub struct Simulation {
    config: LifeConfig,
    seed: u64,
    seeds: StdRng,
    grid: Grid,
    index: Arc<NeighborIndex>,
    pending: Generation,
    edits: Vec<(usize, usize)>,     // Toggled since the last commit
    raster: Raster,
    viewport: Viewport,
    row_tasks: Option<RowTaskStepper>,
    paused: bool,
    generation: u64,
}

impl Simulation {
    pub fn new(config: LifeConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut seeds = StdRng::seed_from_u64(seed);
        let grid_seed = seeds.random();
        let grid = Grid::random(config.columns, config.rows, grid_seed);

        let row_tasks = match config.step_mode {
            StepMode::Sequential => None,
            StepMode::RowTasks => Some(
                RowTaskStepper::new()
                    .map_err(|e| LifeError::InvalidConfig(format!("cannot start row-task runtime: {}", e)))?,
            ),
        };

        info!(
            "new {}x{} simulation, seed {}, {:?} stepping",
            config.columns, config.rows, seed, config.step_mode
        );

        Ok(Self {
            index: Arc::new(NeighborIndex::for_grid(&grid)),
            pending: Generation::for_grid(&grid),
            edits: Vec::new(),
            raster: Raster::for_grid(&grid, config.cell_size),
            viewport: Viewport::new(config.base_view_size, config.zoom_step),
            paused: config.start_paused,
            generation: 0,
            seed,
            seeds,
            grid,
            row_tasks,
            config,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Seed the simulation was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pending(&self) -> &Generation {
        &self.pending
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Full re-initialization with a fresh random board.
    pub fn restart(&mut self) {
        let grid_seed = self.seeds.random();
        self.replace_grid(Grid::random(self.config.columns, self.config.rows, grid_seed));
        info!("restarted with board seed {}", grid_seed);
    }

    /// Clears the board and stamps `pattern` in its center.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<()> {
        let mut grid = Grid::empty(self.config.columns, self.config.rows);
        pattern.stamp_centered(&mut grid)?;
        self.replace_grid(grid);
        info!("loaded pattern {}", pattern.name);
        Ok(())
    }

    fn replace_grid(&mut self, grid: Grid) {
        self.index = Arc::new(NeighborIndex::for_grid(&grid));
        self.pending = Generation::for_grid(&grid);
        self.edits.clear();
        self.raster = Raster::for_grid(&grid, self.config.cell_size);
        self.grid = grid;
        self.generation = 0;
    }

    /// Flips the pending value under a raster pixel. Returns whether a cell
    /// was hit. The flip survives a step computed before the next commit.
    pub fn edit_at(&mut self, x: f32, y: f32) -> Result<bool> {
        let (w, h) = self.grid.dimensions();
        match pick_cell(x, y, self.raster.cell_size(), w, h) {
            Some((row, col)) => {
                toggle(&mut self.pending, row, col)?;
                self.edits.push((row, col));
                Ok(true)
            }
            None => {
                warn!("ignoring click at ({:.1}, {:.1}) outside the grid", x, y);
                Ok(false)
            }
        }
    }

    /// Computes the next generation into the pending buffer, then replays
    /// the edits made since the last commit on top of it.
    fn step_pending(&mut self) -> Result<()> {
        match &self.row_tasks {
            Some(stepper) => stepper.step(&self.grid, &self.index, &mut self.pending)?,
            None => step(&self.grid, &self.index, &mut self.pending)?,
        }
        for &(row, col) in &self.edits {
            toggle(&mut self.pending, row, col)?;
        }
        Ok(())
    }

    /// Publishes the pending buffer as the current generation.
    pub fn commit(&mut self) -> Result<()> {
        self.pending.commit(&mut self.grid)?;
        self.edits.clear();
        self.raster.project(&self.grid);
        Ok(())
    }

    /// Advances one generation regardless of the pause flag.
    pub fn advance(&mut self) -> Result<()> {
        self.step_pending()?;
        self.generation += 1;
        self.commit()
    }

    pub fn tick(&mut self, input: &TickInput) -> Result<TickOutcome> {
        let mut outcome = TickOutcome::default();

        if input.restart {
            self.restart();
            outcome.restarted = true;
        }

        if !self.paused || input.step_once {
            self.step_pending()?;
            self.generation += 1;
            outcome.stepped = true;
        }

        if let Some((x, y)) = input.click {
            outcome.edited = self.edit_at(x, y)?;
        }

        self.commit()?;

        if let Some(event) = input.zoom {
            let focal = input.pointer.unwrap_or((0.0, 0.0));
            outcome.zoomed = self.viewport.zoom(event, focal);
        }

        // Takes effect on the next tick
        if input.toggle_pause {
            self.paused = !self.paused;
            info!("{}", if self.paused { "paused" } else { "resumed" });
        }

        Ok(outcome)
    }
}
