// main.rs - Windowed Game of Life with a zoomable raster view
// Engine lives in the `conway` crate; this binary only samples input and draws.

use std::time::{Duration, Instant};

use clap::Parser;
use conway::config::{DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_ROWS};
use conway::{patterns, LifeConfig, LifeError, Simulation, StepMode, TickInput};
use eframe::egui;
use thiserror::Error;

mod ui;

#[derive(Parser, Debug)]
#[command(name = "conway_view", version, about = "Conway's Game of Life with a zoomable view")]
struct Args {
    /// Cells per row
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Cells per column
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Pixels per cell side
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: usize,

    /// Seed for the initial board and every restart
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 60)]
    tick_ms: u64,

    /// Start from a named pattern instead of a random board
    #[arg(long)]
    pattern: Option<String>,

    /// Compute each row as its own tokio task
    #[arg(long)]
    row_tasks: bool,

    /// Start paused
    #[arg(long)]
    paused: bool,
}

impl Args {
    fn to_config(&self) -> LifeConfig {
        LifeConfig {
            columns: self.columns,
            rows: self.rows,
            cell_size: self.cell_size,
            tick_interval: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            step_mode: if self.row_tasks { StepMode::RowTasks } else { StepMode::Sequential },
            start_paused: self.paused,
            ..LifeConfig::default()
        }
    }
}

#[derive(Debug, Error)]
enum ViewError {
    #[error(transparent)]
    Life(#[from] LifeError),

    #[error("unknown pattern {0:?}, expected one of: {1}")]
    UnknownPattern(String, String),

    #[error("window error: {0}")]
    Window(String),
}

fn main() -> Result<(), ViewError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut simulation = Simulation::new(args.to_config())?;

    if let Some(name) = &args.pattern {
        let pattern = patterns::find(name).ok_or_else(|| {
            let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
            ViewError::UnknownPattern(name.clone(), known.join(", "))
        })?;
        simulation.load_pattern(pattern)?;
    }

    let base = simulation.viewport().base_size() as f32;
    let (raster_w, raster_h) = simulation.config().raster_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([base.max(raster_w as f32) + 20.0, base.max(raster_h as f32) + 90.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::new(simulation))),
    )
    .map_err(|e| ViewError::Window(e.to_string()))
}

/// Driver state: the engine plus everything that only matters to the window.
pub struct LifeApp {
    simulation: Simulation,
    texture: Option<egui::TextureHandle>,
    texture_dirty: bool,

    input: TickInput,           // Accumulated until the next tick
    fullscreen: bool,

    last_update: Instant,
    update_interval: Duration,

    tps: f32,
    ticks_in_window: u32,
    window_start: Instant,
}

impl LifeApp {
    fn new(simulation: Simulation) -> Self {
        let update_interval = simulation.config().tick_interval;
        Self {
            simulation,
            texture: None,
            texture_dirty: true,
            input: TickInput::default(),
            fullscreen: false,
            last_update: Instant::now(),
            update_interval,
            tps: 0.0,
            ticks_in_window: 0,
            window_start: Instant::now(),
        }
    }
}
