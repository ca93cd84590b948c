//! Conway's Game of Life on a fixed, bounded grid.
//!
//! The engine keeps two buffers: the [`Grid`] holds the current generation and
//! a [`Generation`] receives the next one. [`Simulation`] bundles them with the
//! neighbor table, the raster image and the zoom viewport for a tick driver.

pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod raster;
pub mod rules;
pub mod simulation;
pub mod stepper;
pub mod viewport;

pub use config::{LifeConfig, StepMode};
pub use error::{LifeError, Result};
pub use grid::{Cell, Grid};
pub use neighbors::{Direction, NeighborIndex, NeighborSet};
pub use raster::Raster;
pub use rules::decide_next;
pub use simulation::{Simulation, TickInput, TickOutcome};
pub use stepper::{advance, step, Generation, RowTaskStepper};
pub use viewport::{ViewRect, Viewport, ZoomEvent};
