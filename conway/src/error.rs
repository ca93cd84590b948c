// error.rs - Error type shared by the whole engine

use thiserror::Error;

/// Everything the engine can reject. All variants are contract violations
/// by the caller; the engine itself never fails half-way through a step.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("neighbor index was built for {index_width}x{index_height} but the grid is {grid_width}x{grid_height}")]
    TopologyMismatch {
        index_width: usize,
        index_height: usize,
        grid_width: usize,
        grid_height: usize,
    },

    #[error("generation buffer holds {buffer} cells but the grid holds {grid}")]
    ShapeMismatch { buffer: usize, grid: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LifeError>;
