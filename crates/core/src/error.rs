//! Error types for the core crate.

use thiserror::Error;

/// Why a set of cells could not be committed to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i16, col: i16 },

    #[error("cell ({row}, {col}) is already occupied")]
    Collision { row: i16, col: i16 },
}

/// Rejected [`GameConfig`](crate::config::GameConfig) values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} leaves no room below a spawn band of {margin}")]
    BoardTooSmall {
        width: usize,
        height: usize,
        margin: usize,
    },

    #[error("spawn margin {margin} is smaller than the largest piece ({extent} cells)")]
    MarginTooSmall { margin: usize, extent: usize },

    #[error("board dimensions {width}x{height} exceed the coordinate range")]
    BoardTooLarge { width: usize, height: usize },

    #[error("gravity interval must be non-zero")]
    ZeroGravityInterval,
}
