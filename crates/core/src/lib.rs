//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the rules of the rotating-board puzzle: the
//! occupancy grid, the nine piece templates, movement and pivot rotation,
//! gravity, orientation-dependent line clearing, whole-board rotation, spawn
//! placement, game-over detection and scoring. It has no dependencies on UI,
//! timers or I/O; time only enters through [`Game::advance`].
//!
//! # Module Structure
//!
//! - [`board`]: variable-size occupancy grid, rotation and the game-over sentinel
//! - [`sweep`]: full-line detection and clearing along the swept axis
//! - [`shapes`]: the static template catalog
//! - [`piece`]: the active piece, translation and pivot rotation
//! - [`spawner`]: uniform random choice and spawn anchors per orientation
//! - [`scoring`]: score, level and gravity interval rules
//! - [`game_state`]: the [`Game`] state machine tying everything together
//! - [`config`]: [`GameConfig`] and its environment loader
//! - [`snapshot`]: read-only copies for observers
//!
//! # Game Rules
//!
//! - **Rotating board**: after every lock the board turns 90° clockwise,
//!   width and height swap, and gravity cycles Down → Left → Up → Right
//! - **No bag**: each spawn draws one of nine templates uniformly
//! - **No wall kicks**: a blocked rotation is refused
//! - **No lock delay**: a piece that cannot move along gravity locks on the
//!   next gravity tick
//! - **Scoring**: 100/300/500/800 per 1-4 lines times the level, 2 points per
//!   hard-dropped cell, `level = score / 1000 + 1`
//!
//! # Example
//!
//! ```
//! use spintris_core::Game;
//! use spintris_core::types::{Command, Direction, Orientation};
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! game.apply(Command::Move(Direction::Right));
//! game.apply(Command::HardDrop);
//!
//! // Locking turned the board.
//! assert_eq!(game.orientation(), Orientation::Left);
//! assert_eq!((game.width(), game.height()), (22, 12));
//! assert!(game.score() > 0);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod spawner;
pub mod sweep;

pub use spintris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Occupant};
pub use config::GameConfig;
pub use error::{ConfigError, PlaceError};
pub use game_state::Game;
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use scoring::ScoreTracker;
pub use shapes::{template, ShapeTemplate, CATALOG};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use spawner::Spawner;
