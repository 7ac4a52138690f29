//! Session engine - drives a [`spintris_core::Game`] in real time
//!
//! The core game is a plain `&mut` state machine with no notion of wall-clock
//! time. This crate wraps it in a single tokio task that owns the game and
//! feeds it both clock ticks and player commands through one loop:
//!
//! ```text
//!   commands (mpsc, bounded) ─┐
//!                             ├─> select! ─> Game ─> snapshots (watch)
//!   tick interval ────────────┘                 └─> events (mpsc, unbounded)
//! ```
//!
//! Use [`Session::spawn`] inside an existing runtime, or [`SessionHandle`] to
//! own a dedicated runtime from synchronous code such as a terminal loop.

pub mod session;

pub use session::{run_session, Session, SessionConfig, SessionHandle};
