//! Terminal front-end.
//!
//! A small game-oriented rendering layer: the view draws a [`GameSnapshot`]
//! into a framebuffer, the renderer diffs framebuffers and flushes them
//! through crossterm, and the key map turns key presses into commands. No
//! game rules live here.
//!
//! [`GameSnapshot`]: spintris_core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod keymap;
pub mod renderer;

pub use spintris_core as core;
pub use spintris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{gravity_arrow, BoardFrame, GameView, Viewport};
pub use keymap::{map_key, should_quit};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
