//! Spawner - random template choice and orientation-specific entry points
//!
//! A new piece sits flush against the spawn edge (the edge gravity points
//! away from) and is centred along that edge. Every template fits inside the
//! spawn band, so a fresh piece never reaches the game-over sentinel line.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::shapes::{template, ShapeTemplate};
use crate::types::{Orientation, Pos, ShapeKind};

/// Uniform, memoryless piece source.
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    rng: SimpleRng,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind; every kind has probability 1/9 on every draw.
    pub fn next_kind(&mut self) -> ShapeKind {
        let i = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[i]
    }

    /// Draw a kind and place it at the spawn anchor for `orientation`.
    ///
    /// The result is not checked against the board.
    pub fn spawn(&mut self, board: &Board, orientation: Orientation) -> ActivePiece {
        let kind = self.next_kind();
        piece_at_spawn(kind, board, orientation)
    }

    /// RNG state, for continuing the sequence elsewhere.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

/// Instantiate `kind` at its spawn anchor.
pub fn piece_at_spawn(kind: ShapeKind, board: &Board, orientation: Orientation) -> ActivePiece {
    let t = template(kind);
    ActivePiece::new(t, spawn_anchor(t, board, orientation))
}

/// Anchor that puts the template's bounding box against the spawn edge.
pub fn spawn_anchor(template: &ShapeTemplate, board: &Board, orientation: Orientation) -> Pos {
    let b = template.bounds();
    let (w, h) = (board.width() as i16, board.height() as i16);
    let centred_col = (w - b.cols()) / 2 - b.min_col;
    let centred_row = (h - b.rows()) / 2 - b.min_row;

    match orientation {
        Orientation::Down => Pos::new(-b.min_row, centred_col),
        Orientation::Up => Pos::new(h - 1 - b.max_row, centred_col),
        Orientation::Left => Pos::new(centred_row, w - 1 - b.max_col),
        Orientation::Right => Pos::new(centred_row, -b.min_col),
    }
}
