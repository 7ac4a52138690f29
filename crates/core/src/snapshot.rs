use crate::piece::ActivePiece;
use crate::types::{Cell, Color, Orientation, Phase, Pos, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    pub cells: Vec<Pos>,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            cells: value.cells().to_vec(),
        }
    }
}

/// Read-only copy of everything an observer may render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major, `height * width` entries.
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Where the active piece would come to rest along gravity.
    pub ghost: Vec<Pos>,
    pub orientation: Orientation,
    pub phase: Phase,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
    pub seed: u32,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.active = None;
        self.ghost.clear();
        self.orientation = Orientation::Down;
        self.phase = Phase::Idle;
        self.paused = false;
        self.game_over = false;
        self.episode_id = 0;
        self.piece_id = 0;
        self.seed = 0;
        self.score = 0;
        self.level = 1;
        self.lines_cleared = 0;
    }

    /// Locked cell at `(row, col)`, `None` when empty or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied().flatten()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            active: None,
            ghost: Vec::new(),
            orientation: Orientation::Down,
            phase: Phase::Idle,
            paused: false,
            game_over: false,
            episode_id: 0,
            piece_id: 0,
            seed: 0,
            score: 0,
            level: 1,
            lines_cleared: 0,
        };
        s.clear();
        s
    }
}
