//! Scoring module - line clears, hard drops and level progression
//!
//! Line clears pay `LINE_SCORES[n] * level`; more than four lines at once pays
//! nothing. Level is derived from score rather than from lines:
//! `level = score / 1000 + 1`.

use crate::types::{
    GRAVITY_INTERVALS_MS, GRAVITY_INTERVAL_FLOOR_MS, HARD_DROP_POINTS_PER_CELL, LINE_SCORES,
    POINTS_PER_LEVEL,
};

/// Calculate line clear points at `level` (1-based).
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Points for a hard drop across `cells` cells.
pub fn hard_drop_points(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINTS_PER_CELL)
}

pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Gravity interval for `level`, clamped to the floor past the table.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let i = level.saturating_sub(1) as usize;
    GRAVITY_INTERVALS_MS
        .get(i)
        .copied()
        .unwrap_or(GRAVITY_INTERVAL_FLOOR_MS)
}

/// Score, level and line counters for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreTracker {
    score: u32,
    level: u32,
    lines_cleared: u32,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines_cleared: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Credit `lines` cleared by one lock, priced at the level before the award.
    ///
    /// Returns the points added.
    pub fn on_lines_cleared(&mut self, lines: usize) -> u32 {
        if lines == 0 {
            return 0;
        }
        let points = line_clear_points(lines, self.level);
        self.lines_cleared = self.lines_cleared.saturating_add(lines as u32);
        self.add(points);
        points
    }

    /// Credit a hard drop across `cells` cells. Returns the points added.
    pub fn on_hard_drop(&mut self, cells: u32) -> u32 {
        let points = hard_drop_points(cells);
        self.add(points);
        points
    }

    fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.level = level_for_score(self.score);
    }
}
