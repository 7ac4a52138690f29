//! Active piece - live cells, translation and pivot rotation
//!
//! A piece is an ordered list of absolute cells instantiated from a
//! [`ShapeTemplate`]. Order is preserved by every transform, so the pivot
//! stays at [`PIVOT_INDEX`] for the piece's whole life.
//!
//! Rotation works on `(x, y) = (col, row)` offsets from the pivot `(px, py)`:
//!
//! - clockwise: `x' = px - dy`, `y' = py + dx`
//! - counter-clockwise: `x' = px + dy`, `y' = py - dx`
//!
//! There are no wall kicks; a blocked rotation is simply refused.

use crate::board::Board;
use crate::shapes::{ShapeTemplate, PIVOT_INDEX};
use crate::types::{ClockDirection, Color, Direction, Pos, ShapeKind};

/// The falling piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePiece {
    kind: ShapeKind,
    color: Color,
    cells: Vec<Pos>,
}

impl ActivePiece {
    /// Instantiate `template` with its offsets applied to `anchor`.
    pub fn new(template: &ShapeTemplate, anchor: Pos) -> Self {
        Self {
            kind: template.kind,
            color: template.color,
            cells: template.cells_at(anchor),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn pivot(&self) -> Pos {
        self.cells[PIVOT_INDEX.min(self.cells.len() - 1)]
    }

    /// Check if every cell is in bounds and empty
    pub fn fits(&self, board: &Board) -> bool {
        self.cells.iter().all(|&p| board.is_free(p))
    }

    /// Check if the piece can move one cell in `dir`
    pub fn can_move(&self, board: &Board, dir: Direction) -> bool {
        self.cells.iter().all(|&p| board.is_free(p.step(dir)))
    }

    /// Move one cell in `dir` if the destination is free
    pub fn try_move(&mut self, board: &Board, dir: Direction) -> bool {
        if !self.can_move(board, dir) {
            return false;
        }
        for cell in &mut self.cells {
            *cell = cell.step(dir);
        }
        true
    }

    /// How many whole steps the piece can travel in `dir` before blocking.
    pub fn drop_distance(&self, board: &Board, dir: Direction) -> u32 {
        let (dr, dc) = dir.delta();
        let mut distance: i16 = 0;
        loop {
            let next = distance + 1;
            let free = self
                .cells
                .iter()
                .all(|p| board.is_free(Pos::new(p.row + dr * next, p.col + dc * next)));
            if !free {
                return distance as u32;
            }
            distance = next;
        }
    }

    /// Cells after travelling `distance` steps in `dir`, unchecked.
    pub fn shifted_cells(&self, dir: Direction, distance: u32) -> Vec<Pos> {
        let (dr, dc) = dir.delta();
        let n = distance as i16;
        self.cells
            .iter()
            .map(|p| Pos::new(p.row + dr * n, p.col + dc * n))
            .collect()
    }

    /// Candidate cells for a rotation about the pivot, unchecked.
    pub fn rotated_cells(&self, clock: ClockDirection) -> Vec<Pos> {
        let pivot = self.pivot();
        let (px, py) = (pivot.col, pivot.row);
        self.cells
            .iter()
            .map(|p| {
                let (dx, dy) = (p.col - px, p.row - py);
                let (x, y) = match clock {
                    ClockDirection::Clockwise => (px - dy, py + dx),
                    ClockDirection::CounterClockwise => (px + dy, py - dx),
                };
                Pos::new(y, x)
            })
            .collect()
    }

    pub fn can_rotate(&self, board: &Board, clock: ClockDirection) -> bool {
        self.rotated_cells(clock).iter().all(|&p| board.is_free(p))
    }

    /// Rotate about the pivot if every candidate cell is free
    pub fn try_rotate(&mut self, board: &Board, clock: ClockDirection) -> bool {
        let candidates = self.rotated_cells(clock);
        assert_eq!(
            candidates.len(),
            self.cells.len(),
            "rotation produced a different number of cells"
        );
        if !candidates.iter().all(|&p| board.is_free(p)) {
            return false;
        }
        self.cells = candidates;
        true
    }
}
