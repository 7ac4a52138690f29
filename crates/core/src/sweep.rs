//! Line clearing - orientation-dependent sweeps
//!
//! The swept axis is perpendicular to gravity. A full line is cleared by
//! shifting everything on the far side of it (away from gravity) one step
//! toward gravity, which empties the line at the spawn edge. The same index
//! is tested again after each shift since the incoming line may be full too.
//!
//! | Orientation | Scan | Shifted toward the cleared line |
//! |---|---|---|
//! | Down  | rows bottom→top | rows above |
//! | Up    | rows top→bottom | rows below |
//! | Right | cols left→right | cols to the left |
//! | Left  | cols right→left | cols to the right |

use tracing::debug;

use crate::board::Board;
use crate::types::{Axis, Orientation};

impl Board {
    /// Clear every full line on the axis swept for `orientation`.
    ///
    /// Returns the number of lines cleared. Dimensions never change.
    pub fn clear_full_lines(&mut self, orientation: Orientation) -> usize {
        let cleared = match orientation {
            Orientation::Down => self.sweep_rows_down(),
            Orientation::Up => self.sweep_rows_up(),
            Orientation::Right => self.sweep_cols_right(),
            Orientation::Left => self.sweep_cols_left(),
        };
        if cleared > 0 {
            debug!(
                lines = cleared,
                orientation = orientation.as_str(),
                "cleared full lines"
            );
        }
        cleared
    }

    /// Whether any line on the axis swept for `orientation` is full.
    pub fn has_full_line(&self, orientation: Orientation) -> bool {
        let axis = orientation.sweep_axis();
        (0..self.line_count(axis)).any(|i| self.is_line_full(axis, i))
    }

    fn sweep_rows_down(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.height();
        while row > 0 {
            if self.is_row_full(row - 1) {
                self.collapse_row_from_above(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        cleared
    }

    fn sweep_rows_up(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = 0;
        while row < self.height() {
            if self.is_row_full(row) {
                self.collapse_row_from_below(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }
        cleared
    }

    fn sweep_cols_right(&mut self) -> usize {
        let mut cleared = 0;
        let mut col = 0;
        while col < self.width() {
            if self.is_col_full(col) {
                self.collapse_col_from_left(col);
                cleared += 1;
            } else {
                col += 1;
            }
        }
        cleared
    }

    fn sweep_cols_left(&mut self) -> usize {
        let mut cleared = 0;
        let mut col = self.width();
        while col > 0 {
            if self.is_col_full(col - 1) {
                self.collapse_col_from_right(col - 1);
                cleared += 1;
            } else {
                col -= 1;
            }
        }
        cleared
    }

    /// Copy row r-1 into r for every row down to `target`, then empty row 0.
    fn collapse_row_from_above(&mut self, target: usize) {
        let width = self.width();
        let cells = self.cells_mut();
        for row in (1..=target).rev() {
            let src = (row - 1) * width;
            cells.copy_within(src..src + width, row * width);
        }
        cells[..width].fill(None);
    }

    /// Copy row r+1 into r from `target` to the bottom, then empty the last row.
    fn collapse_row_from_below(&mut self, target: usize) {
        let (width, height) = (self.width(), self.height());
        let cells = self.cells_mut();
        for row in target..height - 1 {
            let src = (row + 1) * width;
            cells.copy_within(src..src + width, row * width);
        }
        let last = (height - 1) * width;
        cells[last..last + width].fill(None);
    }

    /// Copy col c-1 into c for every column down to `target`, then empty col 0.
    fn collapse_col_from_left(&mut self, target: usize) {
        let (width, height) = (self.width(), self.height());
        let cells = self.cells_mut();
        for row in 0..height {
            let line = &mut cells[row * width..(row + 1) * width];
            line.copy_within(0..target, 1);
            line[0] = None;
        }
    }

    /// Copy col c+1 into c from `target` to the right edge, then empty the last col.
    fn collapse_col_from_right(&mut self, target: usize) {
        let (width, height) = (self.width(), self.height());
        let cells = self.cells_mut();
        for row in 0..height {
            let line = &mut cells[row * width..(row + 1) * width];
            line.copy_within(target + 1..width, target);
            line[width - 1] = None;
        }
    }
}

/// Lines on `axis` that are currently full, in index order.
pub fn full_lines(board: &Board, axis: Axis) -> Vec<usize> {
    (0..board.line_count(axis))
        .filter(|&i| board.is_line_full(axis, i))
        .collect()
}
