//! Board module - manages the occupancy grid
//!
//! The board is a `height x width` grid where each cell is empty or holds the
//! color of the piece that locked there. Storage is a flat row-major vector so
//! row copies during line clears are plain slice moves.
//!
//! Unlike a fixed playfield the dimensions are not constants: every
//! [`Board::rotate_clockwise`] swaps them. Coordinates are `(row, col)` with
//! row 0 at the top.

use crate::error::PlaceError;
use crate::types::{Axis, Cell, Color, Orientation, Pos};

/// An occupied cell as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub row: usize,
    pub col: usize,
    pub color: Color,
}

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (row, col), `None` when out of bounds
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_in_bounds(&self, row: i16, col: i16) -> bool {
        self.index(row, col).is_some()
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Within bounds and empty
    pub fn is_valid_and_empty(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    pub fn is_free(&self, pos: Pos) -> bool {
        self.is_valid_and_empty(pos.row, pos.col)
    }

    /// Commit `cells` with `color`.
    ///
    /// Every cell is checked before any is written, so on error the board is
    /// unchanged.
    pub fn place(&mut self, cells: &[Pos], color: Color) -> Result<(), PlaceError> {
        for &Pos { row, col } in cells {
            match self.get(row, col) {
                None => return Err(PlaceError::OutOfBounds { row, col }),
                Some(Some(_)) => return Err(PlaceError::Collision { row, col }),
                Some(None) => {}
            }
        }
        // Duplicate cells within one piece would silently merge.
        debug_assert!(
            cells
                .iter()
                .enumerate()
                .all(|(i, a)| cells[i + 1..].iter().all(|b| a != b)),
            "piece cells overlap each other"
        );

        for &Pos { row, col } in cells {
            self.set(row, col, Some(color));
        }
        Ok(())
    }

    /// Number of lines along `axis`.
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Col => self.width,
        }
    }

    /// Number of cells in one line along `axis`.
    pub fn line_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.width,
            Axis::Col => self.height,
        }
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height && self.row(row).iter().all(Option::is_some)
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        col < self.width && (0..self.height).all(|row| self.cells[row * self.width + col].is_some())
    }

    pub fn is_line_full(&self, axis: Axis, index: usize) -> bool {
        match axis {
            Axis::Row => self.is_row_full(index),
            Axis::Col => self.is_col_full(index),
        }
    }

    /// Whether any cell of the line is occupied.
    pub fn is_line_touched(&self, axis: Axis, index: usize) -> bool {
        match axis {
            Axis::Row => index < self.height && self.row(index).iter().any(Option::is_some),
            Axis::Col => {
                index < self.width
                    && (0..self.height).any(|row| self.cells[row * self.width + index].is_some())
            }
        }
    }

    /// Turn the whole grid 90° clockwise.
    ///
    /// Cell `(row, col)` moves to `(col, height - 1 - row)` and the
    /// dimensions swap. The new grid is built completely before it replaces
    /// the old one.
    pub fn rotate_clockwise(&mut self) {
        let (old_w, old_h) = (self.width, self.height);
        let new_w = old_h;
        let mut rotated = vec![None; old_w * old_h];

        for row in 0..old_h {
            for col in 0..old_w {
                let cell = self.cells[row * old_w + col];
                if cell.is_some() {
                    let new_row = col;
                    let new_col = old_h - 1 - row;
                    rotated[new_row * new_w + new_col] = cell;
                }
            }
        }

        *self = Self {
            width: new_w,
            height: old_w,
            cells: rotated,
        };
    }

    /// Game-over sentinel line for `orientation`.
    ///
    /// It is the first line past the `margin`-deep spawn band. `None` when the
    /// board is too small to have one.
    pub fn sentinel_line(&self, orientation: Orientation, margin: usize) -> Option<(Axis, usize)> {
        let (axis, index) = match orientation {
            Orientation::Down => (Axis::Row, Some(margin)),
            Orientation::Up => (Axis::Row, self.height.checked_sub(margin + 1)),
            Orientation::Left => (Axis::Col, self.width.checked_sub(margin + 1)),
            Orientation::Right => (Axis::Col, Some(margin)),
        };
        index
            .filter(|&i| i < self.line_count(axis))
            .map(|i| (axis, i))
    }

    /// Whether the stack has reached the sentinel line near the spawn edge.
    pub fn is_game_over(&self, orientation: Orientation, margin: usize) -> bool {
        self.sentinel_line(orientation, margin)
            .is_some_and(|(axis, index)| self.is_line_touched(axis, index))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Occupied cells in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = Occupant> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|color| Occupant {
                row: i / self.width,
                col: i % self.width,
                color,
            })
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, `#` for occupied and `.` for empty.
    ///
    /// Handy for tests and benches; every row must have the same length.
    pub fn from_rows(rows: &[&str], color: Color) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut board = Self::new(width, height);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), width, "ragged row {r}");
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.cells[r * width + c] = Some(color);
                }
            }
        }
        board
    }

    /// Render as text rows, the inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|r| {
                self.row(r)
                    .iter()
                    .map(|c| if c.is_some() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_WIDTH, crate::types::DEFAULT_BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Color = Color::new(1, 2, 3);

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(12, 22);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 11), Some(11));
        assert_eq!(board.index(1, 0), Some(12));
        assert_eq!(board.index(21, 11), Some(22 * 12 - 1));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 12), None);
        assert_eq!(board.index(22, 0), None);
    }

    #[test]
    fn test_place_is_all_or_nothing() {
        let mut board = Board::new(4, 4);
        board.set(1, 1, Some(C));

        let cells = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)];
        assert_eq!(
            board.place(&cells, C),
            Err(PlaceError::Collision { row: 1, col: 1 })
        );
        assert!(!board.is_occupied(0, 0));
        assert!(!board.is_occupied(0, 1));

        let cells = [Pos::new(3, 3), Pos::new(3, 4)];
        assert_eq!(
            board.place(&cells, C),
            Err(PlaceError::OutOfBounds { row: 3, col: 4 })
        );
        assert!(!board.is_occupied(3, 3));
    }

    #[test]
    fn test_rotate_moves_cells_and_swaps_dimensions() {
        let mut board = Board::from_rows(&["#..", "..."], C);
        board.rotate_clockwise();
        assert_eq!((board.width(), board.height()), (2, 3));
        // Top-left goes to top-right.
        assert_eq!(board.to_rows(), vec![".#", "..", ".."]);
    }

    #[test]
    fn test_sentinel_lines_default_margin() {
        let board = Board::new(12, 22);
        assert_eq!(board.sentinel_line(Orientation::Down, 4), Some((Axis::Row, 4)));
        assert_eq!(board.sentinel_line(Orientation::Up, 4), Some((Axis::Row, 17)));
        assert_eq!(board.sentinel_line(Orientation::Left, 4), Some((Axis::Col, 7)));
        assert_eq!(board.sentinel_line(Orientation::Right, 4), Some((Axis::Col, 4)));

        let tiny = Board::new(3, 3);
        assert_eq!(tiny.sentinel_line(Orientation::Down, 4), None);
        assert_eq!(tiny.sentinel_line(Orientation::Up, 4), None);
        assert!(!tiny.is_game_over(Orientation::Down, 4));
    }

    #[test]
    fn test_occupants_report_grid_position() {
        let mut board = Board::new(5, 5);
        board.set(2, 3, Some(C));
        board.set(4, 0, Some(C));
        let occ: Vec<_> = board.occupants().collect();
        assert_eq!(
            occ,
            vec![
                Occupant { row: 2, col: 3, color: C },
                Occupant { row: 4, col: 0, color: C },
            ]
        );
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = ["..#.", "#..#", "...."];
        let board = Board::from_rows(&rows, C);
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.occupied_count(), 3);
    }
}
