//! Board-level behaviour: occupancy, line clears per orientation, rotation.

use spintris::core::{Board, PlaceError};
use spintris::types::{Axis, Color, Orientation, Pos};

const C: Color = Color::new(200, 50, 50);

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(12, 22);
    assert_eq!((board.width(), board.height()), (12, 22));
    assert_eq!(board.occupied_count(), 0);
    assert!(board.is_valid_and_empty(0, 0));
    assert!(board.is_valid_and_empty(21, 11));
    assert!(!board.is_in_bounds(22, 0));
    assert!(!board.is_in_bounds(0, -1));
}

#[test]
fn test_place_commits_every_cell() {
    let mut board = Board::new(12, 22);
    let cells = [Pos::new(21, 0), Pos::new(21, 1), Pos::new(20, 0)];
    board.place(&cells, C).unwrap();
    for p in cells {
        assert!(board.is_occupied(p.row, p.col));
        assert_eq!(board.get(p.row, p.col), Some(Some(C)));
    }
    assert_eq!(
        board.place(&[Pos::new(21, 1)], C),
        Err(PlaceError::Collision { row: 21, col: 1 })
    );
}

#[test]
fn test_clearing_row_shifts_contents_down() {
    // Row 10 full except col 5, a marker on row 9.
    let mut board = Board::new(12, 22);
    for col in (0..12).filter(|&c| c != 5) {
        board.set(10, col, Some(C));
    }
    let marker = Color::new(1, 2, 3);
    board.set(9, 3, Some(marker));

    board.place(&[Pos::new(10, 5)], C).unwrap();
    assert_eq!(board.clear_full_lines(Orientation::Down), 1);
    assert_eq!(board.get(10, 3), Some(Some(marker)));
    assert!(!board.is_occupied(9, 3));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_reports_every_line_once() {
    let mut board = Board::new(6, 8);
    for row in [3, 5, 6] {
        for col in 0..6 {
            board.set(row, col, Some(C));
        }
    }
    board.set(4, 2, Some(C));
    assert_eq!(board.clear_full_lines(Orientation::Down), 3);
    assert_eq!(board.occupied_count(), 1);
    assert!(board.is_occupied(6, 2));
    assert!(!board.has_full_line(Orientation::Down));
}

#[test]
fn test_column_sweeps_for_sideways_gravity() {
    let mut board = Board::new(8, 5);
    for row in 0..5 {
        board.set(row, 6, Some(C));
    }
    board.set(2, 7, Some(C));
    board.set(0, 1, Some(C));

    let mut left = board.clone();
    assert_eq!(left.clear_full_lines(Orientation::Left), 1);
    // Cols right of 6 move one step left.
    assert!(left.is_occupied(2, 6));
    assert!(left.is_occupied(0, 1));
    assert_eq!(left.occupied_count(), 2);

    let mut right = board.clone();
    assert_eq!(right.clear_full_lines(Orientation::Right), 1);
    // Cols left of 6 move one step right.
    assert!(right.is_occupied(0, 2));
    assert!(right.is_occupied(2, 7));
    assert_eq!(right.occupied_count(), 2);

    // Row sweeps ignore columns.
    assert_eq!(board.clone().clear_full_lines(Orientation::Up), 0);
}

#[test]
fn test_rotation_swaps_dimensions() {
    let mut board = Board::new(12, 22);
    board.set(21, 0, Some(C));
    board.set(0, 11, Some(C));
    board.rotate_clockwise();
    assert_eq!((board.width(), board.height()), (22, 12));
    assert!(board.is_occupied(0, 0));
    assert!(board.is_occupied(11, 21));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_four_rotations_restore_board() {
    let mut board = Board::from_rows(&["#....", "..#..", "....#"], C);
    let original = board.clone();
    for _ in 0..4 {
        board.rotate_clockwise();
    }
    assert_eq!(board, original);
}

#[test]
fn test_sentinel_per_orientation() {
    let board = Board::new(12, 22);
    assert_eq!(board.sentinel_line(Orientation::Down, 4), Some((Axis::Row, 4)));
    assert_eq!(board.sentinel_line(Orientation::Up, 4), Some((Axis::Row, 17)));
    assert_eq!(board.sentinel_line(Orientation::Left, 4), Some((Axis::Col, 7)));
    assert_eq!(board.sentinel_line(Orientation::Right, 4), Some((Axis::Col, 4)));

    let mut board = Board::new(12, 22);
    board.set(17, 0, Some(C));
    assert!(board.is_game_over(Orientation::Up, 4));
    assert!(!board.is_game_over(Orientation::Down, 4));
    board.set(4, 11, Some(C));
    assert!(board.is_game_over(Orientation::Down, 4));
}
