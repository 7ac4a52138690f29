//! Rendering real game snapshots into a framebuffer.

use spintris::core::Game;
use spintris::term::{GameView, Viewport};
use spintris::types::Command;

fn screen_text(fb: &spintris::term::FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn test_frame_reshapes_after_board_rotation() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut game = Game::new(5);
    game.start();

    let tall = view.board_frame(&game.snapshot(), viewport);
    assert_eq!((tall.w, tall.h), (26, 24));

    game.apply(Command::RotateBoard);
    let wide = view.board_frame(&game.snapshot(), viewport);
    assert_eq!((wide.w, wide.h), (46, 14));

    let fb = view.render(&game.snapshot(), viewport);
    let text = screen_text(&fb);
    assert!(text.iter().any(|l| l.contains("← LEFT")));
    assert!(text.iter().any(|l| l.contains("↑ UP")));
    assert!(text.iter().any(|l| l.contains("22x12")));
}

#[test]
fn test_panel_shows_score() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut game = Game::new(5);
    game.start();
    game.apply(Command::HardDrop);
    let snap = game.snapshot();
    assert!(snap.score > 0);

    let text = screen_text(&view.render(&snap, viewport));
    let frame = view.board_frame(&snap, viewport);
    let score_line = &text[usize::from(frame.y) + 1];
    assert!(score_line.contains(&snap.score.to_string()), "{score_line}");
    assert!(text[usize::from(frame.y)].contains("SCORE"));
}

#[test]
fn test_active_piece_is_drawn() {
    let view = GameView::default();
    let mut game = Game::new(9);
    game.start();
    let text = screen_text(&view.render(&game.snapshot(), Viewport::new(80, 30)));
    assert!(text.iter().any(|l| l.contains('█')));
}

#[test]
fn test_overlays_for_pause_and_game_over() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut game = Game::new(11);
    game.start();

    game.apply(Command::Pause);
    let text = screen_text(&view.render(&game.snapshot(), viewport));
    assert!(text.iter().any(|l| l.contains("PAUSED")));

    game.apply(Command::Pause);
    let mut snap = game.snapshot();
    snap.game_over = true;
    let text = screen_text(&view.render(&snap, viewport));
    assert!(text.iter().any(|l| l.contains("GAME OVER")));
    assert!(!text.iter().any(|l| l.contains("PAUSED")));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let view = GameView::default();
    let mut game = Game::new(1);
    game.start();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (30, 12)] {
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
