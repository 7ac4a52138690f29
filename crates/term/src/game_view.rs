//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. The board is drawn at whatever dimensions the snapshot
//! carries, so the frame reshapes every time the board rotates.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Color, Orientation, Pos};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_W: u16 = 14;

/// Screen rectangle of the board frame, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where the board frame goes for `snap` inside `viewport`, centred.
    pub fn board_frame(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardFrame {
        let w = (snap.width as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.height as u16).saturating_mul(self.cell_h).saturating_add(2);
        BoardFrame {
            x: viewport.width.saturating_sub(w.saturating_add(PANEL_MIN_W)) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame = self.board_frame(snap, viewport);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        fb.draw_box(
            frame.x,
            frame.y,
            frame.w,
            frame.h,
            CellStyle::new(Rgb::new(200, 200, 200), Rgb::default()),
        );

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for row in 0..snap.height {
            for col in 0..snap.width {
                match snap.cell(row, col) {
                    Some(color) => self.draw_block(fb, frame, row, col, color, false),
                    None => self.fill_cell(fb, frame, row, col, '·', empty),
                }
            }
        }

        if let Some(active) = &snap.active {
            let ghost = CellStyle::new(Rgb::from(active.color).scaled(2, 3), PLAY_BG).dim();
            for &p in &snap.ghost {
                if let Some((row, col)) = in_board(snap, p) {
                    self.fill_cell(fb, frame, row, col, '░', ghost);
                }
            }
            for &p in &active.cells {
                if let Some((row, col)) = in_board(snap, p) {
                    self.draw_block(fb, frame, row, col, active.color, true);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        frame: BoardFrame,
        row: usize,
        col: usize,
        color: Color,
        bold: bool,
    ) {
        let mut style = CellStyle::new(Rgb::from(color), PLAY_BG);
        style.bold = bold;
        self.fill_cell(fb, frame, row, col, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: BoardFrame,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let x = frame.x + 1 + col as u16 * self.cell_w;
        let y = frame.y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: BoardFrame,
    ) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if x >= viewport.width || viewport.width - x < PANEL_MIN_W - 2 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines_cleared),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(x, y, "GRAVITY", label);
        let cx = fb.put_str(x, y + 1, gravity_arrow(snap.orientation), value.bold());
        fb.put_str(cx + 1, y + 1, orientation_label(snap.orientation), value);
        y = y.saturating_add(3);

        fb.put_str(x, y, "NEXT TURN", label);
        let next = snap.orientation.next_clockwise();
        let cx = fb.put_str(x, y + 1, gravity_arrow(next), value.dim());
        fb.put_str(cx + 1, y + 1, orientation_label(next), value.dim());
        y = y.saturating_add(3);

        fb.put_str(x, y, "BOARD", label);
        let cx = fb.put_u32(x, y + 1, snap.width as u32, value);
        let cx = fb.put_str(cx, y + 1, "x", value);
        fb.put_u32(cx, y + 1, snap.height as u32, value);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: BoardFrame, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::default()).bold();
        fb.put_str(x, y, text, style);
    }
}

fn in_board(snap: &GameSnapshot, p: Pos) -> Option<(usize, usize)> {
    let (row, col) = (usize::try_from(p.row).ok()?, usize::try_from(p.col).ok()?);
    (row < snap.height && col < snap.width).then_some((row, col))
}

/// Arrow pointing where pieces fall.
pub fn gravity_arrow(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Down => "↓",
        Orientation::Left => "←",
        Orientation::Up => "↑",
        Orientation::Right => "→",
    }
}

fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Down => "DOWN",
        Orientation::Left => "LEFT",
        Orientation::Up => "UP",
        Orientation::Right => "RIGHT",
    }
}
