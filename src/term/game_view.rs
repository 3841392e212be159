//! GameView: maps game state and the current layout into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. It also owns the
//! translation between terminal coordinates and the layout engine's logical
//! cells, so mouse hit-testing lives here.

use crate::core::{Canvas, Game, Layout, LayoutParams};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Button, BUTTON_COUNT};

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

/// Rows above the button canvas: expression, message, score/time, spacer.
pub const HEADER_ROWS: u16 = 4;

/// Button side range and spacing in logical cells.
const BTN_MIN_CELLS: u16 = 3;
const BTN_MAX_CELLS: u16 = 5;
const BTN_MARGIN_CELLS: u16 = 1;

/// The terminal renderer for the calculator board.
pub struct GameView {
    /// Terminal columns per logical cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio, so
        // layout squares render square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Logical canvas inside the bordered button box for this viewport.
    pub fn canvas_for(&self, viewport: Viewport) -> Canvas {
        let interior_w = viewport.width.saturating_sub(2);
        let interior_h = viewport
            .height
            .saturating_sub(HEADER_ROWS)
            .saturating_sub(2);
        Canvas::new(interior_w / self.cell_w, interior_h)
    }

    /// Placement tuning at cell scale.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            count: BUTTON_COUNT,
            min_size: BTN_MIN_CELLS,
            max_size: BTN_MAX_CELLS,
            margin: BTN_MARGIN_CELLS,
            max_attempts_per_slot: 100,
        }
    }

    /// Render the current game state and button layout into a framebuffer.
    pub fn render(&self, game: &Game, layout: &Layout, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        self.draw_header(&mut fb, game, viewport);
        self.draw_canvas_frame(&mut fb, viewport);
        self.draw_buttons(&mut fb, layout, viewport);

        fb
    }

    /// Resolve a mouse click at terminal (col, row) to a button.
    pub fn hit_test(&self, layout: &Layout, col: u16, row: u16) -> Option<Button> {
        if row <= HEADER_ROWS || col == 0 {
            return None;
        }
        let lx = (col - 1) / self.cell_w;
        let ly = row - HEADER_ROWS - 1;

        layout
            .iter()
            .position(|slot| slot.contains(lx, ly))
            .and_then(Button::from_index)
    }

    fn draw_header(&self, fb: &mut FrameBuffer, game: &Game, viewport: Viewport) {
        let display_style = CellStyle::bold(Rgb::new(255, 255, 255), Rgb::new(40, 40, 50));
        let message_style = CellStyle::new(Rgb::new(250, 204, 21), Rgb::new(0, 0, 0));
        let stats_style = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));

        // Expression display: a full-width band, right-aligned like a
        // desk calculator.
        fb.fill_rect(0, 0, viewport.width, 1, ' ', display_style);
        let expr = game.expression();
        let expr_w = expr.chars().count() as u16;
        let expr_x = viewport.width.saturating_sub(expr_w + 1);
        fb.put_str(expr_x, 0, expr, display_style);

        fb.put_str(1, 1, game.message(), message_style);

        let stats = format!("Score: {}   Time: {}s", game.score(), game.time_left());
        fb.put_str(1, 2, &stats, stats_style);
    }

    fn draw_canvas_frame(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let x = 0;
        let y = HEADER_ROWS;
        let w = viewport.width;
        let h = viewport.height.saturating_sub(HEADER_ROWS);
        if w < 2 || h < 2 {
            return;
        }

        let border = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', border);
        fb.put_char(x + w - 1, y, '┐', border);
        fb.put_char(x, y + h - 1, '└', border);
        fb.put_char(x + w - 1, y + h - 1, '┘', border);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + h - 1, '─', border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + w - 1, y + dy, '│', border);
        }
    }

    fn draw_buttons(&self, fb: &mut FrameBuffer, layout: &Layout, viewport: Viewport) {
        for (i, slot) in layout.iter().enumerate() {
            let Some(button) = Button::from_index(i) else {
                continue;
            };

            let bg = button_color(button);
            let face = CellStyle::new(bg, bg);
            let label = CellStyle::bold(Rgb::new(255, 255, 255), bg);

            let tx = 1 + slot.x * self.cell_w;
            let ty = HEADER_ROWS + 1 + slot.y;
            let tw = slot.size * self.cell_w;
            let th = slot.size;

            // Keep the face inside the frame even if the viewport shrank
            // since the layout was generated.
            let max_x = viewport.width.saturating_sub(1);
            let max_y = viewport.height.saturating_sub(1);
            if tx >= max_x || ty >= max_y {
                continue;
            }
            let tw = tw.min(max_x - tx);
            let th = th.min(max_y - ty);

            fb.fill_rect(tx, ty, tw, th, ' ', face);

            let label_x = tx + tw / 2;
            let label_y = ty + th / 2;
            fb.put_char(label_x, label_y, button.label(), label);
        }
    }
}

/// Button face colors, per class (digits purple, operators blue, equals
/// green, clear red).
fn button_color(button: Button) -> Rgb {
    match button {
        Button::Digit(_) => Rgb::new(147, 51, 234),
        Button::Op(_) => Rgb::new(37, 99, 235),
        Button::Equals => Rgb::new(22, 163, 74),
        Button::Clear => Rgb::new(220, 38, 38),
    }
}
