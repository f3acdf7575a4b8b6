//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::EngineSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::Color;

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

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_MIN_WIDTH: u16 = 12;

/// Draws the bordered playfield, the score panel and the game-over overlay.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
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

    /// Outer size of the bordered playfield for a grid of `rows x cols`.
    pub fn frame_size(&self, rows: usize, cols: usize) -> (u16, u16) {
        let w = (cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &EngineSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap.rows, snap.cols);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let empty = Style::new(Rgb::new(60, 60, 70), PLAYFIELD_BG).dim();
        for row in 0..snap.rows {
            for col in 0..snap.cols {
                match snap.cell(row, col) {
                    Some(color) => self.draw_block(fb, origin_x, origin_y, row, col, color),
                    None => self.fill_cell(fb, origin_x, origin_y, row, col, '·', empty),
                }
            }
        }

        if let Some(color) = snap.active.as_ref().map(|p| p.color) {
            for (row, col) in snap.visible_active_cells() {
                self.draw_block(fb, origin_x, origin_y, row, col, color);
            }
        }

        let border = Style::new(Rgb::new(255, 255, 255), PLAYFIELD_BG);
        fb.draw_box(origin_x, origin_y, frame_w, frame_h, border);

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_panel(fb, snap, viewport, panel_x, origin_y);

        if snap.game_over {
            self.draw_game_over(fb, origin_x, origin_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &EngineSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        row: usize,
        col: usize,
        color: Color,
    ) {
        let style = Style::new(color_rgb(color), PLAYFIELD_BG).bold();
        self.fill_cell(fb, origin_x, origin_y, row, col, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        row: usize,
        col: usize,
        ch: char,
        style: Style,
    ) {
        let x = origin_x
            .saturating_add(1)
            .saturating_add((col as u16).saturating_mul(self.cell_w));
        let y = origin_y
            .saturating_add(1)
            .saturating_add((row as u16).saturating_mul(self.cell_h));
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &EngineSnapshot,
        viewport: Viewport,
        x: u16,
        top: u16,
    ) {
        if x >= viewport.width || viewport.width - x < PANEL_MIN_WIDTH {
            return;
        }

        let label = Style::default().bold();
        let value = Style::default();
        let hint = Style::default().dim();

        fb.put_str(x, top, "SCORE", label);
        fb.put_u32(x, top.saturating_add(1), snap.score, value);
        fb.put_str(x, top.saturating_add(3), "LINES", label);
        fb.put_u32(x, top.saturating_add(4), snap.lines, value);

        let controls = [
            "←/→  move",
            "↓    drop",
            "↑    rotate",
            "q    quit",
        ];
        for (i, line) in controls.iter().enumerate() {
            fb.put_str(x, top.saturating_add(6 + i as u16), line, hint);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16) {
        let style = Style::new(Rgb::new(255, 0, 0), PLAYFIELD_BG).bold();
        let mid = y.saturating_add(frame_h / 2);
        self.put_centered(fb, x, frame_w, mid, "GAME OVER", style);
        self.put_centered(fb, x, frame_w, mid.saturating_add(1), "r: restart", Style::default());
    }

    fn put_centered(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: Style) {
        let text_w = text.chars().count() as u16;
        let start = x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(start, y, text, style);
    }
}

/// Display color of a palette entry.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(0, 255, 255),
        Color::Yellow => Rgb::new(255, 255, 0),
        Color::Purple => Rgb::new(160, 32, 240),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Blue => Rgb::new(0, 0, 255),
        Color::Red => Rgb::new(255, 0, 0),
        Color::Green => Rgb::new(0, 255, 0),
    }
}
