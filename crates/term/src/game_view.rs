//! GameView: maps a `RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RoundSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette::Palette;
use crate::types::{Position, RoundStatus, BOARD_SIZE};

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

/// A lightweight terminal renderer for the chase board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            palette: Palette::default(),
        }
    }
}

/// Bordered board placement inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_SIZE as u16) * self.cell_w + 2,
            (BOARD_SIZE as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &RoundSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        self.draw_border(fb, frame);

        for y in 0..BOARD_SIZE as usize {
            for x in 0..BOARD_SIZE as usize {
                let (ch, style) = self.palette.cell(snap.board[y][x]);
                self.fill_tile(fb, frame, Position::new(x as i8, y as i8), ch, style);
            }
        }

        // Actors go on top of the grid; the enemy is drawn last.
        if snap.status != RoundStatus::Idle {
            self.draw_actor(fb, frame, snap.player, self.palette.player(snap.player_alive()));
            self.draw_actor(fb, frame, snap.enemy, self.palette.enemy());
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.status {
            RoundStatus::Idle => {
                self.draw_overlay(fb, viewport, frame, &["PRESS ENTER TO START"]);
            }
            RoundStatus::Won | RoundStatus::Lost => {
                if let Some(outcome) = snap.outcome {
                    let top = self.draw_overlay(
                        fb,
                        viewport,
                        frame,
                        &[outcome.message, "", "ENTER: PLAY AGAIN"],
                    );
                    self.draw_score_line(fb, viewport, top.saturating_add(1), outcome.score);
                }
            }
            RoundStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        let style = self.palette.border();

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Terminal coordinates of a tile's top-left character.
    fn tile_origin(&self, frame: Frame, pos: Position) -> (u16, u16) {
        (
            frame.x + 1 + (pos.x as u16) * self.cell_w,
            frame.y + 1 + (pos.y as u16) * self.cell_h,
        )
    }

    fn fill_tile(&self, fb: &mut FrameBuffer, frame: Frame, pos: Position, ch: char, style: CellStyle) {
        let (px, py) = self.tile_origin(frame, pos);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_actor(&self, fb: &mut FrameBuffer, frame: Frame, pos: Position, style: CellStyle) {
        if !pos.in_bounds() {
            return;
        }
        self.fill_tile(fb, frame, pos, ' ', style);
        let (px, py) = self.tile_origin(frame, pos);
        fb.put_char(px, py, '●', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = self.palette.label();
        let value = self.palette.value();

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LIVES", snap.lives as u32),
            ("TREASURES", snap.treasures_left as u32),
            ("ROUND", snap.round_id),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        let dim = value.dim();
        for line in ["ARROWS/WASD MOVE", "ENTER START", "R RESTART", "Q QUIT"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    /// Centered lines over the board. Returns the row of the first line.
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        frame: Frame,
        lines: &[&str],
    ) -> u16 {
        let style = self.palette.label();
        let top = frame
            .y
            .saturating_add(frame.h / 2)
            .saturating_sub(lines.len() as u16 / 2);

        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = viewport.width.saturating_sub(text_w) / 2;
            let y = top.saturating_add(i as u16);
            fb.put_str(x, y, text, style);
        }
        top
    }

    fn draw_score_line(&self, fb: &mut FrameBuffer, viewport: Viewport, y: u16, score: u32) {
        const LABEL: &str = "SCORE ";
        let label_w = LABEL.len() as u16;
        let x = viewport.width.saturating_sub(label_w + decimal_width(score)) / 2;

        let style = self.palette.label();
        fb.put_str(x, y, LABEL, style);
        fb.put_u32(x.saturating_add(label_w), y, score, style);
    }
}

/// Columns needed to print `n` in decimal.
fn decimal_width(n: u32) -> u16 {
    n.checked_ilog10().map_or(1, |d| d as u16 + 1)
}
