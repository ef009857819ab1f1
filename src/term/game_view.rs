//! GameView: maps a [`CellGrid`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::term::grid::CellGrid;
use crate::types::{GameStatus, ShapeKind};

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

/// A lightweight terminal view for the falling-block board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the grid and status into a framebuffer.
    pub fn render(&self, grid: &CellGrid, status: GameStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = grid.width() as u16 * self.cell_w;
        let board_px_h = grid.height() as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Board cells straight from the render model; the grid already
        // contains the active piece, so there is no separate overlay pass.
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                match grid.cell(x, y) {
                    Some(kind) => {
                        self.draw_shape_cell(&mut fb, start_x, start_y, x as u16, y as u16, kind)
                    }
                    None => self.draw_empty_cell(&mut fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Side panel.
        self.draw_side_panel(&mut fb, grid, status, viewport, start_x, start_y, frame_w);

        // Overlays.
        match status {
            GameStatus::NotStarted => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS S TO START")
            }
            GameStatus::Stopped => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "STOPPED")
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::Running => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_shape_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: ShapeKind,
    ) {
        let style = CellStyle {
            fg: shape_color(kind),
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        grid: &CellGrid,
        status: GameStatus,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", grid.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, status_label(status), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in ["←/→ move", "↑ rotate", "↓ drop", "s start/stop", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn shape_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::L => Rgb::new(255, 165, 0),
        ShapeKind::Z => Rgb::new(220, 80, 80),
        ShapeKind::T => Rgb::new(200, 120, 220),
        ShapeKind::S => Rgb::new(100, 220, 120),
        ShapeKind::I => Rgb::new(80, 220, 220),
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "READY",
        GameStatus::Running => "RUNNING",
        GameStatus::Stopped => "STOPPED",
        GameStatus::GameOver => "GAME OVER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSink;
    use crate::types::GameConfig;

    #[test]
    fn renders_occupied_cell_as_block() {
        let mut grid = CellGrid::new(GameConfig::default());
        grid.cells_locked(&[(0, 19), (1, 19), (2, 19), (3, 19)], ShapeKind::I);

        let view = GameView::default();
        let viewport = Viewport::new(80, 24);
        let fb = view.render(&grid, GameStatus::Running, viewport);

        // Find at least one block glyph somewhere in the frame.
        let mut found = false;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some('█') {
                    found = true;
                }
            }
        }
        assert!(found);
    }

    #[test]
    fn game_over_overlay_present() {
        let grid = CellGrid::new(GameConfig::default());
        let view = GameView::default();
        let fb = view.render(&grid, GameStatus::GameOver, Viewport::new(80, 24));

        let mut text = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if let Some(cell) = fb.get(x, y) {
                    text.push(cell.ch);
                }
            }
        }
        assert!(text.contains("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let grid = CellGrid::new(GameConfig::default());
        let view = GameView::default();
        let _ = view.render(&grid, GameStatus::Running, Viewport::new(3, 2));
    }
}
