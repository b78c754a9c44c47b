//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Cell;

/// Piece colors, indexed by cell value minus one (T, I, S, Z, L, O, J).
pub const PALETTE: [Rgb; 7] = [
    Rgb::new(0xFF, 0x0D, 0x72),
    Rgb::new(0x0D, 0xC2, 0xFF),
    Rgb::new(0x0D, 0xFF, 0x72),
    Rgb::new(0xF5, 0x38, 0xFF),
    Rgb::new(0xFF, 0x8E, 0x0D),
    Rgb::new(0xFF, 0xE1, 0x38),
    Rgb::new(0x38, 0x77, 0xFF),
];

/// Palette color for a cell value; `None` for empty or unknown values.
pub fn cell_color(cell: Cell) -> Option<Rgb> {
    match cell {
        1..=7 => Some(PALETTE[cell as usize - 1]),
        _ => None,
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the bordered board sits in the framebuffer.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square with typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let board_w = snap.board.width();
        let board_h = snap.board.height();
        let inner_w = board_w.saturating_mul(self.cell_w);
        let inner_h = board_h.saturating_mul(self.cell_h);
        let w = inner_w.saturating_add(2);
        let h = inner_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            inner_w,
            inner_h,
            ' ',
            CellStyle::plain(Rgb::new(80, 80, 90), PLAY_BG),
        );
        self.draw_border(fb, frame);

        // Settled cells.
        for (y, row) in snap.board.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                match cell_color(cell) {
                    Some(color) => self.draw_block(fb, frame, x as u16, y as u16, color),
                    None => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = &snap.active {
            if let Some(ghost_y) = snap.ghost_y.filter(|&gy| gy != active.y) {
                let ghost = CellStyle {
                    dim: true,
                    ..CellStyle::plain(Rgb::new(140, 140, 140), PLAY_BG)
                };
                for (x, y, _) in piece_cells(snap, active, ghost_y) {
                    self.fill_cell_rect(fb, frame, x, y, '░', ghost);
                }
            }
            for (x, y, color) in piece_cells(snap, active, active.y) {
                self.draw_block(fb, frame, x, y, color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.stats.paused {
            self.draw_overlay_text(fb, frame, "PAUSED");
        } else if snap.stats.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), PLAY_BG)
        };
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: Rgb) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(color, PLAY_BG)
        };
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = CellStyle { dim: true, ..value };

        let stats = &snap.stats;
        let mut y = frame.y;
        for (name, number) in [
            ("SCORE", stats.score),
            ("LEVEL", stats.level),
            ("LINES", stats.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "SPEED", label);
        fb.put_u32(panel_x, y + 1, stats.drop_interval_ms, value);
        fb.put_str(panel_x + 6, y + 1, "ms", hint);
        y = y.saturating_add(3);

        for line in [
            "<- -> move",
            "up/x  cw",
            "z     ccw",
            "down  soft",
            "space hard",
            "p pause",
            "r reset",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG)
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// On-board cells of `active` with its matrix top at row `top`.
fn piece_cells<'a>(
    snap: &'a GameSnapshot,
    active: &'a ActiveSnapshot,
    top: i32,
) -> impl Iterator<Item = (u16, u16, Rgb)> + 'a {
    let board_w = snap.board.width() as i32;
    let board_h = snap.board.height() as i32;
    active.matrix.filled().filter_map(move |(mx, my, cell)| {
        let x = active.x + mx;
        let y = top + my;
        if x < 0 || x >= board_w || y < 0 || y >= board_h {
            return None;
        }
        cell_color(cell).map(|color| (x as u16, y as u16, color))
    })
}
