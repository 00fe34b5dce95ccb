//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout (top to bottom): a row of warning lights, then the framed
//! tile grid; the side panel sits to the right of the frame when it fits.

use crate::core::{GameSnapshot, SubmitOutcome};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridPos, Lights};

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

/// Resolved on-screen placement of the board for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left of the frame border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top-left of tile (0, 0).
    pub tiles_x: u16,
    pub tiles_y: u16,
}

const DIAL_GLYPHS: [char; 8] = ['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];

const FRAME_BG: Rgb = Rgb::hex(0x1a2029);
const TILE_BG: Rgb = Rgb::hex(0xf8fbff);
const TILE_FG: Rgb = Rgb::hex(0x23303a);
const TILE_SELECTED_BG: Rgb = Rgb::hex(0xe9ffd6);
const TILE_CURSOR_BG: Rgb = Rgb::hex(0xcad3df);
const LIGHT_ON: Rgb = Rgb::hex(0xfff080);
const LIGHT_RED: Rgb = Rgb::hex(0xd92626);

/// A lightweight terminal renderer for the word grid.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Columns between neighbouring tiles.
    gutter: u16,
    anchor_y: AnchorY,
}

const HELP_LINE: &str = "space select  enter submit  esc clear  p pause  r new  q quit";

impl Default for GameView {
    fn default() -> Self {
        // 5x3 tiles look roughly square with typical terminal glyphs.
        Self {
            tile_w: 5,
            tile_h: 3,
            gutter: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Compute where a `rows x cols` board lands in `viewport`.
    pub fn layout(&self, rows: u8, cols: u8, viewport: Viewport) -> BoardLayout {
        let rows = rows as u16;
        let cols = cols as u16;
        let inner_w = cols * self.tile_w + cols.saturating_sub(1) * self.gutter;
        let inner_h = rows * self.tile_h;
        // Border plus one column of padding on each side.
        let frame_w = inner_w + 4;
        let frame_h = inner_h + 2;
        // One extra row above the frame for the lights.
        let total_h = frame_h + 1;

        let frame_x = viewport.width.saturating_sub(frame_w + self.panel_width()) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = top + 1;

        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            tiles_x: frame_x + 2,
            tiles_y: frame_y + 1,
        }
    }

    fn panel_width(&self) -> u16 {
        22
    }

    /// Map a terminal cell to the tile drawn there, if any.
    ///
    /// Gutters, padding and the border map to `None`.
    pub fn hit_test(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<GridPos> {
        let layout = self.layout(snap.grid.rows(), snap.grid.cols(), viewport);
        let dx = x.checked_sub(layout.tiles_x)?;
        let dy = y.checked_sub(layout.tiles_y)?;

        let pitch = self.tile_w + self.gutter;
        let col = dx / pitch;
        if dx % pitch >= self.tile_w {
            return None;
        }
        let row = dy / self.tile_h;

        let pos = GridPos::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?);
        snap.grid.contains(pos).then_some(pos)
    }

    /// Render the current round into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.grid.rows(), snap.grid.cols(), viewport);
        let frame_style = CellStyle::new(Rgb::new(200, 200, 200), FRAME_BG);

        fb.fill_rect(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            ' ',
            frame_style,
        );
        self.draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            frame_style,
        );
        self.draw_lights(fb, snap.lights, &layout);

        for (pos, letter) in snap.grid.iter() {
            self.draw_tile(fb, snap, &layout, pos, letter);
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        let help_y = layout.frame_y + layout.frame_h;
        if help_y < viewport.height {
            let dim = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)).dim();
            fb.put_str(layout.frame_x, help_y, HELP_LINE, dim);
        }

        if snap.paused {
            self.draw_overlay_text(fb, &layout, "PAUSED");
        } else if snap.round_over {
            self.draw_overlay_text(fb, &layout, "TIME UP");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_lights(&self, fb: &mut FrameBuffer, lights: Lights, layout: &BoardLayout) {
        let Some(y) = layout.frame_y.checked_sub(1) else {
            return;
        };
        let base = CellStyle::default();
        let style = match lights {
            Lights::Idle => CellStyle { fg: LIGHT_ON, ..base }.dim(),
            Lights::Warning => CellStyle { fg: LIGHT_ON, ..base }.bold(),
            Lights::Flash { red: true } => CellStyle { fg: LIGHT_RED, ..base }.bold(),
            Lights::Flash { red: false } => CellStyle { fg: LIGHT_ON, ..base }.bold(),
            Lights::Off => CellStyle { fg: Rgb::new(90, 90, 100), ..base }.dim(),
        };

        let mut x = layout.frame_x + 1;
        while x + 1 < layout.frame_x + layout.frame_w {
            fb.put_char(x, y, '●', style);
            x += 3;
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &BoardLayout,
        pos: GridPos,
        letter: char,
    ) {
        let px = layout.tiles_x + (pos.col as u16) * (self.tile_w + self.gutter);
        let py = layout.tiles_y + (pos.row as u16) * self.tile_h;

        let order = snap.selection.iter().position(|&p| p == pos);
        let is_cursor = snap.cursor == pos && snap.playable();
        let bg = match (order.is_some(), is_cursor) {
            (true, _) => TILE_SELECTED_BG,
            (false, true) => TILE_CURSOR_BG,
            (false, false) => TILE_BG,
        };
        let mut style = CellStyle::new(TILE_FG, bg).bold();
        if snap.round_over {
            style = style.dim();
        }

        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);
        fb.put_char(px + self.tile_w / 2, py + self.tile_h / 2, letter, style);

        // Path order in the top-left corner.
        if let Some(i) = order {
            let mark = CellStyle {
                bold: false,
                ..style
            };
            fb.put_u32(px, py, (i as u32) + 1, mark);
        }

        if is_cursor && self.tile_w >= 3 {
            let mid = py + self.tile_h / 2;
            fb.put_char(px, mid, '▶', style);
            fb.put_char(px + self.tile_w - 1, mid, '◀', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.frame_x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = layout.frame_y.saturating_sub(1);
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let secs = snap.remaining_ms.div_ceil(1000);
        let mut x = fb.put_2digits(panel_x, y, secs / 60, value);
        x = fb.put_str(x, y, ":", value);
        x = fb.put_2digits(x, y, secs % 60, value);
        fb.put_char(x + 1, y, dial_glyph(snap.dial), label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WORDS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.words, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WORD", label);
        y = y.saturating_add(1);
        if snap.current_word.is_empty() {
            fb.put_str(panel_x, y, "-", dim);
        } else {
            fb.put_str(panel_x, y, &snap.current_word, value);
        }
        y = y.saturating_add(1);
        if let Some(outcome) = &snap.last_outcome {
            self.draw_outcome(fb, panel_x, y, outcome);
        }
        y = y.saturating_add(2);

        let x = fb.put_str(panel_x, y, "ROUND ", label);
        let x = fb.put_u32(x, y, snap.round_id.saturating_add(1), value);
        let x = fb.put_str(x + 2, y, "SEED ", label);
        fb.put_u32(x, y, snap.seed, dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FOUND", label);
        y = y.saturating_add(1);
        for word in &snap.recent_words {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, word, value);
            y = y.saturating_add(1);
        }

    }

    fn draw_outcome(&self, fb: &mut FrameBuffer, x: u16, y: u16, outcome: &SubmitOutcome) {
        let good = CellStyle::new(Rgb::new(120, 220, 120), Rgb::new(0, 0, 0));
        let bad = CellStyle::new(Rgb::new(220, 120, 120), Rgb::new(0, 0, 0));
        match outcome {
            SubmitOutcome::Accepted { word, points } => {
                let cx = fb.put_str(x, y, "+", good);
                let cx = fb.put_u32(cx, y, *points, good);
                fb.put_str(cx + 1, y, word, good);
            }
            SubmitOutcome::AlreadyFound { word } => {
                let cx = fb.put_str(x, y, word, bad);
                fb.put_str(cx + 1, y, "(again)", bad);
            }
            SubmitOutcome::UnknownWord { word } => {
                let cx = fb.put_str(x, y, word, bad);
                fb.put_str(cx + 1, y, "(unknown)", bad);
            }
            SubmitOutcome::InvalidPath => {
                fb.put_str(x, y, "invalid path", bad);
            }
            SubmitOutcome::Empty => {}
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .frame_x
            .saturating_add(layout.frame_w.saturating_sub(text_w + 2) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_char(x, mid_y, ' ', style);
        let end = fb.put_str(x + 1, mid_y, text, style);
        fb.put_char(end, mid_y, ' ', style);
    }
}

/// Dial hand for a fraction of a full turn, in eight steps.
pub fn dial_glyph(fraction: f32) -> char {
    let step = (fraction.rem_euclid(1.0) * 8.0).round() as usize % 8;
    DIAL_GLYPHS[step]
}
