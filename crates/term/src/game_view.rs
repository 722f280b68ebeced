//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The world column is scaled to fit the viewport. Terminal glyphs are roughly
//! twice as tall as they are wide, so by default one row covers the same world
//! distance as two columns.

use crate::core::{Cloud, GameSnapshot, Platform, Player};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PlatformKind, PLAYER_H, PLAYER_W, WORLD_HEIGHT, WORLD_WIDTH};

/// Platforms further than this outside the screen are not drawn.
const PLATFORM_DRAW_MARGIN: f32 = 40.0;

/// Smallest playfield worth drawing.
const MIN_FIELD_ROWS: u16 = 6;

const SKY: Rgb = Rgb::new(96, 160, 224);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Where the playfield and side panel land inside a viewport.
///
/// `x`/`y` is the top-left corner of the border; the field interior starts one
/// cell in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    pub x: u16,
    pub y: u16,
    pub field_w: u16,
    pub field_h: u16,
    pub panel_x: Option<u16>,
}

impl FieldLayout {
    /// Fit the world into `viewport`. `None` if the terminal is too small.
    pub fn compute(viewport: Viewport, cols_per_row: u16, panel_w: u16) -> Option<Self> {
        let avail_w = viewport.width.saturating_sub(2);
        let avail_h = viewport.height.saturating_sub(2);
        let cols_per_world_row = cols_per_row.max(1) as f32 * WORLD_WIDTH / WORLD_HEIGHT;

        let field_h = avail_h.min((avail_w as f32 / cols_per_world_row).floor() as u16);
        if field_h < MIN_FIELD_ROWS {
            return None;
        }
        let field_w = ((field_h as f32 * cols_per_world_row).round() as u16).min(avail_w);

        let frame_w = field_w + 2;
        let frame_h = field_h + 2;
        let with_panel = frame_w + 1 + panel_w;
        let has_panel = panel_w > 0 && with_panel <= viewport.width;
        let block_w = if has_panel { with_panel } else { frame_w };

        let x = (viewport.width - block_w) / 2;
        let y = (viewport.height - frame_h) / 2;
        Some(Self {
            x,
            y,
            field_w,
            field_h,
            panel_x: has_panel.then(|| x + frame_w + 1),
        })
    }

    pub fn frame_w(&self) -> u16 {
        self.field_w + 2
    }

    pub fn frame_h(&self) -> u16 {
        self.field_h + 2
    }

    /// Field column of a world `x`.
    pub fn col(&self, world_x: f32) -> i32 {
        (world_x * self.field_w as f32 / WORLD_WIDTH).floor() as i32
    }

    /// Field row of a screen-space `y`.
    pub fn row(&self, screen_y: f32) -> i32 {
        (screen_y * self.field_h as f32 / WORLD_HEIGHT).floor() as i32
    }

    /// World units covered by one row.
    pub fn row_height(&self) -> f32 {
        WORLD_HEIGHT / self.field_h as f32
    }

    /// Terminal position of a field cell, if it lies inside the field.
    pub fn to_screen(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        if col < 0 || row < 0 || col >= self.field_w as i32 || row >= self.field_h as i32 {
            return None;
        }
        Some((self.x + 1 + col as u16, self.y + 1 + row as u16))
    }
}

/// A lightweight terminal renderer for the jumper.
pub struct GameView {
    /// Terminal columns per row of equal world distance.
    cols_per_row: u16,
    panel_w: u16,
    clouds: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cols_per_row: 2,
            panel_w: 14,
            clouds: true,
        }
    }
}

impl GameView {
    pub fn new(cols_per_row: u16) -> Self {
        Self {
            cols_per_row,
            ..Self::default()
        }
    }

    pub fn with_panel_width(mut self, panel_w: u16) -> Self {
        self.panel_w = panel_w;
        self
    }

    pub fn with_clouds(mut self, clouds: bool) -> Self {
        self.clouds = clouds;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> Option<FieldLayout> {
        FieldLayout::compute(viewport, self.cols_per_row, self.panel_w)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let Some(layout) = self.layout(viewport) else {
            let style = CellStyle::default().bold();
            fb.put_str_centered(
                0,
                viewport.width,
                viewport.height / 2,
                "TERMINAL TOO SMALL",
                style,
            );
            return;
        };

        let sky = CellStyle::new(Rgb::new(80, 130, 190), SKY);
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.field_w,
            layout.field_h,
            ' ',
            sky,
        );
        self.draw_border(fb, &layout);

        if self.clouds {
            for cloud in snap.clouds.iter() {
                self.draw_cloud(fb, &layout, snap, cloud);
            }
        }
        for plat in snap.platforms.iter() {
            if snap.on_screen(plat.y, PLATFORM_DRAW_MARGIN) {
                self.draw_platform(fb, &layout, snap, plat);
            }
        }
        self.draw_player(fb, &layout, snap, &snap.player);

        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, snap, &layout, panel_x);
        } else {
            self.draw_inline_score(fb, snap, &layout);
        }

        if snap.game_over {
            self.draw_game_over(fb, snap, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &FieldLayout) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (x, y) = (layout.x, layout.y);
        let (w, h) = (layout.frame_w(), layout.frame_h());

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

    /// Paint a span of field cells in one row, clipped to the field.
    fn field_span(
        &self,
        fb: &mut FrameBuffer,
        layout: &FieldLayout,
        col0: i32,
        col1: i32,
        row: i32,
        ch: char,
        style: CellStyle,
    ) {
        if row < 0 || row >= layout.field_h as i32 {
            return;
        }
        let from = col0.max(0);
        let to = col1.min(layout.field_w as i32 - 1);
        for col in from..=to {
            if let Some((sx, sy)) = layout.to_screen(col, row) {
                fb.put_char(sx, sy, ch, style);
            }
        }
    }

    fn draw_cloud(
        &self,
        fb: &mut FrameBuffer,
        layout: &FieldLayout,
        snap: &GameSnapshot,
        c: &Cloud,
    ) {
        let style = CellStyle::new(Rgb::new(245, 250, 255), SKY);
        let cy = snap.screen_y(c.y);
        let top = layout.row(cy - c.r * 0.55);
        let bottom = layout.row(cy + c.r * 0.45);
        let row_h = layout.row_height();

        for row in top..=bottom {
            let mid = (row as f32 + 0.5) * row_h;
            let t = ((mid - cy) / c.r).clamp(-1.0, 1.0);
            let half = c.r * (1.0 - t * t).sqrt();
            self.field_span(
                fb,
                layout,
                layout.col(c.x - half),
                layout.col(c.x + half),
                row,
                '░',
                style,
            );
        }
    }

    fn draw_platform(
        &self,
        fb: &mut FrameBuffer,
        layout: &FieldLayout,
        snap: &GameSnapshot,
        plat: &Platform,
    ) {
        let style = platform_style(plat.kind);
        let row = layout.row(snap.screen_y(plat.top()));
        let col0 = layout.col(plat.left());
        let col1 = (layout.col(plat.right()) - 1).max(col0);
        self.field_span(fb, layout, col0, col1, row, '▀', style);
    }

    fn draw_player(
        &self,
        fb: &mut FrameBuffer,
        layout: &FieldLayout,
        snap: &GameSnapshot,
        p: &Player,
    ) {
        let body = CellStyle::new(Rgb::new(31, 42, 68), SKY).bold();
        let sy = snap.screen_y(p.y);
        let row0 = layout.row(sy);
        let row1 = (layout.row(sy + PLAYER_H) - 1).max(row0);
        let col0 = layout.col(p.x);
        let col1 = (layout.col(p.x + PLAYER_W) - 1).max(col0);

        for row in row0..=row1 {
            self.field_span(fb, layout, col0, col1, row, '█', body);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &FieldLayout,
        panel_x: u16,
    ) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "BEST", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.best, value);
        y += 2;

        if y + 3 < layout.y + layout.frame_h() {
            fb.put_str(panel_x, y, "←/→ A/D move", hint);
            fb.put_str(panel_x, y + 1, "R restart", hint);
            fb.put_str(panel_x, y + 2, "Q quit", hint);
        }
    }

    fn draw_inline_score(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &FieldLayout) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_char(layout.x + 1, layout.y, ' ', style);
        fb.put_u32(layout.x + 2, layout.y, snap.score, style);
        fb.put_char(layout.x + 2 + digit_count(snap.score), layout.y, ' ', style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &FieldLayout) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let text = CellStyle::new(Rgb::new(230, 230, 230), PANEL_BG);
        let x = layout.x + 1;
        let w = layout.field_w;
        let mid = layout.y + 1 + layout.field_h / 2;

        fb.put_str_centered(x, w, mid.saturating_sub(2), "GAME OVER", title);

        // "Score: N  Best: M", assembled in place to stay allocation-free.
        let line_w = 7 + digit_count(snap.score) + 8 + digit_count(snap.best);
        let mut cx = x + w.saturating_sub(line_w) / 2;
        fb.put_str(cx, mid, "Score: ", text);
        cx += 7;
        fb.put_u32(cx, mid, snap.score, text);
        cx += digit_count(snap.score);
        fb.put_str(cx, mid, "  Best: ", text);
        cx += 8;
        fb.put_u32(cx, mid, snap.best, text);

        fb.put_str_centered(x, w, mid + 2, "Press R to restart", text);
    }
}

fn platform_style(kind: PlatformKind) -> CellStyle {
    match kind {
        PlatformKind::Normal => CellStyle::new(Rgb::new(255, 255, 255), SKY).bold(),
        PlatformKind::Bouncy => CellStyle::new(Rgb::new(190, 235, 255), SKY).bold(),
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
