//! GameView: maps a play session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GridState, PlaySession};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, EMPTY};

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

/// Everything the view draws, borrowed from a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub grid: &'a GridState,
    pub remaining_undos: usize,
    pub max_undos: usize,
    pub remaining_lives: u32,
    pub max_lives: u32,
    pub highest_number: Tile,
    pub goal: Tile,
    pub goal_reached: bool,
    pub game_over: bool,
    /// One-line status message (last rejection, stuck notice, save result)
    pub message: Option<&'a str>,
}

impl<'a> SessionView<'a> {
    pub fn of<R>(session: &'a PlaySession<R>) -> Self {
        let config = session.config();
        Self {
            grid: session.current(),
            remaining_undos: session.remaining_undos(),
            max_undos: config.max_undos(),
            remaining_lives: session.remaining_lives(),
            max_lives: config.max_lives(),
            highest_number: session.highest_number(),
            goal: config.goal(),
            goal_reached: session.goal_reached(),
            game_over: session.is_game_over(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the merge grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a 6-digit label with a margin and keeps tiles roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, view: &SessionView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let grid = view.grid;
        let board_px_w = (grid.width() as u16).saturating_mul(self.cell_w);
        let board_px_h = (grid.height() as u16).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        // Reserve one row under the frame for the status line.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, tiles) in grid.rows().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, col as u16, row as u16, tile);
            }
        }

        self.draw_side_panel(fb, view, viewport, start_x, start_y, frame_w);

        if let Some(message) = view.message {
            let style = CellStyle::new(Rgb::new(240, 200, 120), PANEL_BG);
            fb.put_str(start_x, start_y.saturating_add(frame_h), message, style);
        }

        if view.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, view: &SessionView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, col: u16, row: u16, tile: Tile) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(col.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(row.saturating_mul(self.cell_h));

        if tile == EMPTY {
            let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_char(
                px.saturating_add(self.cell_w / 2),
                py.saturating_add(self.cell_h / 2),
                '·',
                style,
            );
            return;
        }

        let style = tile_style(tile);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let label = tile_label(tile);
        let label_w = label.chars().count() as u16;
        let lx = px.saturating_add(self.cell_w.saturating_sub(label_w) / 2);
        let ly = py.saturating_add(self.cell_h / 2);
        for (i, ch) in label.chars().take(self.cell_w as usize).enumerate() {
            fb.put_char(lx.saturating_add(i as u16), ly, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        view: &SessionView<'_>,
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
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, view.grid.score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, u64::from(view.highest_number), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GOAL", label);
        y = y.saturating_add(1);
        let end = fb.put_u64(panel_x, y, u64::from(view.goal), value);
        if view.goal_reached {
            fb.put_char(end.saturating_add(1), y, '✓', value.bold());
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "UNDO", label);
        y = y.saturating_add(1);
        self.put_fraction(fb, panel_x, y, view.remaining_undos as u64, view.max_undos as u64, value, dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LIVES", label);
        y = y.saturating_add(1);
        if view.max_lives <= u32::from(panel_w) {
            let alive = CellStyle::new(Rgb::new(230, 80, 90), PANEL_BG);
            for i in 0..view.max_lives {
                let (ch, style) = if i < view.remaining_lives {
                    ('♥', alive)
                } else {
                    ('♡', dim)
                };
                fb.put_char(panel_x.saturating_add(i as u16), y, ch, style);
            }
        } else {
            self.put_fraction(
                fb,
                panel_x,
                y,
                u64::from(view.remaining_lives),
                u64::from(view.max_lives),
                value,
                dim,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn put_fraction(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        current: u64,
        max: u64,
        value: CellStyle,
        dim: CellStyle,
    ) {
        let slash = fb.put_u64(x, y, current, value);
        let end = fb.put_str(slash, y, "/", dim);
        fb.put_u64(end, y, max, dim);
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Tile text, shortened with a `k`/`M` suffix once it no longer fits six columns.
pub fn tile_label(tile: Tile) -> String {
    match tile {
        0..=999_999 => tile.to_string(),
        1_000_000..=999_999_999 => format!("{}k", tile / 1_000),
        _ => format!("{}M", tile / 1_000_000),
    }
}

fn tile_style(tile: Tile) -> CellStyle {
    // Colors cycle by exponent so arbitrary spawn sets still get distinct shades.
    let exp = if tile == 0 { 0 } else { 31 - tile.leading_zeros() };
    let bg = match exp % 11 {
        1 => Rgb::new(238, 228, 218),
        2 => Rgb::new(237, 224, 200),
        3 => Rgb::new(242, 177, 121),
        4 => Rgb::new(245, 149, 99),
        5 => Rgb::new(246, 124, 95),
        6 => Rgb::new(246, 94, 59),
        7 => Rgb::new(237, 207, 114),
        8 => Rgb::new(237, 204, 97),
        9 => Rgb::new(237, 200, 80),
        10 => Rgb::new(237, 197, 63),
        _ => Rgb::new(60, 58, 50),
    };
    let fg = if exp <= 2 {
        Rgb::new(119, 110, 101)
    } else {
        Rgb::new(249, 246, 242)
    };
    CellStyle::new(fg, bg).bold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedRng, SessionConfig};
    use crate::types::Direction;

    fn session(rows: &[Vec<Tile>], lives: u32) -> PlaySession<ScriptedRng> {
        let config = SessionConfig::builder()
            .size(rows.len(), rows[0].len())
            .max_lives(lives)
            .spawnables([8])
            .build()
            .unwrap();
        let grid = GridState::from_rows(rows, 0).unwrap();
        PlaySession::from_grid(config, grid, ScriptedRng::new(vec![0])).unwrap()
    }

    fn screen(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_draws_tiles_and_panel() {
        let session = session(&[vec![2, 0], vec![0, 2048]], 3);
        let fb = GameView::default().render(&SessionView::of(&session), Viewport::new(60, 20));
        let text = screen(&fb);

        assert!(text.contains("2048"));
        assert!(text.contains("SCORE"));
        assert!(text.contains("BEST TILE"));
        assert!(text.contains("UNDO"));
        assert!(text.contains("0/3"));
        assert!(text.contains("♥♥♥"));
        assert!(text.contains('┌'));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_render_shows_message_and_game_over() {
        let mut session = session(&[vec![2, 4], vec![16, 0]], 1);
        session.apply_move(Direction::Right).unwrap();
        assert!(session.is_game_over());

        let view = SessionView::of(&session).with_message(Some("no moves left"));
        let text = screen(&GameView::default().render(&view, Viewport::new(60, 20)));

        assert!(text.contains("GAME OVER"));
        assert!(text.contains("no moves left"));
        assert!(text.contains('♡'));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let session = session(&[vec![2, 4], vec![8, 16]], 3);
        let view = SessionView::of(&session).with_message(Some("hello"));
        for (w, h) in [(0, 0), (1, 1), (5, 3), (12, 4)] {
            let fb = GameView::default().render(&view, Viewport::new(w, h));
            assert_eq!(fb.width(), w);
            assert_eq!(fb.height(), h);
        }
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let session = session(&[vec![2, 0], vec![0, 0]], 3);
        let view = SessionView::of(&session);
        let mut fb = FrameBuffer::new(10, 10);

        GameView::new(4, 1).render_into(&view, Viewport::new(40, 8), &mut fb);
        assert_eq!((fb.width(), fb.height()), (40, 8));
        assert!(screen(&fb).contains('2'));
    }

    #[test]
    fn test_tile_label() {
        assert_eq!(tile_label(2), "2");
        assert_eq!(tile_label(131_072), "131072");
        assert_eq!(tile_label(2_097_152), "2097k");
        assert_eq!(tile_label(2_147_483_648), "2147M");
    }
}
