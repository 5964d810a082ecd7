//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActivePiece, Board, GameState, Piece, Randomizer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Smallest terminal the game view is laid out for.
pub const MIN_VIEWPORT: Viewport = Viewport::new(50, 25);

/// Width reserved for the side panel, gap included.
const PANEL_W: u16 = 20;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True when both dimensions reach `min`.
    pub fn fits(&self, min: Viewport) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

/// Lowest position the active piece reaches by repeated one-row descent.
///
/// Pure projection used for the ghost; the state is not touched.
pub fn ghost_position(board: &Board, active: &ActivePiece) -> Position {
    let shape = active.shape();
    let mut position = active.position;
    while board.is_valid_position(shape, position.offset(0, 1)) {
        position = position.offset(0, 1);
    }
    position
}

/// Rotation 0 of `piece` shifted into the top-left of a 4x4 grid.
pub fn preview_grid(piece: &Piece) -> [[bool; 4]; 4] {
    let shape = piece.shape(0);
    let min_x = shape.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
    let min_y = shape.iter().map(|&(_, dy)| dy).min().unwrap_or(0);

    let mut grid = [[false; 4]; 4];
    for &(dx, dy) in shape {
        let x = (dx - min_x) as usize;
        let y = (dy - min_y) as usize;
        if x < 4 && y < 4 {
            grid[y][x] = true;
        }
    }
    grid
}

/// Display color for a piece color.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Magenta => Rgb::new(200, 120, 220),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::White => Rgb::new(235, 235, 235),
    }
}

/// A lightweight terminal renderer for the playfield screen.
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
    fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into<R: Randomizer>(
        &self,
        state: &GameState<R>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        if !viewport.fits(MIN_VIEWPORT) {
            draw_too_small(fb, viewport);
            return;
        }

        let (frame_w, frame_h) = self.frame_size();
        let total_w = frame_w + PANEL_W;
        // One title row above the frame.
        let total_h = frame_h + 1;

        let origin_x = viewport.width.saturating_sub(total_w) / 2;
        let origin_y = viewport.height.saturating_sub(total_h) / 2;
        let start_x = origin_x;
        let start_y = origin_y + 1;

        fb.put_str(
            start_x,
            origin_y,
            "TUITRIS",
            CellStyle::fg(color_rgb(Color::Cyan)).bold(),
        );

        self.draw_board(fb, state, start_x, start_y, frame_w, frame_h);
        self.draw_side_panel(fb, state, start_x + frame_w + 2, start_y);

        if state.paused() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if state.game_over() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: Randomizer>(&self, state: &GameState<R>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_board<R: Randomizer>(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState<R>,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        let empty = CellStyle::fg(Rgb::new(90, 90, 100)).on(BOARD_BG).dim();

        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let board = state.board();
        for (y, row) in board.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell.color() {
                    Some(color) => self.draw_block(fb, start_x, start_y, x as i8, y as i8, color),
                    None => self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '·', empty),
                }
            }
        }

        let active = state.active();

        // Ghost only when it would not sit under the piece itself.
        let ghost = ghost_position(board, active);
        if !state.game_over() && ghost.y != active.position.y {
            let style = CellStyle::fg(color_rgb(active.color())).on(BOARD_BG).dim();
            for &(dx, dy) in active.shape() {
                let p = ghost.offset(dx, dy);
                if board.get(p.x, p.y).is_some() {
                    self.fill_cell_rect(fb, start_x, start_y, p.x as u16, p.y as u16, '▓', style);
                }
            }
        }

        for p in active.cells() {
            self.draw_block(fb, start_x, start_y, p.x, p.y, active.color());
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, color: Color) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let style = CellStyle::fg(color_rgb(color)).on(BOARD_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '█', style);
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

    fn draw_side_panel<R: Randomizer>(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState<R>,
        panel_x: u16,
        start_y: u16,
    ) {
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let help = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "Next", label);
        y += 1;

        let next = state.next_piece();
        let block = CellStyle::fg(color_rgb(next.color));
        for row in preview_grid(next) {
            for (i, filled) in row.into_iter().enumerate() {
                let x = panel_x + (i as u16) * 2;
                if filled {
                    fb.put_str(x, y, "██", block);
                }
            }
            y += 1;
        }
        y += 1;

        fb.put_str(panel_x, y, "Stats", label);
        y += 1;
        for (name, n) in [
            ("Score: ", state.score()),
            ("Lines: ", state.lines()),
            ("Level: ", state.level()),
        ] {
            let x = fb.put_str(panel_x, y, name, value);
            fb.put_u32(x, y, n, value);
            y += 1;
        }
        y += 1;

        for line in [
            "Controls:",
            "←→ Move",
            "↑ Rotate",
            "↓ Soft drop",
            "Space Hard drop",
            "P Pause",
            "R Restart",
            "Q Quit",
        ] {
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let style = CellStyle::fg(color_rgb(Color::Yellow)).bold();
    fb.put_str_centered(start_x, frame_w, mid_y, text, style);
}

/// The message shown instead of the game when the terminal is too small.
pub fn draw_too_small(fb: &mut FrameBuffer, viewport: Viewport) {
    let warn = CellStyle::fg(color_rgb(Color::Red)).bold();
    let plain = CellStyle::default();

    fb.put_str(0, 0, "Terminal too small!", warn);

    let x = fb.put_str(0, 1, "Minimum size: ", plain);
    let x = fb.put_u32(x, 1, MIN_VIEWPORT.width as u32, plain);
    let x = fb.put_str(x, 1, "x", plain);
    fb.put_u32(x, 1, MIN_VIEWPORT.height as u32, plain);

    let x = fb.put_str(0, 2, "Current size: ", plain);
    let x = fb.put_u32(x, 2, viewport.width as u32, plain);
    let x = fb.put_str(x, 2, "x", plain);
    fb.put_u32(x, 2, viewport.height as u32, plain);

    fb.put_str(0, 4, "Please resize your terminal window", plain.dim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece_for;
    use crate::types::PieceKind;

    #[test]
    fn test_ghost_on_empty_board_lands_on_floor() {
        let state = GameState::new(3);
        let active = *state.active();
        let ghost = ghost_position(state.board(), &active);

        let lowest = active.shape().iter().map(|&(_, dy)| dy).max().unwrap_or(0);
        assert_eq!(ghost.x, active.position.x);
        assert_eq!(ghost.y + lowest, BOARD_HEIGHT as i8 - 1);
    }

    #[test]
    fn test_ghost_stops_above_stack() {
        let board = Board::new().set(4, 10, crate::types::Cell::filled(Color::Red));
        let active = ActivePiece::spawn(piece_for(PieceKind::O));
        // O covers (4..=5, y..=y+1), so it rests with its bottom on row 9.
        assert_eq!(ghost_position(&board, &active), Position::new(4, 8));
    }

    #[test]
    fn test_preview_grid_normalizes_bounds() {
        let i = preview_grid(piece_for(PieceKind::I));
        assert_eq!(i[0], [true, true, true, true]);
        assert!(i[1..].iter().all(|row| row.iter().all(|&c| !c)));

        let t = preview_grid(piece_for(PieceKind::T));
        assert_eq!(t[0], [true, true, true, false]);
        assert_eq!(t[1], [false, true, false, false]);

        let s = preview_grid(piece_for(PieceKind::S));
        assert_eq!(s[0], [false, true, true, false]);
        assert_eq!(s[1], [true, true, false, false]);
    }

    #[test]
    fn test_viewport_fits() {
        assert!(Viewport::new(50, 25).fits(MIN_VIEWPORT));
        assert!(Viewport::new(120, 40).fits(MIN_VIEWPORT));
        assert!(!Viewport::new(49, 25).fits(MIN_VIEWPORT));
        assert!(!Viewport::new(50, 24).fits(MIN_VIEWPORT));
    }
}
