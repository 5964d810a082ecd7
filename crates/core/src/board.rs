//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a color.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! `Board` is a small `Copy` value. Every structural operation returns a new
//! board and leaves its receiver untouched, so two game snapshots never alias
//! the same grid.

use arrayvec::ArrayVec;

use crate::pieces::PieceShape;
use crate::types::{Cell, Color, Position, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One board row, left to right.
pub type Row = [Cell; WIDTH];

/// The game board - 20 rows of 10 cells, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[Cell::EMPTY; WIDTH]; HEIGHT],
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn rows(&self) -> &[Row; HEIGHT] {
        &self.rows
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if Self::in_bounds(x, y) {
            Some(self.rows[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Copy of this board with one cell replaced.
    /// Out-of-bounds coordinates return the board unchanged.
    pub fn set(&self, x: i8, y: i8, cell: Cell) -> Self {
        let mut next = *self;
        if Self::in_bounds(x, y) {
            next.rows[y as usize][x as usize] = cell;
        }
        next
    }

    /// Whether `shape` placed at `position` fits.
    ///
    /// Blocks outside the side walls or below the floor fail. Blocks above
    /// the top edge (`y < 0`) always pass regardless of board contents, so a
    /// freshly spawned piece may poke out above the visible area.
    pub fn is_valid_position(&self, shape: &PieceShape, position: Position) -> bool {
        shape.iter().all(|&(dx, dy)| {
            let x = position.x + dx;
            let y = position.y + dy;

            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return false;
            }

            y < 0 || !self.rows[y as usize][x as usize].is_filled()
        })
    }

    /// Lock a piece onto a copy of the board.
    ///
    /// In-range blocks become filled with `color`; blocks outside the grid
    /// (normally only `y < 0`) are dropped.
    pub fn lock_piece(&self, shape: &PieceShape, position: Position, color: Color) -> Self {
        let mut next = *self;
        for &(dx, dy) in shape {
            let x = position.x + dx;
            let y = position.y + dy;
            if Self::in_bounds(x, y) {
                next.rows[y as usize][x as usize] = Cell::filled(color);
            }
        }
        next
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_filled()))
    }

    /// Indices of every full row, top to bottom.
    pub fn full_rows(&self) -> ArrayVec<usize, HEIGHT> {
        (0..HEIGHT).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove every full row and return the compacted board with the count.
    ///
    /// Surviving rows keep their relative order and sink to the bottom; the
    /// same number of empty rows is inserted at the top.
    pub fn clear_lines(&self) -> (Self, usize) {
        let mut next = Self::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top, copying survivors downward.
        for read_y in (0..HEIGHT).rev() {
            if !self.is_row_full(read_y) {
                write_y -= 1;
                next.rows[write_y] = self.rows[read_y];
            }
        }

        (next, write_y)
    }

    /// True iff any cell in the top row is filled.
    pub fn is_game_over(&self) -> bool {
        self.rows[0].iter().any(|cell| cell.is_filled())
    }

    /// Number of filled cells, for logging and tests.
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_filled())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const O_SHAPE: PieceShape = [(0, 0), (1, 0), (0, 1), (1, 1)];

    fn fill_row(board: Board, y: i8, color: Color) -> Board {
        (0..BOARD_WIDTH as i8).fold(board, |b, x| b.set(x, y, Cell::filled(color)))
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_game_over());
        assert_eq!(board.rows().len(), 20);
        assert!(board.rows().iter().all(|row| row.len() == 10));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(10, 0), None);
        assert_eq!(board.get(0, 20), None);
        assert_eq!(board.get(9, 19), Some(Cell::EMPTY));
    }

    #[test]
    fn test_set_returns_new_board() {
        let board = Board::new();
        let next = board.set(5, 10, Cell::filled(Color::Red));
        assert_eq!(board.get(5, 10), Some(Cell::EMPTY));
        assert_eq!(next.get(5, 10), Some(Cell::filled(Color::Red)));
        assert_eq!(board.set(-1, 0, Cell::filled(Color::Red)), board);
    }

    #[test]
    fn test_valid_position_walls_and_floor() {
        let board = Board::new();
        assert!(board.is_valid_position(&O_SHAPE, Position::new(0, 0)));
        assert!(board.is_valid_position(&O_SHAPE, Position::new(8, 18)));
        assert!(!board.is_valid_position(&O_SHAPE, Position::new(-1, 0)));
        assert!(!board.is_valid_position(&O_SHAPE, Position::new(9, 0)));
        assert!(!board.is_valid_position(&O_SHAPE, Position::new(0, 19)));
    }

    #[test]
    fn test_valid_position_above_board_ignores_contents() {
        let board = fill_row(Board::new(), 0, Color::Blue);
        assert!(board.is_valid_position(&O_SHAPE, Position::new(4, -2)));
        assert!(!board.is_valid_position(&O_SHAPE, Position::new(4, -1)));
    }

    #[test]
    fn test_valid_position_collides_with_filled() {
        let board = Board::new().set(5, 10, Cell::filled(Color::Green));
        assert!(!board.is_valid_position(&O_SHAPE, Position::new(4, 9)));
        assert!(board.is_valid_position(&O_SHAPE, Position::new(6, 9)));
    }

    #[test]
    fn test_lock_piece_drops_out_of_range_blocks() {
        let board = Board::new();
        let locked = board.lock_piece(&O_SHAPE, Position::new(3, -1), Color::Yellow);
        assert_eq!(locked.filled_count(), 2);
        assert_eq!(locked.get(3, 0), Some(Cell::filled(Color::Yellow)));
        assert_eq!(locked.get(4, 0), Some(Cell::filled(Color::Yellow)));
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_clear_lines_none() {
        let board = Board::new().set(0, 19, Cell::filled(Color::Red));
        let (cleared, count) = board.clear_lines();
        assert_eq!(count, 0);
        assert_eq!(cleared, board);
    }

    #[test]
    fn test_clear_lines_shifts_rows_down() {
        let board = fill_row(Board::new(), 19, Color::Cyan).set(2, 18, Cell::filled(Color::Red));
        let (cleared, count) = board.clear_lines();
        assert_eq!(count, 1);
        assert_eq!(cleared.get(2, 19), Some(Cell::filled(Color::Red)));
        assert_eq!(cleared.filled_count(), 1);
    }

    #[test]
    fn test_full_rows() {
        let board = fill_row(fill_row(Board::new(), 3, Color::Red), 7, Color::Red);
        assert_eq!(board.full_rows().as_slice(), &[3, 7]);
    }

    #[test]
    fn test_game_over_top_row() {
        assert!(Board::new().set(9, 0, Cell::filled(Color::White)).is_game_over());
        assert!(!Board::new().set(9, 1, Cell::filled(Color::White)).is_game_over());
    }
}
