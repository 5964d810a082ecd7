//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain values with no external dependencies, so the engine,
//! the renderer and the input mapper can share them freely.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (4, 0), rotation 0
//!
//! # Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_SCORES` | `[0, 100, 300, 500, 800]` | Points per lock, by rows cleared, times level |
//! | `HARD_DROP_POINTS_PER_ROW` | 2 | Points per row descended by a hard drop |
//! | `LINES_PER_LEVEL` | 10 | Rows cleared per level step |
//! | `BASE_DROP_MS` | 1000 | Descent interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Interval floor |
//! | `WALL_KICK_OFFSETS` | `[-1, 1, -2, 2]` | Horizontal nudges tried after a failed rotation |
//!
//! These are fixed design parameters, not runtime configuration.
//!
//! # Examples
//!
//! ```
//! use tuitris_types::{Cell, Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let cell = Cell::filled(Color::Magenta);
//! assert!(cell.is_filled());
//! assert_eq!(cell.color(), Some(Color::Magenta));
//! assert!(!Cell::EMPTY.is_filled());
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn point for every new active piece.
pub const SPAWN_POSITION: Position = Position::new(4, 0);

/// Horizontal nudges tried, in order, when a rotation is blocked in place.
pub const WALL_KICK_OFFSETS: [i8; 4] = [-1, 1, -2, 2];

/// Line clear scoring table, indexed by rows cleared in one lock (0..=4).
///
/// The value is multiplied by the level that was in effect while the piece
/// was falling.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points awarded per row descended by a hard drop.
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Cleared rows needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Descent interval at level 1 (1000ms = one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Descent interval reduction per level.
pub const DROP_STEP_MS: u32 = 100;

/// Descent interval floor (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;


/// The seven tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in the order the uniform selector indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tuitris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case letter used by the side panel and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Display color of a piece and of the cells it locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Magenta,
    Green,
    Red,
    Blue,
    White,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Cyan,
        Color::Yellow,
        Color::Magenta,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::White,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::White => "white",
        }
    }
}

/// A cell on the game board
///
/// A cell is either empty or filled with exactly one color; the color is
/// present iff the cell is filled, which the representation enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(Option<Color>);

impl Cell {
    pub const EMPTY: Cell = Cell(None);

    pub const fn filled(color: Color) -> Self {
        Cell(Some(color))
    }

    pub const fn is_filled(&self) -> bool {
        self.0.is_some()
    }

    pub const fn color(&self) -> Option<Color> {
        self.0
    }
}

/// Board-relative integer offset, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Player or timer intents accepted by the engine.
///
/// Restart and quit are driver-level and live with the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    MoveDown,
    /// Advance to the next rotation state, with horizontal wall kicks
    Rotate,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Toggle pause state
    TogglePause,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tuitris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "togglepause" => Some(GameAction::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::TogglePause => "togglePause",
        }
    }
}
