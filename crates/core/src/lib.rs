//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule. It has **zero dependencies** on the
//! terminal, the file system or the clock, which makes it:
//!
//! - **Deterministic**: the same seed (or scripted randomizer) reproduces the
//!   same game, transition for transition
//! - **Value-oriented**: every transition consumes a [`GameState`] and returns
//!   the next one, so old snapshots stay valid
//! - **Total**: a rejected move is just the unchanged state; nothing panics
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks, locking and line clearing
//! - [`game_state`]: active piece, preview, score/lines/level and the phase
//! - [`pieces`]: static rotation tables for the seven tetrominoes
//! - [`rng`]: the injected [`Randomizer`] and the default LCG
//! - [`scoring`]: line clear points, hard drop points, level and drop speed
//!
//! # Rules
//!
//! - Uniform random piece selection, one piece of preview
//! - Rotation tries in place first, then horizontal nudges `-1, +1, -2, +2`
//! - A hard drop scores 2 points per row
//! - Line clears score `[0, 100, 300, 500, 800]` times the level the piece
//!   fell at; the level is `lines / 10 + 1`
//! - The game ends when a lock leaves anything in the top row
//!
//! # Example
//!
//! ```
//! use tuitris_core::GameState;
//! use tuitris_types::GameAction;
//!
//! let game = GameState::new(12345)
//!     .apply(GameAction::MoveRight)
//!     .apply(GameAction::Rotate)
//!     .apply(GameAction::HardDrop);
//!
//! // Hard drop awards points
//! assert!(game.score() > 0);
//! assert_eq!(game.level(), 1);
//! ```
//!
//! # Timing
//!
//! The engine owns no clock. The caller fires [`GameState::move_down`] every
//! [`GameState::drop_speed_ms`] milliseconds while the game is falling.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use tuitris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState, Phase};
pub use pieces::{piece_for, random_piece, Piece, PieceShape};
pub use rng::{Randomizer, SimpleRng};
pub use scoring::{drop_speed_ms, hard_drop_points, level_for_lines, line_clear_points};
