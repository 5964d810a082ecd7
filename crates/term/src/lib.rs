//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, rather than going through a widget/layout toolkit.
//!
//! - [`game_view`]: playfield, ghost, side panel and pause overlay
//! - [`game_over_view`]: final score, name prompt and high-score table
//! - [`renderer`]: diffing crossterm flush of a [`FrameBuffer`]

pub mod fb;
pub mod game_over_view;
pub mod game_view;
pub mod renderer;

pub use tuitris_core as core;
pub use tuitris_highscore as highscore;
pub use tuitris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_over_view::{GameOverView, NamePrompt};
pub use game_view::{ghost_position, preview_grid, GameView, Viewport, MIN_VIEWPORT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
