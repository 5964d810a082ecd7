//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`InputCommand`]s. Game intents wrap a
//! [`crate::types::GameAction`]; restart and quit are handled by the driver and
//! never reach the engine.

pub mod map;

pub use tuitris_types as types;

pub use map::{map_key_event, should_quit, InputCommand};
