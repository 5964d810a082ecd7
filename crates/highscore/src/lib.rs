//! High-score persistence.
//!
//! A JSON array of `{ name, score, date }` entries kept on disk, best first,
//! at most [`MAX_ENTRIES`] long. Reading never fails the game: a missing or
//! corrupt file is an empty table.

pub mod error;
pub mod store;

pub use error::HighScoreError;
pub use chrono::{DateTime, Utc};
pub use store::{qualifies, HighScore, HighScoreStore, DEFAULT_NAME, MAX_ENTRIES, MAX_NAME_LEN};
