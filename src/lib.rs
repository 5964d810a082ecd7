//! Tuitris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! that only the binary needs: configuration, logging setup, the descent timer
//! and the session driver.

pub mod config;
pub mod logging;
pub mod session;
pub mod timer;

pub use tuitris_core as core;
pub use tuitris_highscore as highscore;
pub use tuitris_input as input;
pub use tuitris_term as term;
pub use tuitris_types as types;
