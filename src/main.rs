//! Terminal Tetris runner.
//!
//! Reads configuration, sets up file logging, then drives a [`Session`] with
//! crossterm events and the descent timer until the player quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{error, info};

use tuitris::config::Config;
use tuitris::core::GameState;
use tuitris::highscore::HighScoreStore;
use tuitris::logging;
use tuitris::session::{Flow, Session};
use tuitris::term::{FrameBuffer, TerminalRenderer, Viewport};

/// Poll timeout when no descent is scheduled (paused or game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env().apply_args(&args)?;
    logging::init(&config)?;

    let seed = config.seed_or_clock();
    info!(seed, highscores = %config.highscore_path.display(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "exiting with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let store = HighScoreStore::new(&config.highscore_path);
    let mut session = Session::new(GameState::new(seed), store, now_ms());
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        // Render.
        if dirty {
            let viewport = term.viewport().unwrap_or(Viewport::new(80, 24));
            session.render_into(viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until the next descent.
        let timeout = session
            .timeout_ms(now_ms())
            .map(Duration::from_millis)
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if session.handle_key(key, now_ms()) == Flow::Quit {
                        info!(score = session.game().score(), "quit");
                        return Ok(());
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if session.tick(now_ms()) {
            dirty = true;
        }
    }
}
