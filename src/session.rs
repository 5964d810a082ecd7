//! Session driver: one game plus everything around it.
//!
//! Owns the current [`GameState`], the descent timer, the high-score store and
//! the game-over name prompt. Every key press and timer firing becomes at most
//! one engine transition; the driver then re-syncs the timer and, when the
//! game has just ended, opens the game-over screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error, info};

use crate::core::{GameState, Randomizer, SimpleRng};
use crate::highscore::{qualifies, HighScore, HighScoreStore, MAX_NAME_LEN};
use crate::input::{map_key_event, should_quit, InputCommand};
use crate::term::{FrameBuffer, GameOverView, GameView, NamePrompt, Viewport};
use crate::timer::DescentTimer;
use crate::types::GameAction;

/// What the main loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryStatus {
    Editing,
    Saved,
    SaveFailed,
    NotQualified,
}

/// Game-over screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GameOverScreen {
    name: String,
    status: EntryStatus,
}

impl GameOverScreen {
    fn prompt(&self) -> NamePrompt<'_> {
        match self.status {
            EntryStatus::Editing => NamePrompt::Editing(&self.name),
            EntryStatus::Saved => NamePrompt::Saved,
            EntryStatus::SaveFailed => NamePrompt::SaveFailed,
            EntryStatus::NotQualified => NamePrompt::NotQualified,
        }
    }
}

pub struct Session<R = SimpleRng> {
    game: GameState<R>,
    timer: DescentTimer,
    store: HighScoreStore,
    high_scores: Vec<HighScore>,
    over: Option<GameOverScreen>,
    game_view: GameView,
    over_view: GameOverView,
}

impl<R: Randomizer + Clone> Session<R> {
    pub fn new(game: GameState<R>, store: HighScoreStore, now_ms: u64) -> Self {
        let high_scores = store.load();
        let mut timer = DescentTimer::new();
        timer.sync(&game, now_ms);

        Self {
            game,
            timer,
            store,
            high_scores,
            over: None,
            game_view: GameView::default(),
            over_view: GameOverView,
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn high_scores(&self) -> &[HighScore] {
        &self.high_scores
    }

    /// The name prompt state; `None` while a game is running.
    pub fn prompt(&self) -> Option<NamePrompt<'_>> {
        self.over.as_ref().map(GameOverScreen::prompt)
    }

    /// How long the main loop may block waiting for input.
    pub fn timeout_ms(&self, now_ms: u64) -> Option<u64> {
        self.timer.remaining_ms(now_ms)
    }

    /// Fire the descent timer if due. Returns whether the game changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.timer.poll(now_ms) {
            return false;
        }
        self.apply(GameAction::MoveDown, now_ms);
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) -> Flow {
        if key.kind == KeyEventKind::Release {
            return Flow::Continue;
        }
        if self.over.is_some() {
            return self.handle_game_over_key(key, now_ms);
        }

        match map_key_event(key) {
            Some(InputCommand::Quit) => Flow::Quit,
            Some(InputCommand::Restart) => {
                self.restart(now_ms);
                Flow::Continue
            }
            Some(InputCommand::Action(action)) => {
                self.apply(action, now_ms);
                Flow::Continue
            }
            None => Flow::Continue,
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent, now_ms: u64) -> Flow {
        // Esc and Ctrl-C always quit; plain letters may be part of a name.
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Flow::Quit;
        }

        let Some(screen) = self.over.as_mut() else {
            return Flow::Continue;
        };

        if screen.status != EntryStatus::Editing {
            if should_quit(key) {
                return Flow::Quit;
            }
            if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                self.restart(now_ms);
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Enter if !screen.name.is_empty() => {
                let score = self.game.score();
                screen.status = match self.store.save(&screen.name, score) {
                    Ok(()) => EntryStatus::Saved,
                    Err(err) => {
                        error!(
                            error = %err,
                            path = %self.store.path().display(),
                            "failed to save high score"
                        );
                        EntryStatus::SaveFailed
                    }
                };
                self.high_scores = self.store.load();
            }
            KeyCode::Backspace | KeyCode::Delete => {
                screen.name.pop();
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !c.is_control()
                    && screen.name.chars().count() < MAX_NAME_LEN =>
            {
                screen.name.push(c);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn apply(&mut self, action: GameAction, now_ms: u64) {
        debug!(action = action.as_str(), "apply");
        self.game = self.game.clone().apply(action);
        self.timer.sync(&self.game, now_ms);

        if self.game.game_over() && self.over.is_none() {
            self.open_game_over();
        }
    }

    fn open_game_over(&mut self) {
        let score = self.game.score();
        let status = if qualifies(&self.high_scores, score) {
            EntryStatus::Editing
        } else {
            EntryStatus::NotQualified
        };
        info!(score, qualifies = status == EntryStatus::Editing, "game over screen");
        self.over = Some(GameOverScreen {
            name: String::new(),
            status,
        });
    }

    /// Discard the game and start a fresh one, continuing the random stream.
    pub fn restart(&mut self, now_ms: u64) {
        info!(score = self.game.score(), "restart");
        self.game = GameState::with_rng(self.game.rng().clone());
        self.over = None;
        self.timer.reset();
        self.timer.sync(&self.game, now_ms);
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match &self.over {
            Some(screen) => self.over_view.render_into(
                self.game.score(),
                screen.prompt(),
                &self.high_scores,
                viewport,
                fb,
            ),
            None => self.game_view.render_into(&self.game, viewport, fb),
        }
    }
}
