//! Game state module - the composite game snapshot and every transition
//!
//! `GameState` is a value. Each transition consumes the current snapshot and
//! returns the next one; a rejected request returns its input unchanged. There
//! is no error path: "move rejected" and "game over reached" are ordinary
//! return values.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{next_rotation_index, random_piece, Piece, PieceShape};
use crate::rng::{Randomizer, SimpleRng};
use crate::scoring::{drop_speed_ms, hard_drop_points, level_for_lines, line_clear_points};
use crate::types::{Color, GameAction, PieceKind, Position, SPAWN_POSITION, WALL_KICK_OFFSETS};

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Normal play; movement transitions are accepted.
    Falling,
    /// Movement is suspended until the pause is toggled off.
    Paused,
    /// Terminal. Only inspection (and a driver-level restart) remain.
    GameOver,
}

/// The falling piece: a catalog entry plus its placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: &'static Piece,
    pub position: Position,
    /// Always a valid index into `piece.rotations`.
    pub rotation: usize,
}

impl ActivePiece {
    /// A piece at the spawn point in its first rotation state.
    pub fn spawn(piece: &'static Piece) -> Self {
        Self {
            piece,
            position: SPAWN_POSITION,
            rotation: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.piece.kind
    }

    pub fn color(&self) -> Color {
        self.piece.color
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> &'static PieceShape {
        self.piece.shape(self.rotation)
    }

    /// Absolute board coordinates of the four blocks.
    pub fn cells(&self) -> [Position; 4] {
        self.shape()
            .map(|(dx, dy)| self.position.offset(dx, dy))
    }
}

/// Complete game snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: ActivePiece,
    next: &'static Piece,
    score: u32,
    lines: u32,
    level: u32,
    phase: Phase,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Randomizer> GameState<R> {
    /// Start a game drawing pieces from `rng`: the active piece first, then
    /// the preview.
    pub fn with_rng(mut rng: R) -> Self {
        let current = random_piece(&mut rng);
        let next = random_piece(&mut rng);

        Self {
            board: Board::new(),
            active: ActivePiece::spawn(current),
            next,
            score: 0,
            lines: 0,
            level: 1,
            phase: Phase::Falling,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next_piece(&self) -> &'static Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Descent interval the external timer should use at the current level.
    pub fn drop_speed_ms(&self) -> u32 {
        drop_speed_ms(self.level)
    }

    /// Apply a game action
    pub fn apply(self, action: GameAction) -> Self {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::TogglePause => self.toggle_pause(),
        }
    }

    pub fn move_left(self) -> Self {
        self.shift(-1)
    }

    pub fn move_right(self) -> Self {
        self.shift(1)
    }

    /// Soft drop: one row down, or lock-and-spawn when blocked.
    pub fn move_down(self) -> Self {
        if self.phase != Phase::Falling {
            return self;
        }

        let target = self.active.position.offset(0, 1);
        if self.board.is_valid_position(self.active.shape(), target) {
            return self.with_position(target);
        }

        self.lock_and_spawn()
    }

    /// Advance the rotation state, nudging sideways if blocked in place.
    pub fn rotate(self) -> Self {
        if self.phase != Phase::Falling {
            return self;
        }

        let rotation = next_rotation_index(self.active.piece, self.active.rotation);
        let shape = self.active.piece.shape(rotation);
        let origin = self.active.position;

        let kicked = std::iter::once(0)
            .chain(WALL_KICK_OFFSETS)
            .map(|dx| origin.offset(dx, 0))
            .find(|&candidate| self.board.is_valid_position(shape, candidate));

        match kicked {
            Some(position) => Self {
                active: ActivePiece {
                    rotation,
                    position,
                    ..self.active
                },
                ..self
            },
            None => self,
        }
    }

    /// Drop to the lowest valid row, score 2 per row, then lock-and-spawn.
    pub fn hard_drop(self) -> Self {
        if self.phase != Phase::Falling {
            return self;
        }

        let shape = self.active.shape();
        let mut position = self.active.position;
        let mut drop_distance: u32 = 0;

        while self.board.is_valid_position(shape, position.offset(0, 1)) {
            position = position.offset(0, 1);
            drop_distance += 1;
        }

        let score = self.score.saturating_add(hard_drop_points(drop_distance));
        debug!(
            piece = self.active.kind().as_str(),
            drop_distance,
            "hard drop"
        );

        Self { score, ..self.with_position(position) }.lock_and_spawn()
    }

    pub fn toggle_pause(self) -> Self {
        let phase = match self.phase {
            Phase::Falling => Phase::Paused,
            Phase::Paused => Phase::Falling,
            Phase::GameOver => return self,
        };
        debug!(paused = phase == Phase::Paused, "pause toggled");
        Self { phase, ..self }
    }

    fn shift(self, dx: i8) -> Self {
        if self.phase != Phase::Falling {
            return self;
        }

        let target = self.active.position.offset(dx, 0);
        if self.board.is_valid_position(self.active.shape(), target) {
            self.with_position(target)
        } else {
            self
        }
    }

    fn with_position(self, position: Position) -> Self {
        Self {
            active: ActivePiece {
                position,
                ..self.active
            },
            ..self
        }
    }

    /// Lock the active piece, clear lines, update progress, then either end
    /// the game or promote the preview piece.
    fn lock_and_spawn(mut self) -> Self {
        let locked = self.board.lock_piece(
            self.active.shape(),
            self.active.position,
            self.active.color(),
        );
        let (board, cleared) = locked.clear_lines();

        // The multiplier is the level the piece fell at.
        let level_before = self.level;
        self.lines = self.lines.saturating_add(cleared as u32);
        self.level = level_for_lines(self.lines);
        self.score = self
            .score
            .saturating_add(line_clear_points(cleared, level_before));
        self.board = board;

        debug!(
            piece = self.active.kind().as_str(),
            color = self.active.color().as_str(),
            x = self.active.position.x,
            y = self.active.position.y,
            cleared,
            score = self.score,
            "piece locked"
        );
        if self.level != level_before {
            info!(level = self.level, lines = self.lines, "level up");
        }

        if self.board.is_game_over() {
            info!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                "game over"
            );
            self.phase = Phase::GameOver;
            return self;
        }

        self.active = ActivePiece::spawn(self.next);
        self.next = random_piece(&mut self.rng);
        self
    }
}
