//! Key mapping from terminal events to commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the driver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCommand {
    /// Forward to the engine.
    Action(GameAction),
    /// Discard the current game and start a fresh one.
    Restart,
    Quit,
}

/// Map keyboard input to a command.
///
/// Press and Repeat events are mapped; Release events are ignored so a held
/// key repeats at the terminal's rate and lifting it does nothing.
pub fn map_key_event(key: KeyEvent) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(InputCommand::Quit);
    }

    let action = match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => GameAction::MoveLeft,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => GameAction::MoveRight,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => GameAction::MoveDown,

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => GameAction::Rotate,

        // Actions
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Char('p') | KeyCode::Char('P') => GameAction::TogglePause,

        KeyCode::Char('r') | KeyCode::Char('R') => return Some(InputCommand::Restart),

        _ => return None,
    };

    Some(InputCommand::Action(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL))
}
