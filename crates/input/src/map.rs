//! Key mapping from terminal events to session commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to a command, ignoring the press/repeat/release kind.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | 'x' | 'X') => Some(Command::RotateCw),
        KeyCode::Char('z' | 'Z' | 'y' | 'Y') => Some(Command::RotateCcw),

        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char('p' | 'P') => Some(Command::Pause),
        KeyCode::Char('r' | 'R') => Some(Command::Reset),

        _ => None,
    }
}

/// Commands that may fire again while the key is held.
pub fn is_repeatable(command: Command) -> bool {
    matches!(
        command,
        Command::MoveLeft | Command::MoveRight | Command::SoftDrop
    )
}

/// Map a key event, honoring its kind.
///
/// Presses always map. Repeats map only for repeatable commands, so holding
/// Space does not hard-drop a whole stack. Releases never map.
pub fn command_for_event(key: KeyEvent) -> Option<Command> {
    let command = handle_key_event(key)?;
    match key.kind {
        KeyEventKind::Press => Some(command),
        KeyEventKind::Repeat if is_repeatable(command) => Some(command),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
