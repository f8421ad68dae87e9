//! Keyboard mapping for the terminal host.

use crate::core::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(GameInput),
    Quit,
    Ignore,
}

/// Translate a key event. Key releases and repeats are ignored so a held
/// key does not flap continuously on terminals that report them.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => KeyAction::Game(GameInput::Jump),
        KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Game(GameInput::Continue),
        KeyCode::Char('l') | KeyCode::Char('L') => KeyAction::Game(GameInput::Leave),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}
