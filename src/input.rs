//! Key mapping for the terminal app.

use crate::app::AppInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Unified key → AppInput mapping. Release/repeat events map to `Other`.
pub fn map_key(key: KeyEvent) -> AppInput {
    if key.kind != KeyEventKind::Press {
        return AppInput::Other;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') => AppInput::NewRound,
            KeyCode::Char('r') | KeyCode::Char('R') => AppInput::Reveal,
            KeyCode::Char('c') | KeyCode::Char('C') => AppInput::Quit,
            _ => AppInput::Other,
        };
    }

    match key.code {
        KeyCode::Char(c) => AppInput::Char(c),
        KeyCode::Backspace => AppInput::Backspace,
        KeyCode::Enter => AppInput::Submit,
        KeyCode::F(2) => AppInput::NewRound,
        KeyCode::F(3) => AppInput::Reveal,
        KeyCode::Esc => AppInput::Quit,
        _ => AppInput::Other,
    }
}
