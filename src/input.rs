//! Input module - Keyboard handling for game controls
//!
//! Mouse clicks are resolved against the current layout by the view's hit
//! test; this module only maps keys.

use crate::types::{GameAction, Operator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(c @ '0'..='9') => {
            Some(GameAction::Digit(c.to_digit(10).unwrap_or(0) as u8))
        }
        KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => Operator::from_char(c).map(GameAction::Op),
        KeyCode::Char('=') | KeyCode::Enter => Some(GameAction::Submit),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Backspace => Some(GameAction::Clear),
        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
