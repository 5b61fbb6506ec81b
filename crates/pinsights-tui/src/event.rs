//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use pinsights_app::message::Message;
use pinsights_app::InputKey;
use pinsights_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        // Tick on timeout drives the loading animation
        Ok(Some(Message::Tick))
    }
}
