//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Handle a key press.
///
/// Every printable character, `?` included, goes into the URL field, so
/// view toggles live on function and Ctrl keys.
pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => UpdateResult::message(Message::Quit),
        InputKey::CharCtrl('t') | InputKey::F(1) => UpdateResult::message(Message::ToggleTips),
        InputKey::CharCtrl('l') => UpdateResult::message(Message::ToggleAbout),

        InputKey::Enter => UpdateResult::message(Message::Submit),
        InputKey::Esc => UpdateResult::message(Message::CancelAnalysis),

        InputKey::Char(c) => {
            state.insert_char(c);
            UpdateResult::none()
        }
        InputKey::Backspace => {
            state.delete_before_cursor();
            UpdateResult::none()
        }
        InputKey::Delete => {
            state.delete_at_cursor();
            UpdateResult::none()
        }
        InputKey::Left => {
            state.move_cursor_left();
            UpdateResult::none()
        }
        InputKey::Right => {
            state.move_cursor_right();
            UpdateResult::none()
        }
        InputKey::Home | InputKey::CharCtrl('a') => {
            state.move_cursor_home();
            UpdateResult::none()
        }
        InputKey::End | InputKey::CharCtrl('e') => {
            state.move_cursor_end();
            UpdateResult::none()
        }
        InputKey::CharCtrl('u') => {
            state.clear_url();
            UpdateResult::none()
        }

        _ => UpdateResult::none(),
    }
}
