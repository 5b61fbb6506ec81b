//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the engine and handlers never see terminal types.

/// Abstract input key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+u, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_plain_chars_differ() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
