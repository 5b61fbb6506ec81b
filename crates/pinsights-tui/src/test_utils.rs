//! Test utilities for TUI rendering verification
//!
//! Widgets and full screens are rendered into ratatui's `TestBackend` and
//! checked by looking for text in the resulting buffer.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing narrow layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Wrapper around a ratatui terminal backed by `TestBackend`
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12 terminal
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a single widget into `area`
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a whole frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Whether `text` appears on any single line of the buffer
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// All content as a string, one buffer row per line
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        let term = TestTerminal::new();
        assert_eq!((term.area().width, term.area().height), (TEST_WIDTH, TEST_HEIGHT));

        let term = TestTerminal::compact();
        assert_eq!(
            (term.area().width, term.area().height),
            (COMPACT_WIDTH, COMPACT_HEIGHT)
        );
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("first\nsecond"), term.area());

        assert!(term.line_contains(1, "second"));
        assert!(!term.line_contains(0, "second"));
        assert!(!term.line_contains(10, "first"));
        assert_eq!(term.content().lines().count(), 3);
    }
}
