//! URL input field with the Analyze button

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use pinsights_app::AppState;

use crate::theme::styles;

pub const PLACEHOLDER: &str = "Enter website URL (e.g., https://example.com)";
const BUTTON_WIDTH: u16 = 12;

/// Single-line URL editor.
///
/// The border turns red while an error is showing and the current text
/// would fail validation.
pub struct UrlInput<'a> {
    state: &'a AppState,
}

impl<'a> UrlInput<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Terminal cursor position for the field rendered in `area`
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let text_area = text_area(area)?;
        let (_, cursor_x) = visible_window(&self.state.url, self.state.cursor, text_area.width);
        Some(Position::new(text_area.x + cursor_x, text_area.y))
    }
}

impl Widget for UrlInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let invalid = self.state.input_invalid();
        let block = styles::glass_block(true)
            .title(" Website URL ")
            .border_style(if invalid {
                styles::border_error()
            } else {
                styles::border_active()
            });
        block.render(area, buf);

        let Some(text_area) = text_area(area) else {
            return;
        };

        let line = if self.state.url.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, styles::text_muted()))
        } else {
            let (visible, _) =
                visible_window(&self.state.url, self.state.cursor, text_area.width);
            Line::from(Span::styled(visible, styles::text_primary()))
        };
        Paragraph::new(line).render(text_area, buf);

        if let Some(button_area) = button_area(area) {
            let (label, style) = if self.state.request.is_loading() {
                (
                    format!(
                        "[ {} ... ]",
                        styles::spinner_frame(self.state.animation_frame)
                    ),
                    styles::keybinding(),
                )
            } else if self.state.can_submit() {
                ("[ Analyze ]".to_string(), styles::accent_bold())
            } else {
                ("[ Analyze ]".to_string(), styles::text_muted())
            };
            Paragraph::new(Line::from(Span::styled(label, style))).render(button_area, buf);
        }
    }
}

/// Inside the border, left of the button
fn text_area(area: Rect) -> Option<Rect> {
    if area.width < 4 || area.height < 3 {
        return None;
    }
    let inner_width = area.width - 2;
    let width = if inner_width > BUTTON_WIDTH + 10 {
        inner_width - BUTTON_WIDTH - 1
    } else {
        inner_width
    };
    Some(Rect::new(area.x + 2, area.y + 1, width.saturating_sub(1), 1))
}

fn button_area(area: Rect) -> Option<Rect> {
    let inner_width = area.width.checked_sub(2)?;
    if inner_width <= BUTTON_WIDTH + 10 || area.height < 3 {
        return None;
    }
    Some(Rect::new(
        area.x + area.width - 1 - BUTTON_WIDTH,
        area.y + 1,
        BUTTON_WIDTH,
        1,
    ))
}

/// Slice of `text` that fits in `width` columns with the cursor visible,
/// plus the cursor column within that slice.
pub fn visible_window(text: &str, cursor: usize, width: u16) -> (String, u16) {
    let width = width as usize;
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let char_width = |c: &char| c.width().unwrap_or(0);

    // Scroll so the text before the cursor leaves one column for the cursor
    let mut start = 0;
    let mut before: usize = chars[..cursor].iter().map(char_width).sum();
    while before >= width && start < cursor {
        before -= char_width(&chars[start]);
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for c in &chars[start..] {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        visible.push(*c);
        used += w;
    }

    (visible, before as u16)
}
