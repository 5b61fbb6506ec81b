//! Error alert shown when the last analysis failed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub const ALERT_TITLE: &str = "Analysis Error";

/// Most message lines the alert will grow to
const MAX_MESSAGE_LINES: u16 = 4;

pub struct ErrorAlert<'a> {
    message: &'a str,
}

impl<'a> ErrorAlert<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Rows the alert needs at `width` columns, borders included
    pub fn height(message: &str, width: u16) -> u16 {
        let inner = width.saturating_sub(4).max(1) as usize;
        let lines = message.width().div_ceil(inner).max(1) as u16;
        lines.min(MAX_MESSAGE_LINES) + 2
    }
}

impl Widget for ErrorAlert<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .border_style(styles::border_error())
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("✗ ", styles::border_error()),
                Span::styled(ALERT_TITLE, styles::border_error()),
                Span::raw(" "),
            ]));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let text_area = Rect::new(inner.x + 1, inner.y, inner.width - 1, inner.height);
        Paragraph::new(self.message)
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}
