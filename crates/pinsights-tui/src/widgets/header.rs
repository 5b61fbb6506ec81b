//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use pinsights_core::RequestState;

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Privacy Insights";
pub const TAGLINE: &str = "Analyze website privacy practices instantly.";

/// Main header: status dot, app title and tagline
pub struct MainHeader<'a> {
    request: &'a RequestState,
    frame: u64,
}

impl<'a> MainHeader<'a> {
    pub fn new(request: &'a RequestState) -> Self {
        Self { request, frame: 0 }
    }

    /// Animation frame for the loading spinner
    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, _label, icon_style) = styles::request_indicator(self.request, self.frame);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
        ];

        let used = Line::from(spans.clone()).width() as u16;
        let tagline_width = TAGLINE.len() as u16 + 3;
        if used + tagline_width <= inner.width {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("/", styles::text_muted()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(TAGLINE, styles::text_secondary()));
        }

        Line::from(spans).render(inner, buf);
    }
}
