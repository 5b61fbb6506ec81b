//! Status bar and footer
//!
//! The status bar shows the request state and the key bindings that apply
//! to it. The footer carries the fixed disclaimer line.

use pinsights_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const FOOTER_TEXT: &str = "Privacy Insights - Analyze with care. Results are indicative.";

/// Status bar widget showing request state and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::new();
        if self.state.request.is_loading() {
            hints.push(("Esc", "Cancel"));
        } else {
            hints.push(("Enter", "Analyze"));
        }
        hints.push((
            "F1",
            if self.state.show_tips {
                "Hide tips"
            } else {
                "Tips"
            },
        ));
        if self.state.settings.ui.show_about {
            hints.push(("Ctrl+L", "Learn More"));
        }
        hints.push(("Ctrl+C", "Quit"));
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, label, style) =
            styles::request_indicator(&self.state.request, self.state.animation_frame);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(format!("{} {}", icon, label), style),
            Span::styled(" │ ", styles::text_muted()),
        ];

        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, styles::text_secondary()));
        }

        Line::from(spans).render(area, buf);
    }
}

/// Centered disclaimer line
pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(FOOTER_TEXT, styles::text_muted())))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
