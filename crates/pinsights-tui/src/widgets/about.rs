//! "About This Tool" panel with the expandable Learn More section

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub const ABOUT_TITLE: &str = "About This Tool";

const INTRO: &str = "The Privacy Insights tool helps you evaluate the privacy level of websites. \
It analyzes potential risks like tracking elements, third-party requests, cookies, and browser \
fingerprinting techniques, generating a snapshot of the site's privacy practices.";

const FEATURES: [(&str, &str); 5] = [
    ("Trackers", "Identifies tracking elements."),
    ("Cookies", "Estimates cookies set by the site."),
    ("Third-Party Requests", "Counts requests to external domains."),
    ("Fingerprinting", "Checks for potential browser fingerprinting."),
    (
        "Security Scan",
        "Basic check via VirusTotal (requires setup for full results).",
    ),
];

const BENEFITS: [&str; 3] = [
    "Understand website privacy practices.",
    "Make informed browsing decisions.",
    "Raise awareness about online privacy.",
];

pub struct AboutPanel {
    expanded: bool,
}

impl AboutPanel {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(INTRO, styles::text_secondary())),
            Line::from(""),
        ];

        let marker = if self.expanded { "▾" } else { "▸" };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), styles::accent()),
            Span::styled("Learn More", styles::link()),
            Span::styled("  (Ctrl+L)", styles::text_muted()),
        ]));

        if !self.expanded {
            return lines;
        }

        lines.push(Line::from(Span::styled(
            "Key Features Analyzed:",
            styles::card_title(),
        )));
        for (name, text) in FEATURES {
            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(name, styles::card_value()),
                Span::styled(format!(": {}", text), styles::text_secondary()),
            ]));
        }

        lines.push(Line::from(Span::styled("Benefits:", styles::card_title())));
        for text in BENEFITS {
            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(text, styles::text_secondary()),
            ]));
        }

        lines
    }
}

impl Widget for AboutPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::raw(" "),
            Span::styled(ABOUT_TITLE, styles::card_title()),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x + 1, inner.y, inner.width - 1, inner.height), buf);
    }
}
