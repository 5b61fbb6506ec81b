//! Screen layout definitions for the TUI
//!
//! Top to bottom: header, URL input, optional error alert, results area,
//! optional About panel, footer and status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows taken by a card without its tooltip (borders, value, description)
pub const CARD_HEIGHT: u16 = 4;

/// Extra rows a card gets when tooltips are shown
pub const TIP_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub input: Rect,
    /// Present only while an error is showing
    pub alert: Option<Rect>,
    /// Cards, skeleton cards or the empty-state hint
    pub content: Rect,
    /// Present only when the About panel is enabled and there is room
    pub about: Option<Rect>,
    pub footer: Rect,
    pub status: Rect,
}

/// What the layout has to make room for
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutPlan {
    /// Rows needed by the alert, 0 for none
    pub alert_height: u16,
    /// Rows needed by the content area
    pub content_height: u16,
    pub show_about: bool,
}

pub fn create(area: Rect, plan: LayoutPlan) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),                 // header
        Constraint::Length(3),                 // URL input
        Constraint::Length(plan.alert_height), // alert
        Constraint::Length(plan.content_height),
        Constraint::Min(0),    // About panel
        Constraint::Length(1), // footer
        Constraint::Length(1), // status bar
    ])
    .split(area);

    let about = chunks[4];

    ScreenAreas {
        header: chunks[0],
        input: chunks[1],
        alert: (plan.alert_height > 0 && chunks[2].height > 0).then_some(chunks[2]),
        content: chunks[3],
        about: (plan.show_about && about.height >= 3).then_some(about),
        footer: chunks[5],
        status: chunks[6],
    }
}

/// Rows needed to show all five cards
pub fn card_grid_height(show_tips: bool) -> u16 {
    3 * card_height(show_tips)
}

pub fn card_height(show_tips: bool) -> u16 {
    if show_tips {
        CARD_HEIGHT + TIP_HEIGHT
    } else {
        CARD_HEIGHT
    }
}

/// Split the content area into five card slots: two rows of two, then one
/// full-width row
pub fn card_grid(area: Rect, show_tips: bool) -> [Rect; 5] {
    let row_height = card_height(show_tips);
    let rows = Layout::vertical([
        Constraint::Length(row_height),
        Constraint::Length(row_height),
        Constraint::Length(row_height),
    ])
    .split(area);

    let halves = |row: Rect| {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(row)
    };
    let first = halves(rows[0]);
    let second = halves(rows[1]);

    [first[0], first[1], second[0], second[1], rows[2]]
}
