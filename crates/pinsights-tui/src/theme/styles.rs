//! Semantic style builders

use pinsights_core::RequestState;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

pub fn border_error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default()
        .fg(palette::LINK)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Card styles ---
pub fn card_value() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn card_title() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

pub fn skeleton(shine: bool) -> Style {
    Style::default().fg(if shine {
        palette::SKELETON_SHINE
    } else {
        palette::SKELETON
    })
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Rounded bordered container used by every panel
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Icon, label and style for the request state
pub fn request_indicator(request: &RequestState, frame: u64) -> (&'static str, &'static str, Style) {
    match request {
        RequestState::Idle => ("○", request.label(), text_muted()),
        RequestState::Loading => (
            spinner_frame(frame),
            request.label(),
            Style::default().fg(palette::STATUS_YELLOW),
        ),
        RequestState::Success(_) => (
            "●",
            request.label(),
            Style::default().fg(palette::STATUS_GREEN),
        ),
        RequestState::Failed(_) => (
            "✗",
            request.label(),
            Style::default().fg(palette::STATUS_RED),
        ),
    }
}

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(frame: u64) -> &'static str {
    SPINNER[(frame % SPINNER.len() as u64) as usize]
}
