//! pinsights-tui - Terminal UI for Privacy Insights
//!
//! This crate provides the ratatui-based interface. It drives an Engine from
//! pinsights-app and adds terminal rendering, key polling and the widgets
//! for the URL form, result cards and About panel.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run_tui;
