//! Privacy Insights Library
//!
//! Terminal client for a website privacy analysis service. The interactive
//! UI lives in `pinsights-tui`; this crate adds the headless runner and
//! re-exports both entry points for the binary.

pub mod headless;

pub use headless::run_headless;
pub use pinsights_tui::run_tui;
