//! Color palette
//!
//! Named terminal colors so the UI follows the user's terminal theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset;
pub const CARD_BG: Color = Color::Reset;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const LINK: Color = Color::Blue;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Loading placeholders ---
pub const SKELETON: Color = Color::DarkGray;
pub const SKELETON_SHINE: Color = Color::Gray;
