//! # pinsights-app - Application State and Orchestration
//!
//! This crate contains the TEA (The Elm Architecture) application layer for
//! Privacy Insights. It manages the analysis request lifecycle, processes
//! messages, and runs backend calls in background tasks.
//!
//! ## Public API
//!
//! ### Core TEA Types
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All possible events and actions
//! - [`handler::update()`] - State transition function
//! - [`UpdateAction`] - Side effects returned by `update()`
//!
//! ### Engine
//! - [`Engine`] - Owns state, channel and tasks; shared by TUI and headless
//! - [`EngineEvent`] - Domain events broadcast to subscribers
//!
//! ### Configuration
//! - [`config::Settings`] - `config.toml` contents
//! - [`config::load_settings()`] - Load settings with defaults on failure

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, InFlight, Outcome};
