//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the URL field and view toggles

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use pinsights_core::RequestId;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn the backend call for a validated URL
    StartAnalysis { request_id: RequestId, url: String },

    /// Abort the task for a cancelled request
    CancelAnalysis { request_id: RequestId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
