//! Message processing
//!
//! Runs the TEA update loop for one incoming message and dispatches the
//! resulting actions.

use std::sync::Arc;

use pinsights_client::AnalysisBackend;
use tokio::sync::mpsc;

use crate::actions::{forget_task, handle_action, AnalysisTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &AnalysisTaskMap,
    backend: &Arc<B>,
) where
    B: AnalysisBackend + Send + Sync + 'static,
{
    // A completed task has finished running whether or not its result is
    // still wanted
    if let Message::AnalysisCompleted { request_id, .. } = &message {
        forget_task(tasks, *request_id);
    }

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), tasks, backend);
        }

        msg = result.message;
    }
}
