//! Action handlers: background analysis tasks
//!
//! Each dispatched request runs in its own tokio task which reports back
//! with exactly one [`Message::AnalysisCompleted`]. Handles are kept so a
//! cancelled request can be aborted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use pinsights_client::AnalysisBackend;
use pinsights_core::prelude::*;
use pinsights_core::RequestId;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Running analysis tasks keyed by request
pub type AnalysisTaskMap = Arc<Mutex<HashMap<RequestId, JoinHandle<()>>>>;

/// Execute an action returned by the update function
pub fn handle_action<B>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    tasks: &AnalysisTaskMap,
    backend: &Arc<B>,
) where
    B: AnalysisBackend + Send + Sync + 'static,
{
    match action {
        UpdateAction::StartAnalysis { request_id, url } => {
            spawn_analysis(request_id, url, msg_tx, tasks, backend);
        }
        UpdateAction::CancelAnalysis { request_id } => {
            abort_task(tasks, request_id);
        }
    }
}

fn spawn_analysis<B>(
    request_id: RequestId,
    url: String,
    msg_tx: mpsc::Sender<Message>,
    tasks: &AnalysisTaskMap,
    backend: &Arc<B>,
) where
    B: AnalysisBackend + Send + Sync + 'static,
{
    let backend = Arc::clone(backend);

    let handle = tokio::spawn(async move {
        debug!("Analysis task {} started", request_id);
        let result = backend.analyze(&url).await;

        if msg_tx
            .send(Message::AnalysisCompleted { request_id, result })
            .await
            .is_err()
        {
            warn!(
                "Engine gone before analysis {} could report back",
                request_id
            );
        }
    });

    lock(tasks).insert(request_id, handle);
}

/// Abort and forget the task for `request_id`
pub fn abort_task(tasks: &AnalysisTaskMap, request_id: RequestId) {
    if let Some(handle) = lock(tasks).remove(&request_id) {
        handle.abort();
        debug!("Aborted analysis task {}", request_id);
    }
}

/// Forget the task for a request that reported back
pub fn forget_task(tasks: &AnalysisTaskMap, request_id: RequestId) {
    lock(tasks).remove(&request_id);
}

/// Abort every running task, returning how many there were
pub fn abort_all(tasks: &AnalysisTaskMap) -> usize {
    let handles: Vec<_> = lock(tasks).drain().collect();
    for (request_id, handle) in &handles {
        handle.abort();
        debug!("Aborted analysis task {} on shutdown", request_id);
    }
    handles.len()
}

fn lock(tasks: &AnalysisTaskMap) -> MutexGuard<'_, HashMap<RequestId, JoinHandle<()>>> {
    tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
