//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the running analysis
//! tasks and the backend. Both front ends feed it messages and read state
//! or subscribe to [`EngineEvent`]s.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pinsights_client::AnalysisBackend;
use pinsights_core::prelude::*;
use pinsights_core::{AppPhase, RequestId, RequestState};
use tokio::sync::{broadcast, mpsc};

use crate::actions::{self, AnalysisTaskMap};
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StateSnapshot {
    phase: AppPhase,
    in_flight: Option<RequestId>,
    outcome_count: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase,
            in_flight: state.in_flight.as_ref().map(|f| f.id),
            outcome_count: state.outcome_count,
        }
    }
}

/// Orchestration engine for Privacy Insights.
///
/// Encapsulates everything shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Analysis task tracking
/// - Event broadcasting for external consumers
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    analysis_tasks: AnalysisTaskMap,

    backend: Arc<B>,

    /// Cached `backend.endpoint()` for events
    endpoint: String,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<B> Engine<B>
where
    B: AnalysisBackend + Send + Sync + 'static,
{
    /// Create a new Engine around `backend`.
    ///
    /// Must be called inside a tokio runtime: it spawns the signal handler.
    pub fn new(backend: B, settings: Settings) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);
        let endpoint = backend.endpoint();

        signals::spawn_signal_handler(msg_tx.clone());

        info!("Engine ready, analysis endpoint {}", endpoint);

        Self {
            state,
            msg_tx,
            msg_rx,
            analysis_tasks: Arc::new(Mutex::new(HashMap::new())),
            backend: Arc::new(backend),
            endpoint,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped and the receiver reports `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.analysis_tasks,
            &self.backend,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from any input source
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Run one analysis to completion and return the final state.
    ///
    /// Returns early if a quit message arrives while waiting.
    pub async fn analyze(&mut self, url: &str) -> RequestState {
        self.process_message(Message::SetUrl(url.to_string()));
        self.process_message(Message::Submit);

        while self.state.in_flight.is_some() && !self.should_quit() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => break,
            }
        }

        self.state.request.clone()
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Analysis endpoint this engine talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Emit the shutdown event and abort any in-flight analysis
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        let aborted = actions::abort_all(&self.analysis_tasks);
        if aborted > 0 {
            info!("Aborted {} in-flight analysis task(s)", aborted);
        }
    }

    /// Compare pre/post snapshots and emit events for the differences.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.outcome_count > pre.outcome_count {
            if let Some(outcome) = &self.state.last_outcome {
                match (&self.state.request, outcome.request_id) {
                    (RequestState::Success(result), Some(request_id)) => {
                        self.emit(EngineEvent::AnalysisSucceeded {
                            request_id,
                            url: outcome.url.clone(),
                            result: result.clone(),
                        });
                    }
                    (RequestState::Failed(error), request_id) => {
                        self.emit(EngineEvent::AnalysisFailed {
                            request_id,
                            url: outcome.url.clone(),
                            error: error.clone(),
                        });
                    }
                    (other, _) => {
                        warn!("Outcome recorded with request state {:?}", other.label());
                    }
                }
            }
        } else if let (Some(request_id), None) = (pre.in_flight, post.in_flight) {
            self.emit(EngineEvent::AnalysisCancelled { request_id });
        }

        if post.in_flight.is_some() && post.in_flight != pre.in_flight {
            if let Some(in_flight) = &self.state.in_flight {
                self.emit(EngineEvent::AnalysisStarted {
                    request_id: in_flight.id,
                    url: in_flight.url.clone(),
                    endpoint: self.endpoint.clone(),
                });
            }
        }

        if pre.phase != post.phase {
            self.emit(EngineEvent::PhaseChanged {
                old_phase: pre.phase,
                new_phase: post.phase,
            });
        }
    }

    /// send() fails only when nobody is subscribed, which is fine.
    fn emit(&self, event: EngineEvent) {
        if event.is_terminal() {
            debug!("Analysis finished: {}", event.event_type());
        } else {
            trace!("Engine event: {}", event.event_type());
        }
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
