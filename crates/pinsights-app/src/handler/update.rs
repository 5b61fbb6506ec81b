//! Main update function - handles state transitions (TEA pattern)

use pinsights_core::prelude::*;
use pinsights_core::{validate_url, AnalysisError, AnalysisResult, RequestId, RequestState};

use crate::message::Message;
use crate::state::{AppState, InFlight};

use super::{keys, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key),

        Message::SetUrl(url) => {
            state.set_url(url);
            UpdateResult::none()
        }

        Message::Submit => handle_submit(state),

        Message::CancelAnalysis => handle_cancel(state),

        Message::AnalysisCompleted { request_id, result } => {
            handle_completed(state, request_id, result)
        }

        Message::ToggleTips => {
            state.show_tips = !state.show_tips;
            UpdateResult::none()
        }

        Message::ToggleAbout => {
            state.show_about_details = !state.show_about_details;
            UpdateResult::none()
        }

        Message::Tick => {
            if state.request.is_loading() {
                state.tick();
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }
    }
}

fn handle_submit(state: &mut AppState) -> UpdateResult {
    if let Some(in_flight) = &state.in_flight {
        debug!(
            "Ignoring submit while request {} is in flight",
            in_flight.id
        );
        return UpdateResult::none();
    }

    if state.url.is_empty() {
        return UpdateResult::none();
    }

    let url = state.url.clone();

    if let Err(e) = validate_url(&url) {
        debug!("Rejected {:?}: {}", url, e);
        state.request = RequestState::Failed(e);
        state.record_outcome(None, url);
        return UpdateResult::none();
    }

    let request_id = state.next_request_id();
    info!("Dispatching analysis {} for {}", request_id, url);

    state.request = RequestState::Loading;
    state.animation_frame = 0;
    state.in_flight = Some(InFlight {
        id: request_id,
        url: url.clone(),
    });

    UpdateResult::action(UpdateAction::StartAnalysis { request_id, url })
}

fn handle_cancel(state: &mut AppState) -> UpdateResult {
    match state.in_flight.take() {
        Some(in_flight) => {
            info!("Cancelled analysis {} for {}", in_flight.id, in_flight.url);
            state.request = RequestState::Idle;
            UpdateResult::action(UpdateAction::CancelAnalysis {
                request_id: in_flight.id,
            })
        }
        None => UpdateResult::none(),
    }
}

fn handle_completed(
    state: &mut AppState,
    request_id: RequestId,
    result: std::result::Result<AnalysisResult, AnalysisError>,
) -> UpdateResult {
    let in_flight = match state.in_flight.take() {
        Some(in_flight) if in_flight.id == request_id => in_flight,
        other => {
            debug!("Discarding stale completion for request {}", request_id);
            state.in_flight = other;
            return UpdateResult::none();
        }
    };

    state.request = match result {
        Ok(result) => {
            info!("Analysis {} succeeded for {}", request_id, in_flight.url);
            RequestState::Success(result)
        }
        Err(e) => {
            warn!(
                "Analysis {} failed for {} ({}): {}",
                request_id,
                in_flight.url,
                e.kind(),
                e
            );
            RequestState::Failed(e)
        }
    };
    state.record_outcome(Some(request_id), in_flight.url);

    UpdateResult::none()
}
