//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use pinsights_core::{AnalysisError, AnalysisResult, AppPhase, RequestId};

/// Domain events emitted by the Engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Analysis lifecycle
    // ─────────────────────────────────────────────────────────
    /// A validated URL was dispatched to the backend
    AnalysisStarted {
        request_id: RequestId,
        url: String,
        endpoint: String,
    },

    /// The backend returned a result
    AnalysisSucceeded {
        request_id: RequestId,
        url: String,
        result: AnalysisResult,
    },

    /// The analysis failed. `request_id` is `None` when validation
    /// rejected the URL before dispatch.
    AnalysisFailed {
        request_id: Option<RequestId>,
        url: String,
        error: AnalysisError,
    },

    /// The in-flight analysis was cancelled
    AnalysisCancelled { request_id: RequestId },

    // ─────────────────────────────────────────────────────────
    // Engine lifecycle
    // ─────────────────────────────────────────────────────────
    PhaseChanged {
        old_phase: AppPhase,
        new_phase: AppPhase,
    },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Stable label for logging and filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::AnalysisStarted { .. } => "analysis_started",
            EngineEvent::AnalysisSucceeded { .. } => "analysis_succeeded",
            EngineEvent::AnalysisFailed { .. } => "analysis_failed",
            EngineEvent::AnalysisCancelled { .. } => "analysis_cancelled",
            EngineEvent::PhaseChanged { .. } => "phase_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }

    /// Whether this event ends an analysis
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EngineEvent::AnalysisSucceeded { .. }
                | EngineEvent::AnalysisFailed { .. }
                | EngineEvent::AnalysisCancelled { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        assert_eq!(
            EngineEvent::AnalysisCancelled {
                request_id: RequestId(1)
            }
            .event_type(),
            "analysis_cancelled"
        );
    }

    #[test]
    fn test_terminal_events() {
        let failed = EngineEvent::AnalysisFailed {
            request_id: None,
            url: "ftp://x".to_string(),
            error: AnalysisError::Validation,
        };
        assert!(failed.is_terminal());
        assert!(!EngineEvent::Shutdown.is_terminal());
    }
}
