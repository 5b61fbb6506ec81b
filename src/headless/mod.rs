//! Headless mode - NDJSON event output for scripting
//!
//! Instead of drawing the TUI, headless mode prints one JSON object per line
//! to stdout. Each object has an `"event"` field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"analysis_started","request_id":1,"url":"https://example.com","endpoint":"http://localhost:8000/analyze","timestamp":1704700001000}
//! {"event":"analysis_succeeded","request_id":1,"url":"https://example.com","result":{"trackers":3,"cookies":12,"thirdPartyRequests":7,"fingerprinting":true,"virusTotal":{"score":"Clean","details":null}},"timestamp":1704700002000}
//! ```

pub mod runner;

pub use runner::run_headless;

use std::io::{self, Write};

use chrono::Utc;
use pinsights_app::EngineEvent;
use pinsights_core::{AnalysisResult, RequestId, Result};
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A URL passed validation and was sent to the backend
    AnalysisStarted {
        request_id: RequestId,
        url: String,
        endpoint: String,
        timestamp: i64,
    },

    AnalysisSucceeded {
        request_id: RequestId,
        url: String,
        result: AnalysisResult,
        timestamp: i64,
    },

    /// Validation, backend, transport or decoding failure.
    /// `request_id` is absent for validation failures.
    AnalysisFailed {
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<RequestId>,
        url: String,
        kind: String,
        message: String,
        timestamp: i64,
    },

    /// Engine-level failure not tied to one analysis
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Map an engine event onto the headless stream.
    ///
    /// Returns `None` for events that have no headless counterpart.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::AnalysisStarted {
                request_id,
                url,
                endpoint,
            } => Some(Self::AnalysisStarted {
                request_id: *request_id,
                url: url.clone(),
                endpoint: endpoint.clone(),
                timestamp,
            }),
            EngineEvent::AnalysisSucceeded {
                request_id,
                url,
                result,
            } => Some(Self::AnalysisSucceeded {
                request_id: *request_id,
                url: url.clone(),
                result: result.clone(),
                timestamp,
            }),
            EngineEvent::AnalysisFailed {
                request_id,
                url,
                error,
            } => Some(Self::AnalysisFailed {
                request_id: *request_id,
                url: url.clone(),
                kind: error.kind().to_string(),
                message: error.to_string(),
                timestamp,
            }),
            EngineEvent::AnalysisCancelled { .. }
            | EngineEvent::PhaseChanged { .. }
            | EngineEvent::Shutdown => None,
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Write this event as one JSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinsights_client::test_utils::sample_result;
    use pinsights_core::AnalysisError;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let mut out = Vec::new();
        event.write_to(&mut out).expect("write failed");
        let line = String::from_utf8(out).expect("utf8");
        assert!(line.ends_with('\n'));
        serde_json::from_str(line.trim_end()).expect("invalid JSON")
    }

    #[test]
    fn test_started_serialization() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::AnalysisStarted {
            request_id: RequestId(4),
            url: "https://example.com".to_string(),
            endpoint: "http://localhost:8000/analyze".to_string(),
        })
        .expect("mapped");

        let value = to_value(&event);
        assert_eq!(value["event"], "analysis_started");
        assert_eq!(value["request_id"], 4);
        assert_eq!(value["endpoint"], "http://localhost:8000/analyze");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_success_uses_wire_field_names() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::AnalysisSucceeded {
            request_id: RequestId(1),
            url: "https://example.com".to_string(),
            result: sample_result(),
        })
        .expect("mapped");

        let value = to_value(&event);
        assert_eq!(value["event"], "analysis_succeeded");
        assert_eq!(value["result"]["thirdPartyRequests"], 7);
        assert_eq!(value["result"]["virusTotal"]["score"], "Clean");
        assert_eq!(value["result"]["fingerprinting"], true);
    }

    #[test]
    fn test_validation_failure_has_no_request_id() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::AnalysisFailed {
            request_id: None,
            url: "example.com".to_string(),
            error: AnalysisError::Validation,
        })
        .expect("mapped");

        let value = to_value(&event);
        assert_eq!(value["event"], "analysis_failed");
        assert_eq!(value["kind"], "validation");
        assert!(value.get("request_id").is_none());
        assert_eq!(value["message"], AnalysisError::Validation.to_string());
    }

    #[test]
    fn test_backend_failure_carries_kind_and_message() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::AnalysisFailed {
            request_id: Some(RequestId(2)),
            url: "https://example.com".to_string(),
            error: AnalysisError::backend(500, "Analysis failed"),
        })
        .expect("mapped");

        let value = to_value(&event);
        assert_eq!(value["kind"], "backend");
        assert_eq!(value["request_id"], 2);
        assert_eq!(value["message"], "Analysis failed");
    }

    #[test]
    fn test_lifecycle_events_are_not_emitted() {
        assert!(HeadlessEvent::from_engine_event(&EngineEvent::Shutdown).is_none());
        assert!(HeadlessEvent::from_engine_event(&EngineEvent::AnalysisCancelled {
            request_id: RequestId(1)
        })
        .is_none());
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("bad endpoint", true));
        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "bad endpoint");
        assert_eq!(value["fatal"], true);
    }
}
