//! Core domain types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Lifecycle of the application itself (not of an analysis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Security scan portion of an analysis result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirusTotalResult {
    pub score: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Metrics returned by the analysis backend for one URL.
///
/// Field names on the wire are camelCase (`thirdPartyRequests`, `virusTotal`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub trackers: u64,
    pub cookies: u64,
    pub third_party_requests: u64,
    pub fingerprinting: bool,
    pub virus_total: VirusTotalResult,
}

/// Identifier assigned to each dispatched analysis request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn next(self) -> Self {
        RequestId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of the analysis workflow. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Failed(AnalysisError),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            RequestState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// User-visible error text, if the last analysis failed
    pub fn error_message(&self) -> Option<String> {
        self.error().map(|e| e.to_string())
    }

    /// Short label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "Idle",
            RequestState::Loading => "Analyzing",
            RequestState::Success(_) => "Done",
            RequestState::Failed(_) => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{"trackers":3,"cookies":12,"thirdPartyRequests":7,"fingerprinting":true,"virusTotal":{"score":"Clean","details":null}}"#
    }

    #[test]
    fn test_analysis_result_deserializes_camel_case() {
        let result: AnalysisResult = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(result.trackers, 3);
        assert_eq!(result.cookies, 12);
        assert_eq!(result.third_party_requests, 7);
        assert!(result.fingerprinting);
        assert_eq!(result.virus_total.score, "Clean");
        assert_eq!(result.virus_total.details, None);
    }

    #[test]
    fn test_virus_total_details_may_be_absent() {
        let json = r#"{"trackers":0,"cookies":0,"thirdPartyRequests":0,"fingerprinting":false,"virusTotal":{"score":"N/A"}}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.virus_total.details, None);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let json = r#"{"trackers":-1,"cookies":0,"thirdPartyRequests":0,"fingerprinting":false,"virusTotal":{"score":"N/A"}}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"trackers":1,"thirdPartyRequests":0,"fingerprinting":false,"virusTotal":{"score":"N/A"}}"#;
        let err = serde_json::from_str::<AnalysisResult>(json).unwrap_err();
        assert!(err.to_string().contains("cookies"));
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let result: AnalysisResult = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["thirdPartyRequests"], 7);
        assert_eq!(value["virusTotal"]["score"], "Clean");
    }

    #[test]
    fn test_request_id_next_and_display() {
        let id = RequestId(41).next();
        assert_eq!(id, RequestId(42));
        assert_eq!(id.to_string(), "#42");
    }

    #[test]
    fn test_request_state_accessors() {
        assert!(!RequestState::Idle.is_loading());
        assert!(RequestState::Loading.is_loading());

        let failed = RequestState::Failed(AnalysisError::transport("boom"));
        assert_eq!(failed.error_message().as_deref(), Some("boom"));
        assert!(failed.result().is_none());
        assert_eq!(failed.label(), "Failed");
    }
}
