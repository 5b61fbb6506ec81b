//! Translation of backend HTTP responses into analysis outcomes
//!
//! Kept free of any HTTP client types so the rules can be exercised directly.

use pinsights_core::{AnalysisError, AnalysisResult};
use serde_json::Value;

/// Interpret a completed HTTP exchange.
///
/// - 2xx: the body must decode into [`AnalysisResult`], otherwise the
///   request fails with [`AnalysisError::Deserialization`].
/// - anything else: [`AnalysisError::Backend`] carrying the body's `detail`
///   field, or a generic message built from the status when there is none.
pub fn interpret_response(
    status: u16,
    status_text: &str,
    body: &[u8],
) -> Result<AnalysisResult, AnalysisError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice::<AnalysisResult>(body)
            .map_err(|e| AnalysisError::deserialization(e.to_string()));
    }

    let message = extract_detail(body).unwrap_or_else(|| generic_status_message(status, status_text));
    Err(AnalysisError::backend(status, message))
}

/// Pull a usable `detail` out of an error body.
///
/// Unparsable bodies, missing or null `detail`, and falsy values (`""`,
/// `false`, `0`) all yield `None`. A non-string `detail` (FastAPI validation errors send an array) is
/// returned as compact JSON.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// `API request failed: Not Found (404)`
pub fn generic_status_message(status: u16, status_text: &str) -> String {
    format!("API request failed: {} ({})", status_text, status)
}
