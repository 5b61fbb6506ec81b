//! Client-side URL validation
//!
//! Only the scheme prefix is checked. Hosts, paths and TLDs are left to the
//! analysis backend.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AnalysisError;

static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid scheme regex"));

/// Returns true when `input` starts with `http://` or `https://` (case-sensitive)
pub fn is_valid_url(input: &str) -> bool {
    SCHEME_PREFIX.is_match(input)
}

/// Validate a raw URL, producing the user-facing validation error on failure
pub fn validate_url(input: &str) -> Result<(), AnalysisError> {
    if is_valid_url(input) {
        Ok(())
    } else {
        Err(AnalysisError::Validation)
    }
}
