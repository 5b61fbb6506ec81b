//! # pinsights-core - Core Domain Types
//!
//! Foundation crate for Privacy Insights. Provides domain types, error
//! handling, URL validation, the result card projection and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AnalysisResult`], [`VirusTotalResult`] - Metrics returned by the analysis backend
//! - [`RequestState`] - Idle / Loading / Success / Failed
//! - [`RequestId`] - Correlates completions with dispatched requests
//! - [`AppPhase`] - Running or quitting
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Application error enum with `fatal` vs `recoverable` classification
//! - [`AnalysisError`] - Why a single analysis failed (validation, backend, transport, decode)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Validation (`validation`)
//! - [`is_valid_url()`] - Scheme-prefix check (`^https?://`)
//!
//! ### Cards (`cards`)
//! - [`result_cards()`] - Project a result onto the five display cards
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pinsights_core::prelude::*;
//! ```

pub mod cards;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use cards::{fingerprinting_label, result_cards, CardKind, ResultCard};
pub use error::{
    AnalysisError, Error, Result, ResultExt, GENERIC_FETCH_FAILURE, INVALID_URL_MESSAGE,
};
pub use types::{AnalysisResult, AppPhase, RequestId, RequestState, VirusTotalResult};
pub use validation::{is_valid_url, validate_url};
