//! # pinsights-client - Analysis Backend Client
//!
//! Talks to the remote privacy analysis service. One analysis is one
//! `GET {endpoint}?url={encoded}`; the response is decoded into an
//! [`AnalysisResult`](pinsights_core::AnalysisResult) or classified into an
//! [`AnalysisError`](pinsights_core::AnalysisError).
//!
//! ## Public API
//!
//! - [`AnalysisBackend`] - The seam the engine is generic over
//! - [`HttpAnalysisClient`] - reqwest implementation of the backend
//! - [`Endpoint`] / [`resolve_endpoint`] - Endpoint validation and precedence
//! - [`interpret_response`] - Status/body classification rules

pub mod client;
pub mod endpoint;
pub mod response;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{AnalysisBackend, ClientOptions, HttpAnalysisClient, LocalAnalysisBackend};
pub use endpoint::{
    encode_query_component, resolve_endpoint, Endpoint, EndpointSource, DEFAULT_ENDPOINT,
    ENDPOINT_ENV_VAR,
};
pub use response::interpret_response;
