//! HTTP client for the analysis backend

use std::error::Error as StdError;
use std::time::Duration;

use pinsights_core::prelude::*;
use pinsights_core::{AnalysisError, AnalysisResult};

use crate::endpoint::Endpoint;
use crate::response::interpret_response;

/// Something that can analyze a URL.
///
/// Implement the `Send` variant ([`AnalysisBackend`]); the engine spawns
/// analyses on tokio and is generic over it so tests can substitute a
/// scripted backend for the HTTP one.
#[trait_variant::make(AnalysisBackend: Send)]
pub trait LocalAnalysisBackend {
    /// Analyze an already-validated URL
    async fn analyze(&self, url: &str) -> std::result::Result<AnalysisResult, AnalysisError>;

    /// Endpoint description for logs and headless output
    fn endpoint(&self) -> String;
}

/// Options for building an [`HttpAnalysisClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// reqwest-backed analysis client.
///
/// Issues a single `GET {endpoint}?url={encoded}` per analysis with no body,
/// custom headers or authentication.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    endpoint: Endpoint,
    timeout: Option<Duration>,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: Endpoint, options: ClientOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        info!(
            "Analysis client ready: endpoint={}, timeout={:?}",
            endpoint, options.timeout
        );

        Ok(Self {
            http,
            endpoint,
            timeout: options.timeout,
        })
    }

    async fn fetch(&self, url: &str) -> std::result::Result<AnalysisResult, AnalysisError> {
        let request_url = self.endpoint.request_url(url);
        debug!("GET {}", request_url);

        let response = self
            .http
            .get(&request_url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("");

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;

        debug!(
            "Analysis backend answered {} ({} bytes)",
            status.as_u16(),
            body.len()
        );

        interpret_response(status.as_u16(), status_text, &body)
    }

    fn transport_error(&self, err: &reqwest::Error) -> AnalysisError {
        if err.is_timeout() {
            if let Some(timeout) = self.timeout {
                return AnalysisError::transport(format!(
                    "Request timed out after {} seconds",
                    timeout.as_secs()
                ));
            }
        }
        AnalysisError::transport(error_chain_message(err))
    }
}

impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze(&self, url: &str) -> std::result::Result<AnalysisResult, AnalysisError> {
        let result = self.fetch(url).await;
        if let Err(ref e) = result {
            warn!("Analysis of {} failed ({}): {}", url, e.kind(), e);
        }
        result
    }

    fn endpoint(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Join an error with its sources: `outer: inner: root`
fn error_chain_message(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
