//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // HTTP Client Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build HTTP client: {message}")]
    HttpClient { message: String },

    #[error("Invalid analysis endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn http_client(message: impl Into<String>) -> Self {
        Self::HttpClient {
            message: message.into(),
        }
    }

    pub fn invalid_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the application cannot continue after this error.
    /// Config errors fall back to defaults.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Config { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Analysis Outcome Errors
// ─────────────────────────────────────────────────────────────────

/// Message shown when the URL does not start with `http://` or `https://`.
pub const INVALID_URL_MESSAGE: &str =
    "Invalid URL format. Please enter a URL starting with http:// or https://";

/// Message shown when a transport failure carries no description of its own.
pub const GENERIC_FETCH_FAILURE: &str =
    "Failed to fetch analysis results. Check API status and URL.";

/// Why a single analysis did not produce a result.
///
/// The `Display` text is exactly what the user sees in the alert region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The URL failed the scheme-prefix check. Never reaches the network.
    #[error("{}", INVALID_URL_MESSAGE)]
    Validation,

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The request could not complete (DNS, refused connection, timeout).
    #[error("{message}")]
    Transport { message: String },

    /// A success response whose body does not match the result contract.
    #[error("Unexpected response from analysis backend: {message}")]
    Deserialization { message: String },
}

impl AnalysisError {
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Transport failure; an empty description falls back to the generic message.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_FETCH_FAILURE.to_string()
        } else {
            message
        };
        Self::Transport { message }
    }

    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization {
            message: message.into(),
        }
    }

    /// Stable snake_case tag used in headless output.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation => "validation",
            AnalysisError::Backend { .. } => "backend",
            AnalysisError::Transport { .. } => "transport",
            AnalysisError::Deserialization { .. } => "deserialization",
        }
    }

    /// HTTP status for backend errors
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
