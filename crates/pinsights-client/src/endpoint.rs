//! Analysis endpoint resolution and request URL construction

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use pinsights_core::prelude::*;
use url::Url;

/// Local development backend
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/analyze";

/// Environment override for the endpoint
pub const ENDPOINT_ENV_VAR: &str = "PINSIGHTS_API_ENDPOINT";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where an endpoint value came from, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    CommandLine,
    Environment,
    ConfigFile,
    Default,
}

/// A validated analysis endpoint (absolute `http`/`https` URL)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
    has_query: bool,
    source: EndpointSource,
}

impl Endpoint {
    /// Parse and validate an endpoint base URL
    pub fn parse(raw: &str, source: EndpointSource) -> Result<Self> {
        let raw = raw.trim();
        let parsed = Url::parse(raw).map_err(|e| Error::invalid_endpoint(raw, e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::invalid_endpoint(
                    raw,
                    format!("unsupported scheme '{}'", other),
                ))
            }
        }

        // Anything after '#' is never sent, so the url= parameter would be lost
        if parsed.fragment().is_some() {
            return Err(Error::invalid_endpoint(raw, "endpoint must not contain a fragment"));
        }

        Ok(Self {
            base: raw.to_string(),
            has_query: parsed.query().is_some(),
            source,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    pub fn source(&self) -> EndpointSource {
        self.source
    }

    /// Full request URL for analyzing `target`.
    ///
    /// The target is percent-encoded as a single query component. A base
    /// that already has a query string gets `&url=` appended.
    pub fn request_url(&self, target: &str) -> String {
        let separator = if self.has_query { '&' } else { '?' };
        format!(
            "{}{}url={}",
            self.base,
            separator,
            encode_query_component(target)
        )
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base: DEFAULT_ENDPOINT.to_string(),
            has_query: false,
            source: EndpointSource::Default,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base)
    }
}

/// Percent-encode a value the way `encodeURIComponent` does
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Resolve the endpoint: command line, then `PINSIGHTS_API_ENDPOINT`, then
/// the config file, then [`DEFAULT_ENDPOINT`].
///
/// Empty values at any level are treated as unset.
pub fn resolve_endpoint(cli: Option<&str>, config: Option<&str>) -> Result<Endpoint> {
    let env = std::env::var(ENDPOINT_ENV_VAR).ok();
    resolve_endpoint_from(cli, env.as_deref(), config)
}

fn resolve_endpoint_from(
    cli: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> Result<Endpoint> {
    fn non_empty(v: Option<&str>) -> Option<&str> {
        v.filter(|s| !s.trim().is_empty())
    }

    let endpoint = if let Some(raw) = non_empty(cli) {
        Endpoint::parse(raw, EndpointSource::CommandLine)?
    } else if let Some(raw) = non_empty(env) {
        Endpoint::parse(raw, EndpointSource::Environment)?
    } else if let Some(raw) = non_empty(config) {
        Endpoint::parse(raw, EndpointSource::ConfigFile)?
    } else {
        Endpoint::default()
    };

    debug!(
        "Using analysis endpoint {} (from {:?})",
        endpoint,
        endpoint.source()
    );
    Ok(endpoint)
}
