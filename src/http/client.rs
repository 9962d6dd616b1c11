//! HTTP client configuration and construction for the Insightly API.
//!
//! This module provides:
//! - `ClientConfig`: API key, base URL and timeout, in code or from the environment
//! - The shared middleware-wrapped HTTP client with timeout applied
//! - A tracing span backend so every API call is recorded as a span

use std::{env, time::Duration};

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use tracing::Span;

use crate::error::InsightlyError;

pub const DEFAULT_BASE_URL: &str = "https://api.insight.ly";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_VAR: &str = "INSIGHTLY_API_KEY";
pub const BASE_URL_VAR: &str = "INSIGHTLY_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "INSIGHTLY_TIMEOUT_SECS";

/// Settings for one `Insightly` client instance.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// `None` disables the client-side timeout entirely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// `INSIGHTLY_API_KEY` is required. `INSIGHTLY_BASE_URL` and
    /// `INSIGHTLY_TIMEOUT_SECS` fall back to the defaults when unset.
    ///
    /// # Errors
    /// Returns `InsightlyError::MissingConfig` if the API key is absent or the
    /// timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, InsightlyError> {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|e| InsightlyError::MissingConfig(format!("{API_KEY_VAR} must be set: {e}")))?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }

        if let Ok(raw) = env::var(TIMEOUT_SECS_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                InsightlyError::MissingConfig(format!("{TIMEOUT_SECS_VAR} is not a number: {e}"))
            })?;
            config = config.with_timeout(Some(Duration::from_secs(secs)));
        }

        Ok(config)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// Custom Tracing Backend for Reqwest so each API call gets its own span.
// Note: only used as a type parameter of TracingMiddleware<InsightlyTracing>.
#[allow(dead_code)]
struct InsightlyTracing;

impl ReqwestOtelSpanBackend for InsightlyTracing {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(
            name = "insightly-api-request",
            req,
            request_body = req.body().and_then(reqwest::Body::as_bytes).map(String::from_utf8_lossy).as_deref(),
        )
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Builds the middleware-wrapped HTTP client used for every API call.
///
/// # Errors
/// Returns `InsightlyError::Transport` if the underlying TLS backend cannot be
/// initialised.
pub fn build_http_client(timeout: Option<Duration>) -> Result<ClientWithMiddleware, InsightlyError> {
    let mut client_builder = reqwest::Client::builder();

    if let Some(timeout) = timeout {
        client_builder = client_builder.timeout(timeout);
    }

    Ok(ClientBuilder::new(client_builder.build()?)
        .with(TracingMiddleware::<InsightlyTracing>::new())
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_host() {
        let config = ClientConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let config = ClientConfig::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ClientConfig::new("very-secret");
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}
