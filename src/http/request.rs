//! Single-use request builder for the Insightly REST API.
//!
//! A `Request` is built per call, carries its own method, path, ordered query
//! pairs, headers and optional JSON body, and is consumed when executed.

use std::fmt::Display;

use reqwest::{Method, Url};
use reqwest_middleware::ClientWithMiddleware;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::form_urlencoded;

use crate::{auth::Credential, error::InsightlyError};

/// Statuses treated as success. Everything else is an `HttpStatus` error.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

/// One API call. Executing it consumes it, and it cannot be cloned:
///
/// ```compile_fail
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<insightly_client::Request>();
/// ```
#[derive(Debug)]
pub struct Request {
    http: ClientWithMiddleware,
    base_url: String,
    method: Method,
    path: String,
    query: Vec<String>,
    headers: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a request for `method` on `path` relative to `base_url`.
    ///
    /// # Errors
    /// Returns `InsightlyError::InvalidMethod` for anything other than
    /// GET, POST, PUT or DELETE.
    pub fn new(
        http: ClientWithMiddleware,
        base_url: impl Into<String>,
        credential: &Credential,
        method: Method,
        path: impl Into<String>,
    ) -> Result<Self, InsightlyError> {
        if ![Method::GET, Method::POST, Method::PUT, Method::DELETE].contains(&method) {
            return Err(InsightlyError::InvalidMethod(method.to_string()));
        }

        Ok(Self {
            http,
            base_url: base_url.into(),
            method,
            path: path.into(),
            query: Vec::new(),
            headers: vec![("Authorization", credential.authorization_header())],
            body: None,
        })
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    #[must_use]
    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Appends one `name=value` pair. Pairs keep the order they were added in
    /// and duplicate names are allowed.
    #[must_use]
    pub fn query_param(mut self, name: &str, value: impl Display) -> Self {
        let value = value.to_string();
        let value: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
        self.query.push(format!("{}={value}", encode_key(name)));
        self
    }

    /// Serializes `payload` as the JSON request body. A later call replaces
    /// both the body and its `Content-Type`.
    ///
    /// # Errors
    /// Returns `InsightlyError::Serialization` if `payload` cannot be encoded.
    pub fn body<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, InsightlyError> {
        let data = serde_json::to_vec(payload).map_err(InsightlyError::Serialization)?;
        self.body = Some(data);
        self.headers.retain(|(name, _)| *name != "Content-Type");
        self.headers
            .push(("Content-Type", "application/json".to_string()));
        Ok(self)
    }

    /// The full URL this request will hit. The `?` is omitted when there are
    /// no query parameters.
    #[must_use]
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            format!("{}{}", self.base_url, self.path)
        } else {
            format!("{}{}?{}", self.base_url, self.path, self.query.join("&"))
        }
    }

    /// Executes the request and returns the raw response body.
    ///
    /// # Errors
    /// - `InvalidUrl` if base URL and path do not form a valid URL
    /// - `Transport` on connection, DNS, TLS or timeout failures
    /// - `HttpStatus` if the status is not 200, 201 or 202
    pub async fn execute_as_text(self) -> Result<String, InsightlyError> {
        let url = Url::parse(&self.url())?;
        debug!(method = %self.method, %url, "sending Insightly request");

        let mut request_builder = self.http.request(self.method, url);
        for (name, value) in self.headers {
            request_builder = request_builder.header(name, value);
        }
        if let Some(body) = self.body {
            request_builder = request_builder.body(body);
        }

        let response = request_builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !SUCCESS_STATUSES.contains(&status) {
            debug!(status, "Insightly request failed");
            return Err(InsightlyError::HttpStatus { status, body: text });
        }

        Ok(text)
    }

    /// Executes the request and decodes the body as JSON.
    ///
    /// # Errors
    /// Everything `execute_as_text` returns, plus `Decode` on malformed JSON.
    pub async fn execute_as_json<T: DeserializeOwned>(self) -> Result<T, InsightlyError> {
        let text = self.execute_as_text().await?;
        serde_json::from_str(&text).map_err(InsightlyError::Decode)
    }
}

// OData keys keep their leading `$` literal; the rest is form-encoded.
fn encode_key(name: &str) -> String {
    match name.strip_prefix('$') {
        Some(rest) => format!("${}", form_urlencoded::byte_serialize(rest.as_bytes()).collect::<String>()),
        None => form_urlencoded::byte_serialize(name.as_bytes()).collect(),
    }
}
