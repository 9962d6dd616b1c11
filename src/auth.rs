//! API key credential and the Basic authentication header derived from it.
//!
//! Insightly authenticates with HTTP Basic auth (RFC 7617) using the API key
//! as the username and an empty password.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// An Insightly API key, held for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
}

impl Credential {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `Authorization` header value: `Basic base64("<api_key>:")`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:", self.api_key));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
