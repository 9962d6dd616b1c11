//! Error types for the Insightly client.
//!
//! This module contains the single error enum returned by every fallible
//! operation in the crate. It provides:
//! - `InsightlyError`: covers request construction, transport, status and JSON failures
//! - Conversions from `reqwest`, `reqwest_middleware` and `url` errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightlyError {
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    #[error("Bad HTTP status code: {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Error encoding JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Error decoding JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("{resource} does not support {operation}")]
    UnsupportedOperation {
        resource: &'static str,
        operation: &'static str,
    },

    #[error("{resource} does not accept the `{option}` list option")]
    UnsupportedOption {
        resource: &'static str,
        option: &'static str,
    },
}

// Plain reqwest errors (client construction, body reads) are transport failures too.
impl From<reqwest::Error> for InsightlyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl InsightlyError {
    /// The HTTP status carried by an `HttpStatus` error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the API answered 404, as opposed to any other failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 404, .. })
    }
}
