//! HTTP client and request layer for the Insightly API.
//!
//! This module handles all HTTP communication with Insightly's REST API,
//! including configuration, authentication, request construction and
//! response handling.

mod client;
mod request;

// Re-export client's public API
pub use client::{
    API_KEY_VAR, BASE_URL_VAR, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TIMEOUT_SECS_VAR,
    build_http_client,
};
pub use request::{Request, SUCCESS_STATUSES};

// Re-export common types used in our public API
pub use reqwest::Method;
pub use reqwest_middleware::ClientWithMiddleware;
