//! Client library for the Insightly CRM v2.1 REST API.
//!
//! The crate is organized into:
//!
//! - `error`: the `InsightlyError` enum returned by every operation
//! - `auth`: the API key credential and its Basic-Auth header
//! - `http`: configuration, the middleware HTTP client and the request builder
//! - `odata`: list options (`$top`, `$skip`, `$orderby`, `$filter`, ...)
//! - `resources`: the declarative resource catalog and generic operations over it
//! - `models`: typed records shared by comment and team-member operations
//! - `smoke`: a live smoke suite for checking an account end to end
//!
//! The main entry point is [`Insightly`], which hands out one [`Resource`]
//! handle per API collection.

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod models;
pub mod odata;
pub mod resources;
pub mod smoke;

pub use auth::Credential;
pub use client::Insightly;
pub use error::InsightlyError;
pub use crate::http::{ClientConfig, Method, Request};
pub use odata::ListOptions;
pub use resources::{Resource, ResourceSpec, SubResource};
pub use smoke::{SmokeOptions, SmokeReport};
