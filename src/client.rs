//! The `Insightly` client: credential, base URL and an injectable HTTP client.
//!
//! Resource accessors hand out [`Resource`] handles bound to a catalog entry;
//! all traffic goes through [`Insightly::request`].

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    auth::Credential,
    error::InsightlyError,
    http::{ClientConfig, ClientWithMiddleware, Method, Request, build_http_client},
    models::NewComment,
    resources::{Resource, ResourceSpec, catalog},
};

/// Client for the Insightly v2.1 REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
/// ```no_run
/// use insightly_client::{Insightly, ListOptions};
/// use serde_json::Value;
///
/// # async fn run() -> Result<(), insightly_client::InsightlyError> {
/// let insightly = Insightly::new("my-api-key")?;
/// let recent: Vec<Value> = insightly
///     .contacts()
///     .list(&ListOptions::new().order_by("DATE_UPDATED_UTC desc").top(5))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Insightly {
    credential: Arc<Credential>,
    base_url: String,
    http: ClientWithMiddleware,
}

impl Insightly {
    /// Client against the production API with the default timeout.
    ///
    /// # Errors
    /// Returns `InsightlyError::Transport` if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, InsightlyError> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// # Errors
    /// Returns `InsightlyError::Transport` if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, InsightlyError> {
        let http = build_http_client(config.timeout)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Uses a caller-supplied HTTP client, e.g. one with extra middleware.
    /// `config.timeout` is ignored; configure it on `http` instead.
    #[must_use]
    pub fn with_http_client(config: ClientConfig, http: ClientWithMiddleware) -> Self {
        Self {
            credential: Arc::new(Credential::new(config.api_key)),
            base_url: config.base_url,
            http,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Starts a request against `path` (relative to the base URL).
    ///
    /// # Errors
    /// Returns `InsightlyError::InvalidMethod` for verbs other than
    /// GET, POST, PUT and DELETE.
    pub fn request(&self, method: Method, path: impl Into<String>) -> Result<Request, InsightlyError> {
        Request::new(
            self.http.clone(),
            self.base_url.clone(),
            &self.credential,
            method,
            path,
        )
    }

    #[must_use]
    pub const fn resource(&self, spec: &'static ResourceSpec) -> Resource<'_> {
        Resource::new(self, spec)
    }

    #[must_use]
    pub const fn contacts(&self) -> Resource<'_> {
        self.resource(&catalog::CONTACTS)
    }

    #[must_use]
    pub const fn leads(&self) -> Resource<'_> {
        self.resource(&catalog::LEADS)
    }

    #[must_use]
    pub const fn lead_sources(&self) -> Resource<'_> {
        self.resource(&catalog::LEAD_SOURCES)
    }

    #[must_use]
    pub const fn countries(&self) -> Resource<'_> {
        self.resource(&catalog::COUNTRIES)
    }

    #[must_use]
    pub const fn currencies(&self) -> Resource<'_> {
        self.resource(&catalog::CURRENCIES)
    }

    #[must_use]
    pub const fn custom_fields(&self) -> Resource<'_> {
        self.resource(&catalog::CUSTOM_FIELDS)
    }

    #[must_use]
    pub const fn emails(&self) -> Resource<'_> {
        self.resource(&catalog::EMAILS)
    }

    #[must_use]
    pub const fn events(&self) -> Resource<'_> {
        self.resource(&catalog::EVENTS)
    }

    #[must_use]
    pub const fn file_categories(&self) -> Resource<'_> {
        self.resource(&catalog::FILE_CATEGORIES)
    }

    #[must_use]
    pub const fn notes(&self) -> Resource<'_> {
        self.resource(&catalog::NOTES)
    }

    #[must_use]
    pub const fn opportunities(&self) -> Resource<'_> {
        self.resource(&catalog::OPPORTUNITIES)
    }

    #[must_use]
    pub const fn opportunity_categories(&self) -> Resource<'_> {
        self.resource(&catalog::OPPORTUNITY_CATEGORIES)
    }

    #[must_use]
    pub const fn opportunity_state_reasons(&self) -> Resource<'_> {
        self.resource(&catalog::OPPORTUNITY_STATE_REASONS)
    }

    #[must_use]
    pub const fn organizations(&self) -> Resource<'_> {
        self.resource(&catalog::ORGANIZATIONS)
    }

    #[must_use]
    pub const fn pipelines(&self) -> Resource<'_> {
        self.resource(&catalog::PIPELINES)
    }

    #[must_use]
    pub const fn pipeline_stages(&self) -> Resource<'_> {
        self.resource(&catalog::PIPELINE_STAGES)
    }

    #[must_use]
    pub const fn project_categories(&self) -> Resource<'_> {
        self.resource(&catalog::PROJECT_CATEGORIES)
    }

    #[must_use]
    pub const fn projects(&self) -> Resource<'_> {
        self.resource(&catalog::PROJECTS)
    }

    #[must_use]
    pub const fn relationships(&self) -> Resource<'_> {
        self.resource(&catalog::RELATIONSHIPS)
    }

    #[must_use]
    pub const fn tags(&self) -> Resource<'_> {
        self.resource(&catalog::TAGS)
    }

    #[must_use]
    pub const fn tasks(&self) -> Resource<'_> {
        self.resource(&catalog::TASKS)
    }

    #[must_use]
    pub const fn teams(&self) -> Resource<'_> {
        self.resource(&catalog::TEAMS)
    }

    #[must_use]
    pub const fn team_members(&self) -> Resource<'_> {
        self.resource(&catalog::TEAM_MEMBERS)
    }

    #[must_use]
    pub const fn users(&self) -> Resource<'_> {
        self.resource(&catalog::USERS)
    }

    /// Posts a comment with `body` on behalf of `owner_user_id` to an email.
    ///
    /// # Errors
    /// Any request error.
    pub async fn add_email_comment<T: DeserializeOwned>(
        &self,
        email_id: u64,
        body: impl Into<String>,
        owner_user_id: u64,
    ) -> Result<T, InsightlyError> {
        let comment = NewComment {
            body: body.into(),
            owner_user_id,
        };
        self.emails().add_comment(email_id, &comment).await
    }
}
