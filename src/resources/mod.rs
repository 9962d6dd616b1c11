//! Generic operations over the Insightly resource catalog.
//!
//! Every resource in [`catalog`] is described by a [`ResourceSpec`]; a
//! [`Resource`] handle pairs one of those descriptions with a client and
//! exposes list / get / upsert / delete / nested-fetch in a single place.
//! Operations the catalog does not grant to a resource fail with
//! `UnsupportedOperation` before any request is sent.

pub mod catalog;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::{
    client::Insightly,
    error::InsightlyError,
    http::Method,
    odata::{ListOptions, ListSupport},
};

/// Which verbs a resource accepts.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operations {
    pub list: bool,
    pub get: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl Operations {
    pub const NONE: Self = Self {
        list: false,
        get: false,
        create: false,
        update: false,
        delete: false,
    };
}

/// Child collections reachable as `{path}/{parent_id}/{segment}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubResource {
    Emails,
    Notes,
    Tasks,
    Comments,
    StateHistory,
}

impl SubResource {
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Emails => "Emails",
            Self::Notes => "Notes",
            Self::Tasks => "Tasks",
            Self::Comments => "Comments",
            Self::StateHistory => "StateHistory",
        }
    }
}

/// Static description of one API resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Collection name as the API spells it.
    pub name: &'static str,
    pub path: &'static str,
    pub operations: Operations,
    /// Field whose positive value turns an upsert into an update.
    pub id_field: Option<&'static str>,
    pub list_support: ListSupport,
    pub nested: &'static [SubResource],
}

impl ResourceSpec {
    #[must_use]
    pub fn supports(&self, sub: SubResource) -> bool {
        self.nested.contains(&sub)
    }
}

/// Picks PUT when `payload[id_field]` is a positive id and POST otherwise.
#[must_use]
pub fn upsert_method(payload: &Value, id_field: &str) -> Method {
    let id = match payload.get(id_field) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    if id.is_some_and(|id| id > 0.0) {
        Method::PUT
    } else {
        Method::POST
    }
}

/// A resource bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    client: &'a Insightly,
    spec: &'static ResourceSpec,
}

impl<'a> Resource<'a> {
    #[must_use]
    pub const fn new(client: &'a Insightly, spec: &'static ResourceSpec) -> Self {
        Self { client, spec }
    }

    #[must_use]
    pub const fn spec(&self) -> &'static ResourceSpec {
        self.spec
    }

    fn require(&self, allowed: bool, operation: &'static str) -> Result<(), InsightlyError> {
        if allowed {
            Ok(())
        } else {
            Err(InsightlyError::UnsupportedOperation {
                resource: self.spec.name,
                operation,
            })
        }
    }

    /// `GET {path}` with the given list options.
    ///
    /// # Errors
    /// `UnsupportedOperation`, `UnsupportedOption`, or any request error.
    pub async fn list<T: DeserializeOwned>(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<T>, InsightlyError> {
        self.require(self.spec.operations.list, "list")?;
        let request = self.client.request(Method::GET, self.spec.path)?;
        options
            .apply(self.spec.name, self.spec.list_support, request)?
            .execute_as_json()
            .await
    }

    /// `GET {path}/{id}`.
    ///
    /// # Errors
    /// `UnsupportedOperation`, or any request error (`is_not_found()` for a
    /// missing record).
    pub async fn get<T: DeserializeOwned>(&self, id: u64) -> Result<T, InsightlyError> {
        self.require(self.spec.operations.get, "get")?;
        self.client
            .request(Method::GET, format!("{}/{id}", self.spec.path))?
            .execute_as_json()
            .await
    }

    /// Creates or updates a record depending on whether the payload carries a
    /// positive id in the resource's id field.
    ///
    /// # Errors
    /// `UnsupportedOperation` for resources without an id field,
    /// `Serialization` for unencodable payloads, or any request error.
    pub async fn upsert<P, T>(&self, payload: &P) -> Result<T, InsightlyError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let Some(id_field) = self.spec.id_field else {
            return Err(InsightlyError::UnsupportedOperation {
                resource: self.spec.name,
                operation: "upsert",
            });
        };

        let value = serde_json::to_value(payload).map_err(InsightlyError::Serialization)?;
        let method = upsert_method(&value, id_field);
        debug!(resource = self.spec.name, %method, "upsert dispatched");

        self.client
            .request(method, self.spec.path)?
            .body(&value)?
            .execute_as_json()
            .await
    }

    /// `POST {path}` regardless of any id in the payload.
    ///
    /// # Errors
    /// `UnsupportedOperation`, `Serialization`, or any request error.
    pub async fn create<P, T>(&self, payload: &P) -> Result<T, InsightlyError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.require(self.spec.operations.create, "create")?;
        self.client
            .request(Method::POST, self.spec.path)?
            .body(payload)?
            .execute_as_json()
            .await
    }

    /// `PUT {path}` with the full record as body.
    ///
    /// # Errors
    /// `UnsupportedOperation`, `Serialization`, or any request error.
    pub async fn update<P, T>(&self, payload: &P) -> Result<T, InsightlyError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.require(self.spec.operations.update, "update")?;
        self.client
            .request(Method::PUT, self.spec.path)?
            .body(payload)?
            .execute_as_json()
            .await
    }

    /// `DELETE {path}/{id}`. The response body is discarded.
    ///
    /// # Errors
    /// `UnsupportedOperation`, or any request error.
    pub async fn delete(&self, id: u64) -> Result<bool, InsightlyError> {
        self.require(self.spec.operations.delete, "delete")?;
        self.client
            .request(Method::DELETE, format!("{}/{id}", self.spec.path))?
            .execute_as_text()
            .await?;
        Ok(true)
    }

    /// `GET {path}/{parent_id}/{sub}`.
    ///
    /// # Errors
    /// `UnsupportedOperation` if `sub` is not a child of this resource, or
    /// any request error.
    pub async fn nested<T: DeserializeOwned>(
        &self,
        parent_id: u64,
        sub: SubResource,
    ) -> Result<Vec<T>, InsightlyError> {
        self.require(self.spec.supports(sub), sub.segment())?;
        self.client
            .request(
                Method::GET,
                format!("{}/{parent_id}/{}", self.spec.path, sub.segment()),
            )?
            .execute_as_json()
            .await
    }

    /// `POST {path}/{parent_id}/Comments`.
    ///
    /// # Errors
    /// `UnsupportedOperation` if the resource has no comments, `Serialization`,
    /// or any request error.
    pub async fn add_comment<P, T>(&self, parent_id: u64, comment: &P) -> Result<T, InsightlyError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.require(self.spec.supports(SubResource::Comments), "add_comment")?;
        self.client
            .request(
                Method::POST,
                format!("{}/{parent_id}/{}", self.spec.path, SubResource::Comments.segment()),
            )?
            .body(comment)?
            .execute_as_json()
            .await
    }

    /// First record of the collection, for interactive experimentation.
    ///
    /// Asks for a single record when the resource supports `$top`. An empty
    /// collection yields `Ok(None)`.
    ///
    /// # Errors
    /// `UnsupportedOperation` for resources that cannot be listed, or any
    /// request error.
    pub async fn sample<T: DeserializeOwned>(&self) -> Result<Option<T>, InsightlyError> {
        let options = if self.spec.list_support.odata {
            ListOptions::new().top(1)
        } else {
            ListOptions::new()
        };
        let records: Vec<T> = self.list(&options).await?;
        Ok(records.into_iter().next())
    }
}
