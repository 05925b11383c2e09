//! Generic table client for a managed PostgREST-style data API.
//!
//! All persistence in this backend is delegated to an external managed
//! store; rows are read and written through its REST table surface rather
//! than a SQL driver. The client is deliberately small: typed table
//! handles, equality filters, ordering, and representation-returning
//! writes are all this backend needs.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::marker::PhantomData;
use std::time::Duration;
use thiserror::Error;

/// Postgres error code for unique-constraint violations, as reported in
/// the data API's error body.
const UNIQUE_VIOLATION_CODE: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("duplicate row: {0}")]
    Conflict(String),

    #[error("store API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode store response: {0}")]
    Decode(String),

    #[error("failed to encode row payload: {0}")]
    Encode(String),

    #[error("refusing to run an unfiltered {0}")]
    MissingFilter(&'static str),

    #[error("store returned no rows")]
    EmptyReturn,
}

/// Error body shape returned by the data API.
#[derive(Debug, Default, serde::Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    code: Option<String>,
}

fn api_error(status: StatusCode, body: &str) -> StoreError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .unwrap_or_else(|| body.chars().take(256).collect());

    if status == StatusCode::CONFLICT || parsed.code.as_deref() == Some(UNIQUE_VIOLATION_CODE) {
        StoreError::Conflict(message)
    } else {
        StoreError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

async fn read_rows<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>, StoreError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::debug!(status = %status, body = %body, "Store request rejected");
        return Err(api_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Client for the external data API. Cheap to clone; every request carries
/// the project API key as both `apikey` and bearer token.
#[derive(Clone)]
pub struct TableClient {
    http: Client,
    rest_url: String,
    api_key: Secret<String>,
}

impl TableClient {
    pub fn new(base_url: &str, api_key: Secret<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            api_key,
        }
    }

    /// Typed handle on a table exposed by the data API.
    pub fn table<T>(&self, name: &str) -> Table<T> {
        Table {
            client: self.clone(),
            url: format!("{}/{}", self.rest_url, name),
            _rows: PhantomData,
        }
    }

    /// Probe the REST root. Any success status means the store is
    /// reachable and the key is accepted.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        let response = self
            .request(Method::GET, &format!("{}/", self.rest_url))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Store health check failed");
            Err(api_error(status, &body))
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
    }
}

/// Typed handle on a single table.
pub struct Table<T> {
    client: TableClient,
    url: String,
    _rows: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Table<T> {
    pub fn select(&self) -> SelectBuilder<'_, T> {
        SelectBuilder {
            table: self,
            query: Vec::new(),
        }
    }

    /// Insert one row and return the stored representation.
    pub async fn insert(&self, row: &(impl Serialize + ?Sized)) -> Result<T, StoreError> {
        let response = self
            .client
            .request(Method::POST, &self.url)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let rows: Vec<T> = read_rows(response).await?;
        rows.into_iter().next().ok_or(StoreError::EmptyReturn)
    }

    /// Start a partial update. The patch is encoded up front; filters are
    /// added on the returned builder and are mandatory.
    pub fn update(
        &self,
        patch: &(impl Serialize + ?Sized),
    ) -> Result<UpdateBuilder<'_, T>, StoreError> {
        let patch = serde_json::to_value(patch).map_err(|e| StoreError::Encode(e.to_string()))?;
        Ok(UpdateBuilder {
            table: self,
            patch,
            query: Vec::new(),
        })
    }

    pub fn delete(&self) -> DeleteBuilder<'_, T> {
        DeleteBuilder {
            table: self,
            query: Vec::new(),
        }
    }
}

pub struct SelectBuilder<'a, T> {
    table: &'a Table<T>,
    query: Vec<(String, String)>,
}

impl<T: DeserializeOwned> SelectBuilder<'_, T> {
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.query.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.query
            .push(("order".to_string(), format!("{}.desc", column)));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.query
            .push(("order".to_string(), format!("{}.asc", column)));
        self
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.query.push(("limit".to_string(), n.to_string()));
        self
    }

    pub async fn fetch(self) -> Result<Vec<T>, StoreError> {
        let response = self
            .table
            .client
            .request(Method::GET, &self.table.url)
            .query(&[("select", "*")])
            .query(&self.query)
            .send()
            .await?;

        read_rows(response).await
    }

    /// Fetch at most one row.
    pub async fn fetch_optional(self) -> Result<Option<T>, StoreError> {
        let rows = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }
}

pub struct UpdateBuilder<'a, T> {
    table: &'a Table<T>,
    patch: serde_json::Value,
    query: Vec<(String, String)>,
}

impl<T: DeserializeOwned> UpdateBuilder<'_, T> {
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.query.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Run the update and return the first updated row.
    pub async fn fetch_one(self) -> Result<T, StoreError> {
        if self.query.is_empty() {
            return Err(StoreError::MissingFilter("update"));
        }

        let response = self
            .table
            .client
            .request(Method::PATCH, &self.table.url)
            .header("Prefer", "return=representation")
            .query(&self.query)
            .json(&self.patch)
            .send()
            .await?;

        let rows: Vec<T> = read_rows(response).await?;
        rows.into_iter().next().ok_or(StoreError::EmptyReturn)
    }
}

pub struct DeleteBuilder<'a, T> {
    table: &'a Table<T>,
    query: Vec<(String, String)>,
}

impl<T> DeleteBuilder<'_, T> {
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.query.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub async fn execute(self) -> Result<(), StoreError> {
        if self.query.is_empty() {
            return Err(StoreError::MissingFilter("delete"));
        }

        let response = self
            .table
            .client
            .request(Method::DELETE, &self.table.url)
            .query(&self.query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(api_error(status, &body))
        }
    }
}
