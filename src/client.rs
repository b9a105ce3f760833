// src/client.rs
//! Client for front-ends that talk to a running relay.
//!
//! Mirrors the relay's routes one-to-one under a base URL that already
//! includes the `/api` prefix. Any non-success status from the relay
//! becomes [`ClientError::Status`]; nothing is retried or cached.

use crate::api::types::{CreatePageRequest, QueryResult, UpdatePageRequest};
use crate::constants::DEFAULT_RELAY_BASE_URL;
use crate::model::{Database, Page};
use crate::server::HealthStatus;
use crate::types::{DatabaseId, PageId, ValidatedUrl, ValidationError};
use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failures surfaced to callers of [`RelayClient`].
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API error: {status}")]
    Status { status: StatusCode },

    #[error("Relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected relay response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// The relay's HTTP status, when the relay answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Thin wrapper issuing the relay operations against a base URL.
#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    /// Creates a client for a relay at `base_url` (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = ValidatedUrl::parse(base_url)?;
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.as_base().to_string(),
        })
    }

    /// Creates a client for a relay on the default local port.
    pub fn local() -> Result<Self, ClientError> {
        Self::new(DEFAULT_RELAY_BASE_URL)
    }

    /// Runs the database query and returns only the page list.
    pub async fn query_database(&self, id: &DatabaseId) -> Result<Vec<Page>, ClientError> {
        let path = format!("databases/{}/query", id);
        let result: QueryResult = self
            .send(Method::POST, &path, None::<&()>, "querying database")
            .await?;
        Ok(result.results)
    }

    /// Fetches the database object as raw JSON.
    pub async fn get_database(&self, id: &DatabaseId) -> Result<Value, ClientError> {
        let path = format!("databases/{}", id);
        self.send(Method::GET, &path, None::<&()>, "retrieving database")
            .await
    }

    /// Fetches the database and decodes its schema.
    pub async fn get_database_schema(&self, id: &DatabaseId) -> Result<Database, ClientError> {
        let raw = self.get_database(id).await?;
        Ok(serde_json::from_value(raw)?)
    }

    /// Fetches a page as raw JSON.
    pub async fn get_page(&self, id: &PageId) -> Result<Value, ClientError> {
        let path = format!("pages/{}", id);
        self.send(Method::GET, &path, None::<&()>, "retrieving page")
            .await
    }

    /// Replaces the given properties on a page.
    pub async fn update_page(&self, id: &PageId, properties: Value) -> Result<Value, ClientError> {
        let path = format!("pages/{}", id);
        let body = UpdatePageRequest { properties };
        self.send(Method::PUT, &path, Some(&body), "updating page")
            .await
    }

    /// Creates a page under `parent`.
    pub async fn create_page(&self, parent: Value, properties: Value) -> Result<Value, ClientError> {
        let body = CreatePageRequest { parent, properties };
        self.send(Method::POST, "pages", Some(&body), "creating page")
            .await
    }

    /// Reads the relay's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.send(Method::GET, "health", None::<&()>, "checking relay health")
            .await
    }

    async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        operation: &str,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let result = self.try_send(method, path, body).await;
        if let Err(e) = &result {
            log::error!("Error {}: {}", operation, e);
        }
        result
    }

    async fn try_send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
