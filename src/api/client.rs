// src/api/client.rs
//! Pure HTTP client wrapper for the Notion API.
//!
//! This module provides a thin wrapper around reqwest for making
//! HTTP requests to the Notion API. It handles authentication and
//! basic request/response operations without any business logic.

use super::parser::parse_api_response;
use super::types::{CreatePageRequest, UpdatePageRequest};
use crate::config::Credentials;
use crate::constants::{NOTION_API_BASE_URL, NOTION_VERSION};
use crate::error::AppError;
use crate::types::{DatabaseId, PageId, ValidatedUrl};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::Value;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a client for the public Notion API.
    pub fn new(credentials: &Credentials) -> Result<Self, AppError> {
        Self::with_base_url(credentials, &ValidatedUrl::parse(NOTION_API_BASE_URL)?)
    }

    /// Creates a client that talks to `base_url` instead of the public API.
    pub fn with_base_url(credentials: &Credentials, base_url: &ValidatedUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(credentials)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.as_base().to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    ///
    /// Without a credential no `Authorization` header is sent at all and the
    /// upstream rejects the call on its own terms.
    fn create_headers(credentials: &Credentials) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        if let Some(api_key) = credentials.api_key() {
            let auth_header = format!("Bearer {}", api_key.as_str());
            let mut value = header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::InvalidConfiguration(format!("Invalid API token format: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        Ok(headers)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Makes a GET request to the specified endpoint (path without base URL).
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with a JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }

    /// Makes a PATCH request with a JSON body to the specified endpoint.
    pub async fn patch<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn query_database(&self, database: &DatabaseId) -> Result<Value, AppError> {
        let endpoint = format!("databases/{}/query", database);
        // No filter, no sorts, no cursor: the first page of rows as Notion orders them
        let response = self.post(&endpoint, &serde_json::json!({})).await?;
        parse_api_response(extract_response_text(response).await?)
    }

    async fn retrieve_database(&self, id: &DatabaseId) -> Result<Value, AppError> {
        let endpoint = format!("databases/{}", id);
        let response = self.get(&endpoint).await?;
        parse_api_response(extract_response_text(response).await?)
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<Value, AppError> {
        let endpoint = format!("pages/{}", id);
        let response = self.get(&endpoint).await?;
        parse_api_response(extract_response_text(response).await?)
    }

    async fn update_page(&self, id: &PageId, request: &UpdatePageRequest) -> Result<Value, AppError> {
        let endpoint = format!("pages/{}", id);
        let response = self.patch(&endpoint, request).await?;
        parse_api_response(extract_response_text(response).await?)
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Value, AppError> {
        let response = self.post("pages", request).await?;
        parse_api_response(extract_response_text(response).await?)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    log::debug!("{} answered {}", url, status);

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
