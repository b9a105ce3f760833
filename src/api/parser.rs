// src/api/parser.rs
//! Turns raw upstream responses into relay results.
//!
//! Success bodies are decoded as-is. Error bodies are classified by their
//! Notion error code (falling back to the HTTP status) and kept verbatim so
//! the failure can be logged without replaying the request.

use super::client::ApiResponse;
use super::types::NotionErrorBody;
use crate::error::{AppError, NotionErrorCode};
use reqwest::StatusCode;

/// Parse any Notion API response, success or failure.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_response(result.data, result.status))
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (from {})", e, url))
    })
}

/// Builds the upstream-failure error, classifying the body's `code` when present.
pub fn parse_error_response(body: String, status: StatusCode) -> AppError {
    let code = classify_error_body(&body, status);
    AppError::NotionService { code, status, body }
}

/// Reads the Notion error code out of an error body.
pub fn classify_error_body(body: &str, status: StatusCode) -> NotionErrorCode {
    match serde_json::from_str::<NotionErrorBody>(body) {
        Ok(error) => NotionErrorCode::from_api_response(&error.code),
        Err(_) => NotionErrorCode::from_http_status(status.as_u16()),
    }
}
