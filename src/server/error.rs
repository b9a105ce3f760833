//! The failure envelope every relay route answers with.

use crate::error::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// The relay operations, named the way failure logs and envelopes refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOperation {
    QueryDatabase,
    RetrieveDatabase,
    RetrievePage,
    UpdatePage,
    CreatePage,
}

impl RelayOperation {
    /// Present-participle phrase used in log lines ("querying database").
    pub fn describe(self) -> &'static str {
        match self {
            Self::QueryDatabase => "querying database",
            Self::RetrieveDatabase => "retrieving database",
            Self::RetrievePage => "retrieving page",
            Self::UpdatePage => "updating page",
            Self::CreatePage => "creating page",
        }
    }

    /// Fixed `error` summary. Only the database routes carry one; the page
    /// routes put the message itself under `error`.
    pub fn failure_summary(self) -> Option<&'static str> {
        match self {
            Self::QueryDatabase => Some("Failed to query database"),
            Self::RetrieveDatabase => Some("Failed to retrieve database"),
            Self::RetrievePage | Self::UpdatePage | Self::CreatePage => None,
        }
    }
}

/// A relay failure, rendered as status 500 whatever the upstream said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayFailure {
    summary: Option<&'static str>,
    message: String,
}

impl RelayFailure {
    /// Logs the failure with its full context and builds the envelope.
    pub fn new(operation: RelayOperation, target: &str, error: &AppError) -> Self {
        log_failure(operation, target, error);
        Self {
            summary: operation.failure_summary(),
            message: error.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn log_failure(operation: RelayOperation, target: &str, error: &AppError) {
    match error {
        AppError::NotionService { code, status, body } => {
            log::error!(
                "Notion API error while {} {}: {} ({}) {}",
                operation.describe(),
                target,
                status.as_u16(),
                code,
                body
            );
        }
        other => {
            log::error!("Error {} {}: {}", operation.describe(), target, other);
        }
    }
}

impl IntoResponse for RelayFailure {
    fn into_response(self) -> Response {
        let body = match self.summary {
            Some(summary) => json!({
                "error": summary,
                "message": self.message,
            }),
            None => json!({ "error": self.message }),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
