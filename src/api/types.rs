// src/api/types.rs
//! Wire shapes shared by the relay, the upstream client and the client library.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: Option<String>,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Result of querying a database. The cursor is reported, never followed.
pub type QueryResult = PaginatedResponse<crate::model::Page>;

/// Body of an update-page call, both inbound (`PUT`) and upstream (`PATCH`).
///
/// Properties stay opaque JSON; Notion validates them. Absent fields are
/// left out of the upstream body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePageRequest {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub properties: Value,
}

/// Body of a create-page call, both inbound and upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePageRequest {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub parent: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub properties: Value,
}

/// Error object the Notion API returns with every non-success status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}
