// src/lib.rs
//! notion-relay library — forwards page and database operations to the Notion API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `ServerConfig`, `Credentials`
//! - **Domain model** — `Page`, `Database`, `PropertyValue`, etc.
//! - **Upstream API** — `NotionRepository`, `NotionHttpClient`
//! - **Relay server** — `build_router`, `AppState`, `RelayFailure`
//! - **Formatting** — `extract_property_value`
//! - **Client library** — `RelayClient`, `ClientError`

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod model;
pub mod server;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, Credentials, DeploymentShape, ServerConfig};

// --- Domain Model ---
pub use crate::model::{Database, DatabaseProperty, Page, PropertyTypeValue, PropertyValue};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, DatabaseId, DateValue, Id, PageId, RichTextItem, SelectOption, ValidatedUrl,
};

// --- Upstream API ---
pub use crate::api::{
    types::{CreatePageRequest, PaginatedResponse, QueryResult, UpdatePageRequest},
    NotionHttpClient, NotionRepository,
};

// --- Relay Server ---
pub use crate::server::{build_router, AppState, HealthStatus, RelayFailure, RelayOperation};

// --- Formatting ---
pub use crate::formatting::{extract_json_property_value, extract_property_value};

// --- Client Library ---
pub use crate::client::{ClientError, RelayClient};
