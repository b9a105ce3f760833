// src/api/mod.rs
//! Notion API interaction — the one upstream call behind each relay route.
//!
//! Handlers depend on [`NotionRepository`], never on HTTP details, so tests
//! can swap in an in-memory upstream.

pub mod client;
pub mod parser;
pub mod types;

use crate::error::AppError;
use crate::types::{DatabaseId, PageId};
use serde_json::Value;
use types::{CreatePageRequest, UpdatePageRequest};

/// The upstream operations the relay forwards.
///
/// Every method returns the upstream's JSON body untouched on success.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    async fn query_database(&self, database: &DatabaseId) -> Result<Value, AppError>;
    async fn retrieve_database(&self, id: &DatabaseId) -> Result<Value, AppError>;
    async fn retrieve_page(&self, id: &PageId) -> Result<Value, AppError>;
    async fn update_page(&self, id: &PageId, request: &UpdatePageRequest) -> Result<Value, AppError>;
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Value, AppError>;
}

// Re-export the public interface
pub use client::NotionHttpClient;
