//! Relay handlers: one inbound request, one upstream call, one response.

use super::error::{RelayFailure, RelayOperation};
use super::AppState;
use crate::api::types::{CreatePageRequest, UpdatePageRequest};
use crate::error::AppError;
use crate::types::{DatabaseId, PageId};
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

type RelayResult = Result<Json<Value>, RelayFailure>;

/// Path id as extracted by axum; a rejection becomes a relay failure.
type IdParam = Result<Path<String>, PathRejection>;

/// Raw request body; a rejection (e.g. over the size limit) becomes a relay failure.
type BodyParam = Result<Bytes, BytesRejection>;

/// Placeholder used in failure logs when the id could not be extracted.
const UNREADABLE_ID: &str = "(unreadable id)";

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub notion_configured: bool,
}

/// `POST /databases/{id}/query`
pub async fn query_database(State(state): State<AppState>, id: IdParam) -> RelayResult {
    let id = path_id(id, RelayOperation::QueryDatabase)?;
    log::info!("Querying database: {}", id);

    let outcome: Result<Value, AppError> = async {
        let database = DatabaseId::parse(&id)?;
        state.notion.query_database(&database).await
    }
    .await;

    match outcome {
        Ok(data) => {
            log::info!(
                "Query successful! Found {} results",
                data.get("results")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len)
            );
            Ok(Json(data))
        }
        Err(err) => Err(RelayFailure::new(RelayOperation::QueryDatabase, &id, &err)),
    }
}

/// `GET /databases/{id}`
pub async fn retrieve_database(State(state): State<AppState>, id: IdParam) -> RelayResult {
    let id = path_id(id, RelayOperation::RetrieveDatabase)?;
    log::info!("Retrieving database: {}", id);

    let outcome: Result<Value, AppError> = async {
        let database = DatabaseId::parse(&id)?;
        state.notion.retrieve_database(&database).await
    }
    .await;

    relay(outcome, RelayOperation::RetrieveDatabase, &id)
}

/// `GET /pages/{id}`
pub async fn retrieve_page(State(state): State<AppState>, id: IdParam) -> RelayResult {
    let id = path_id(id, RelayOperation::RetrievePage)?;
    log::info!("Retrieving page: {}", id);

    let outcome: Result<Value, AppError> = async {
        let page = PageId::parse(&id)?;
        state.notion.retrieve_page(&page).await
    }
    .await;

    relay(outcome, RelayOperation::RetrievePage, &id)
}

/// `PUT /pages/{id}` with `{ properties }`, forwarded as a `PATCH`.
pub async fn update_page(
    State(state): State<AppState>,
    id: IdParam,
    body: BodyParam,
) -> RelayResult {
    let id = path_id(id, RelayOperation::UpdatePage)?;
    log::info!("Updating page: {}", id);

    let outcome: Result<Value, AppError> = async {
        let page = PageId::parse(&id)?;
        let request: UpdatePageRequest = parse_request_body(body)?;
        state.notion.update_page(&page, &request).await
    }
    .await;

    relay(outcome, RelayOperation::UpdatePage, &id)
}

/// `POST /pages` with `{ parent, properties }`.
pub async fn create_page(State(state): State<AppState>, body: BodyParam) -> RelayResult {
    log::info!("Creating page");

    let outcome: Result<Value, AppError> = async {
        let request: CreatePageRequest = parse_request_body(body)?;
        state.notion.create_page(&request).await
    }
    .await;

    relay(outcome, RelayOperation::CreatePage, "(new page)")
}

/// `GET /health`: liveness plus whether a token was configured. No upstream call.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        notion_configured: state.notion_configured,
    })
}

/// Fallback for methods the single-route shape does not serve.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

fn relay(outcome: Result<Value, AppError>, operation: RelayOperation, target: &str) -> RelayResult {
    outcome
        .map(Json)
        .map_err(|err| RelayFailure::new(operation, target, &err))
}

fn path_id(id: IdParam, operation: RelayOperation) -> Result<String, RelayFailure> {
    id.map(|Path(id)| id).map_err(|rejection| {
        let err = AppError::InvalidPath(rejection.body_text());
        RelayFailure::new(operation, UNREADABLE_ID, &err)
    })
}

/// An empty body means "no fields"; anything else must be a JSON object.
fn parse_request_body<T>(body: BodyParam) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    let body = body.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    decode_body(&body)
}

fn decode_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::InvalidRequest(e.to_string()))
}
