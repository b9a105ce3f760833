//! Shared helpers for the relay integration tests.
//!
//! [`FakeNotion`] stands in for the upstream API: it records every call and
//! answers with a scripted reply, so the full router (middleware included)
//! can be exercised without any network.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use notion_relay::error::NotionErrorCode;
use notion_relay::{
    build_router, AppError, AppState, CreatePageRequest, Credentials, DatabaseId,
    DeploymentShape, NotionRepository, PageId, UpdatePageRequest,
};
use serde_json::Value;
use tower::ServiceExt;

/// What the fake upstream answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Upstream { status: u16, body: String },
    Broken(String),
}

/// One call the relay made upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    QueryDatabase(String),
    RetrieveDatabase(String),
    RetrievePage(String),
    UpdatePage(String, UpdatePageRequest),
    CreatePage(CreatePageRequest),
}

pub struct FakeNotion {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeNotion {
    pub fn replying(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: RecordedCall) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push(call);
        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Upstream { status, body } => Err(AppError::NotionService {
                code: NotionErrorCode::from_http_status(*status),
                status: StatusCode::from_u16(*status).unwrap(),
                body: body.clone(),
            }),
            Reply::Broken(message) => Err(AppError::MalformedResponse(message.clone())),
        }
    }
}

#[async_trait::async_trait]
impl NotionRepository for FakeNotion {
    async fn query_database(&self, database: &DatabaseId) -> Result<Value, AppError> {
        self.answer(RecordedCall::QueryDatabase(database.to_string()))
    }

    async fn retrieve_database(&self, id: &DatabaseId) -> Result<Value, AppError> {
        self.answer(RecordedCall::RetrieveDatabase(id.to_string()))
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<Value, AppError> {
        self.answer(RecordedCall::RetrievePage(id.to_string()))
    }

    async fn update_page(&self, id: &PageId, request: &UpdatePageRequest) -> Result<Value, AppError> {
        self.answer(RecordedCall::UpdatePage(id.to_string(), request.clone()))
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Value, AppError> {
        self.answer(RecordedCall::CreatePage(request.clone()))
    }
}

/// Router in the given shape, backed by `fake`, with no credential configured.
pub fn build_test_app(fake: Arc<FakeNotion>, shape: DeploymentShape) -> Router {
    let state = AppState::new(fake, &Credentials::default());
    build_router(state, shape)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Serves `app` on an ephemeral localhost port and returns its address.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
