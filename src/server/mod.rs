//! Local HTTP surface of the relay.
//!
//! [`build_router`] assembles one of the two route tables together with
//! the shared middleware stack, so the binary and the integration tests
//! serve exactly the same thing.
//!
//! The middleware stack, outermost first:
//!
//! 1. CORS (`Access-Control-Allow-Origin: *`, `Content-Type` allowed)
//! 2. Request log line
//! 3. `OPTIONS` short-circuit: an empty 200 for any mounted path

pub mod error;
pub mod handlers;

pub use error::{RelayFailure, RelayOperation};
pub use handlers::HealthStatus;

use crate::api::NotionRepository;
use crate::config::{Credentials, DeploymentShape};
use crate::constants::RELAY_PATH_PREFIX;
use axum::extract::Request;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Shared, immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub notion: Arc<dyn NotionRepository>,
    pub notion_configured: bool,
}

impl AppState {
    pub fn new(notion: Arc<dyn NotionRepository>, credentials: &Credentials) -> Self {
        Self {
            notion,
            notion_configured: credentials.is_configured(),
        }
    }
}

/// Build the [`Router`] for the requested deployment shape.
pub fn build_router(state: AppState, shape: DeploymentShape) -> Router {
    match shape {
        DeploymentShape::Router => full_router(state),
        DeploymentShape::SingleRoute => single_route_router(state),
    }
}

/// Every relay route under `/api`.
fn full_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/databases/{id}/query", post(handlers::query_database))
        .route("/databases/{id}", get(handlers::retrieve_database))
        .route(
            "/pages/{id}",
            get(handlers::retrieve_page).put(handlers::update_page),
        )
        .route("/pages", post(handlers::create_page))
        .route("/health", get(handlers::health));

    Router::new()
        .nest(RELAY_PATH_PREFIX, routes)
        .layer(middleware::from_fn(answer_options))
        .layer(middleware::from_fn(log_request))
        .layer(cors_layer(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .with_state(state)
}

/// Only the query route, answering any other method with 405 and stamping
/// the allowed methods on every response.
fn single_route_router(state: AppState) -> Router {
    let query = post(handlers::query_database).fallback(handlers::method_not_allowed);

    Router::new()
        .route(&format!("{}/databases/{{id}}/query", RELAY_PATH_PREFIX), query)
        .layer(middleware::from_fn(answer_options))
        .layer(middleware::from_fn(log_request))
        .layer(cors_layer(vec![Method::POST, Method::OPTIONS]))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

fn cors_layer(methods: Vec<Method>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(methods)
        .allow_headers([CONTENT_TYPE])
}

/// Any `OPTIONS` request that is not a full CORS preflight still gets an empty 200.
async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

async fn log_request(request: Request, next: Next) -> Response {
    log::info!("{} {}", request.method(), request.uri());
    next.run(request).await
}
