//! HTTP gateway (Axum): document upload, health and readiness.
//!
//! This module is primarily used by the `verdict` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use handler::{DOCUMENT_FIELD, REVIEW_FIELD, predict_handler};
pub use state::HandlerState;

/// Response header reporting the outcome of a request.
pub const VERDICT_STATUS_HEADER: &str = "x-verdict-status";
pub const VERDICT_STATUS_HEALTHY: &str = "ok";
pub const VERDICT_STATUS_READY: &str = "ready";
pub const VERDICT_STATUS_NOT_READY: &str = "pending";
pub const VERDICT_STATUS_ERROR: &str = "error";
pub const VERDICT_STATUS_INVALID_REQUEST: &str = "invalid_request";
pub const VERDICT_STATUS_DEPENDENCY_ERROR: &str = "dependency_error";
pub const VERDICT_STATUS_TIMEOUT: &str = "timeout";
pub const VERDICT_STATUS_INTERNAL_ERROR: &str = "internal_error";

pub fn create_router_with_state(state: HandlerState) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/predict", post(predict_handler))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes));

    if let Some(static_dir) = &state.static_dir {
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub upload_dir: &'static str,
    pub corpus: CorpusStatus,
    pub embedder_mode: &'static str,
    pub grammar_mode: &'static str,
}

#[derive(serde::Serialize)]
pub struct CorpusStatus {
    pub records: usize,
    pub accepted: usize,
    pub domain_keywords: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        VERDICT_STATUS_HEADER,
        HeaderValue::from_static(VERDICT_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let upload_dir_status = if state.upload_dir.is_dir() {
        VERDICT_STATUS_READY
    } else {
        VERDICT_STATUS_ERROR
    };

    let index = state.context.index();
    let components = ComponentStatus {
        http: VERDICT_STATUS_READY,
        upload_dir: upload_dir_status,
        corpus: CorpusStatus {
            records: index.record_count(),
            accepted: index.accepted_count(),
            domain_keywords: index.domain_keywords().len(),
        },
        embedder_mode: state.context.embedder_mode(),
        grammar_mode: state.context.grammar_mode(),
    };

    let is_ready = components.upload_dir == VERDICT_STATUS_READY;

    let status_code = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status_msg = if is_ready {
        VERDICT_STATUS_HEALTHY
    } else {
        VERDICT_STATUS_NOT_READY
    };

    let mut headers = HeaderMap::new();
    headers.insert(VERDICT_STATUS_HEADER, HeaderValue::from_static(status_msg));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
