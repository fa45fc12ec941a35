//! noteleaf-api - AI proxy HTTP service for noteleaf.
//!
//! A stateless request handler in front of the external completion API. The
//! upstream credential is held server-side and never reaches the caller;
//! upstream error detail is logged here and reported to the client only as a
//! generic failure.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value as JsonValue;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{debug, error};
use uuid::Uuid;

use noteleaf_core::{defaults, AiInsight};
use noteleaf_insight::NoteAnalyzer;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically, which keeps
/// log correlation cheap when debugging proxy incidents.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// APPLICATION STATE
// =============================================================================

/// Application state shared across handlers.
///
/// The analyzer is the only shared piece and it is immutable; every request
/// is otherwise independent.
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<NoteAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: NoteAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Build the proxy router with all middleware layers applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ai-note", post(ai_note).fallback(method_not_allowed))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(defaults::MAX_BODY_SIZE_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Liveness probe.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "noteleaf-api"
    }))
}

/// `POST /ai-note` with `{ "content": "<text>" }`.
///
/// The body is parsed by hand so every malformed shape (no body, non-JSON,
/// missing/non-string/empty `content`) produces the same client error
/// instead of a framework-specific rejection.
async fn ai_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AiInsight>, ApiError> {
    let content = serde_json::from_slice::<JsonValue>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("content")
                .and_then(JsonValue::as_str)
                .map(str::to_string)
        })
        .filter(|content| !content.is_empty())
        .ok_or(ApiError::MissingContent)?;

    debug!(prompt_len = content.len(), "Proxying insight request");

    let insight = state
        .analyzer
        .analyze(&content, &CancellationToken::new())
        .await?;

    Ok(Json(insight))
}

/// Any verb other than POST on `/ai-note`.
async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Proxy-side errors, converted to the fixed HTTP error shapes.
///
/// Internal detail (upstream response bodies, config problems) is logged
/// server-side and never serialized into a response.
#[derive(Debug)]
pub enum ApiError {
    MissingContent,
    Upstream(noteleaf_core::Error),
    Internal(noteleaf_core::Error),
}

impl From<noteleaf_core::Error> for ApiError {
    fn from(err: noteleaf_core::Error) -> Self {
        match &err {
            noteleaf_core::Error::InvalidInput(_) => ApiError::MissingContent,
            noteleaf_core::Error::Upstream(_) => ApiError::Upstream(err),
            _ => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::MissingContent => (StatusCode::BAD_REQUEST, "Missing note content"),
            ApiError::Upstream(err) => {
                error!(error = %err, "Upstream completion API failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "AI request failed")
            }
            ApiError::Internal(err) => {
                error!(error = %err, "Internal proxy failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
