//! Routes of the HTTP API.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::error::{ServerError, ServerResult};
use super::AppState;
use crate::dispatch::{self, TransformRequest, TransformResponse};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/cipher", post(transform))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /api/cipher
pub async fn transform(
    State(state): State<AppState>,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> ServerResult<Json<TransformResponse>> {
    let Json(body) = payload?;
    tracing::info!(
        cipher = body.cipher.as_deref().unwrap_or_default(),
        mode = body.mode.as_deref().unwrap_or_default(),
        "Received cipher request"
    );

    let max = state.config.max_message_chars;
    if let Some(message) = &body.message {
        let len = message.chars().count();
        if len > max {
            return Err(ServerError::MessageTooLong { len, max });
        }
    }

    let response = dispatch::process(&body)?;
    Ok(Json(response))
}
