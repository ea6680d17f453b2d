//! HTTP routes for the relay.

use crate::RelayService;
use crate::response::{HealthBody, RelayFailure};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use journal_guru_core::GenerationRequest;
use journal_guru_error::{RelayError, RelayErrorKind};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, instrument, warn};

/// Path of the generation endpoint.
pub const GENERATE_PATH: &str = "/api/generate-prompts";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/api/health";

/// Creates the relay router.
///
/// CORS is fully permissive so a browser form on any origin can call it.
pub fn create_router(relay: Arc<RelayService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(GENERATE_PATH, post(generate_prompts))
        .route(HEALTH_PATH, get(health_check))
        .with_state(relay)
        .layer(cors)
}

/// Generate journal prompts.
#[instrument(skip_all)]
async fn generate_prompts(
    State(relay): State<Arc<RelayService>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Unreadable request body");
            return RelayFailure(RelayError::new(RelayErrorKind::Validation)).into_response();
        }
    };

    match relay.generate(&request).await {
        Ok(result) => {
            debug!("Returning generated prompts");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => RelayFailure(e).into_response(),
    }
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody::ok()))
}
