//! REST API endpoints.
//!
//! Axum-based HTTP API serving the player detail and comparison views,
//! the export document, and the share payload.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::models::{ComparisonError, ComparisonSet, PlayerId};
use crate::storage::{select_players, StorageError};
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::PlayerNotFound(_) => ApiError::NotFound(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ComparisonError> for ApiError {
    fn from(e: ComparisonError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Parse a comma-separated id list such as `"7,11"`.
pub fn parse_ids(raw: &str) -> Result<Vec<PlayerId>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<PlayerId>()
                .map_err(|_| ApiError::BadRequest(format!("Invalid player id: {}", s)))
        })
        .collect()
}

/// Build the comparison set for an id list, keeping the requested order.
pub fn load_comparison(state: &AppState, raw_ids: &str) -> Result<ComparisonSet, ApiError> {
    let ids = parse_ids(raw_ids)?;
    let players = select_players(&state.players, &ids)?;
    Ok(ComparisonSet::new(players)?)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin {
        "*" => layer.allow_origin(Any),
        other => match HeaderValue::from_str(other) {
            Ok(value) => layer.allow_origin(value),
            Err(_) => {
                tracing::warn!("Invalid CORS origin {:?}, allowing any", other);
                layer.allow_origin(Any)
            }
        },
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origin);

    Router::new()
        .route("/api/players", get(routes::players::list_players))
        .route("/api/players/:id", get(routes::players::player_detail))
        .route("/api/compare", get(routes::compare::compare))
        .route("/api/compare/export", get(routes::compare::export))
        .route("/api/compare/share", get(routes::compare::share))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
