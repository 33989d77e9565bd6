use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use url::form_urlencoded;

use crate::api::state::AppState;
use crate::api::{load_comparison, ApiError};
use crate::calculate::ComparisonView;
use crate::export::{export_snapshot, SystemClock, SNAPSHOT_CONTENT_TYPE};
use crate::share::{comparison_url, SharePayload};

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    /// Comma-separated player ids, in display order
    pub ids: String,
}

pub async fn compare(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<ComparisonView>, ApiError> {
    let set = load_comparison(&state, &params.ids)?;
    Ok(Json(ComparisonView::build(&set)))
}

pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<impl IntoResponse, ApiError> {
    let set = load_comparison(&state, &params.ids)?;
    let export = export_snapshot(&set, &SystemClock);
    let body = export
        .document
        .to_json_pretty()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!("Exporting comparison {}", export.filename);

    Ok((
        [
            (header::CONTENT_TYPE, SNAPSHOT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&export.filename),
            ),
        ],
        body,
    ))
}

/// `attachment` disposition with a quoted ASCII fallback and an RFC 5987 `filename*`.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => format!("\\{}", c),
            c if c.is_ascii_graphic() || c == ' ' => c.to_string(),
            _ => "_".to_string(),
        })
        .collect();

    // form encoding writes spaces as '+' and leaves '*' bare; neither is an attr-char
    let encoded: String = form_urlencoded::byte_serialize(filename.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace('*', "%2A");

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}

pub async fn share(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<SharePayload>, ApiError> {
    let set = load_comparison(&state, &params.ids)?;
    let base = state
        .config
        .page_url()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(SharePayload::for_comparison(
        &set,
        &state.config.app_label,
        &comparison_url(&base, &set),
    )))
}
