use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::view::PlayerHeader;
use crate::calculate::PlayerDetailView;
use crate::models::PlayerId;
use crate::storage::read_recent_form;

#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub players: Vec<PlayerHeader>,
}

pub async fn list_players(State(state): State<AppState>) -> Json<PlayersResponse> {
    Json(PlayersResponse {
        players: state.players.iter().map(PlayerHeader::from).collect(),
    })
}

pub async fn player_detail(
    State(state): State<AppState>,
    Path(id): Path<PlayerId>,
) -> Result<Json<PlayerDetailView>, ApiError> {
    let player = state
        .players
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("Player {}", id)))?;

    let recent_form = read_recent_form(&state.storage, id)?;

    Ok(Json(PlayerDetailView::build(player, recent_form)))
}
