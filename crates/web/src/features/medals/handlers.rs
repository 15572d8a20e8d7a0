use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::medal::{MedalTallyEntry, MedalWinnersResponse, SportMedalsResponse};

use crate::cache;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/medals",
    responses(
        (status = 200, description = "Medal tally for every department, standings order", body = Vec<MedalTallyEntry>)
    ),
    tag = "medals"
)]
pub async fn get_tally(State(state): State<AppState>) -> Result<Response, WebError> {
    if let Some(cached) = state.cache.get(cache::MEDAL_TALLY) {
        return Ok(Json(cached).into_response());
    }

    let tally = services::tally(state.db.pool()).await?;

    if let Ok(value) = serde_json::to_value(&tally) {
        state.cache.set(cache::MEDAL_TALLY, value);
    }

    Ok(Json(tally).into_response())
}

#[utoipa::path(
    get,
    path = "/api/medals/winners",
    responses(
        (status = 200, description = "All medal winners bucketed by colour", body = MedalWinnersResponse)
    ),
    tag = "medals"
)]
pub async fn get_winners(State(state): State<AppState>) -> Result<Response, WebError> {
    if let Some(cached) = state.cache.get(cache::MEDAL_WINNERS) {
        return Ok(Json(cached).into_response());
    }

    let winners = services::winners(state.db.pool()).await?;

    if let Ok(value) = serde_json::to_value(&winners) {
        state.cache.set(cache::MEDAL_WINNERS, value);
    }

    Ok(Json(winners).into_response())
}

#[utoipa::path(
    get,
    path = "/api/medals/sport/{sport_id}",
    params(
        ("sport_id" = i32, Path, description = "Sport id")
    ),
    responses(
        (status = 200, description = "Medal tally within one sport", body = SportMedalsResponse),
        (status = 404, description = "Sport not found")
    ),
    tag = "medals"
)]
pub async fn get_sport_medals(
    State(state): State<AppState>,
    Path(sport_id): Path<i32>,
) -> Result<Response, WebError> {
    let medals = services::sport_medals(state.db.pool(), sport_id).await?;

    Ok(Json(medals).into_response())
}
