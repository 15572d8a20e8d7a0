use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::sport::{
    CreateSportRequest, SportDetailResponse, SportsByDayResponse, UpdateSportRequest,
};
use storage::models::Sport;
use validator::Validate;

use crate::activity::log_activity;
use crate::cache;
use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/sports",
    responses(
        (status = 200, description = "All sports grouped by day, each with computed status", body = SportsByDayResponse)
    ),
    tag = "sports"
)]
pub async fn list_sports(State(state): State<AppState>) -> Result<Response, WebError> {
    if let Some(cached) = state.cache.get(cache::ALL_SPORTS) {
        return Ok(Json(cached).into_response());
    }

    let response = services::list_sports(state.db.pool()).await?;

    if let Ok(value) = serde_json::to_value(&response) {
        state.cache.set(cache::ALL_SPORTS, value);
    }

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/sports/{id}",
    params(
        ("id" = i32, Path, description = "Sport id")
    ),
    responses(
        (status = 200, description = "Sport with events, results and publicly visible matches", body = SportDetailResponse),
        (status = 404, description = "Sport not found")
    ),
    tag = "sports"
)]
pub async fn get_sport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let key = cache::sport_key(id);
    if let Some(cached) = state.cache.get(&key) {
        return Ok(Json(cached).into_response());
    }

    // A missing sport errors out here, so 404s are never cached
    let response = services::sport_detail(state.db.pool(), id).await?;

    if let Ok(value) = serde_json::to_value(&response) {
        state.cache.set(key, value);
    }

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sports",
    request_body = CreateSportRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Sport created", body = Sport),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "sports"
)]
pub async fn create_sport(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateSportRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sport = services::create_sport(state.db.pool(), &req).await?;

    log_activity(
        &state.db,
        user.id,
        "CREATE_SPORT",
        "sport",
        Some(sport.id),
        format!("Created sport: {}", sport.name),
    );
    state.cache.invalidate_all();

    Ok((StatusCode::CREATED, Json(sport)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/sports/{id}",
    params(
        ("id" = i32, Path, description = "Sport id")
    ),
    request_body = UpdateSportRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Sport updated", body = Sport),
        (status = 404, description = "Sport not found")
    ),
    tag = "sports"
)]
pub async fn update_sport(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateSportRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sport = services::update_sport(state.db.pool(), id, &req).await?;

    log_activity(
        &state.db,
        user.id,
        "UPDATE_SPORT",
        "sport",
        Some(id),
        format!("Updated sport: {}", sport.name),
    );
    state.cache.invalidate_all();

    Ok(Json(sport).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/sports/{id}",
    params(
        ("id" = i32, Path, description = "Sport id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Sport deleted"),
        (status = 404, description = "Sport not found")
    ),
    tag = "sports"
)]
pub async fn delete_sport(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let sport = services::delete_sport(state.db.pool(), id).await?;

    log_activity(
        &state.db,
        user.id,
        "DELETE_SPORT",
        "sport",
        Some(id),
        format!("Deleted sport: {}", sport.name),
    );
    state.cache.invalidate_all();

    Ok(Json(serde_json::json!({ "message": "Sport deleted" })).into_response())
}
