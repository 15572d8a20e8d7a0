use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::matches::{
    CreateMatchRequest, QualificationQuery, QualifiedTeam, UpdateMatchRequest,
};
use storage::models::Match;
use validator::Validate;

use crate::activity::log_activity;
use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::notify::Update;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = CreateMatchRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Match created", body = Match),
        (status = 400, description = "Validation error")
    ),
    tag = "matches"
)]
pub async fn create_match(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let created = services::create_match(state.db.pool(), &req, user.id).await?;

    log_activity(
        &state.db,
        user.id,
        "ADD_MATCH",
        "match",
        Some(created.id),
        format!("Added match for event {}", created.event_id),
    );
    state.cache.invalidate_all();
    state.notifier.notify(Update::MatchAdded {
        event_id: created.event_id,
    });

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    params(
        ("id" = i32, Path, description = "Match id")
    ),
    request_body = UpdateMatchRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Match updated; medals re-derived when completed", body = Match),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn update_match(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome = services::update_match(state.db.pool(), id, &req, user.id).await?;
    let event_id = outcome.updated.event_id;

    for medal in &outcome.derived {
        log_activity(
            &state.db,
            user.id,
            "AUTO_MEDAL",
            "result",
            None,
            format!(
                "Auto-assigned {} to {}",
                medal.label(),
                medal.participant_name
            ),
        );
        state.notifier.notify(Update::ResultAdded { event_id });
    }

    log_activity(
        &state.db,
        user.id,
        "UPDATE_MATCH",
        "match",
        Some(id),
        format!("Updated match {id}"),
    );
    state.cache.invalidate_all();
    state.notifier.notify(Update::MatchUpdated { event_id });

    Ok(Json(outcome.updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    params(
        ("id" = i32, Path, description = "Match id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Match deleted, along with any results it derived"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let deleted = services::delete_match(state.db.pool(), id).await?;

    log_activity(
        &state.db,
        user.id,
        "DELETE_MATCH",
        "match",
        Some(id),
        format!("Deleted match {id}"),
    );
    state.cache.invalidate_all();
    state.notifier.notify(Update::MatchDeleted {
        event_id: deleted.event_id,
    });

    Ok(Json(serde_json::json!({ "message": "Match deleted" })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/qualification",
    params(QualificationQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Departments eligible for pairing into the target round", body = Vec<QualifiedTeam>)
    ),
    tag = "matches"
)]
pub async fn qualification(
    State(state): State<AppState>,
    Query(query): Query<QualificationQuery>,
) -> Result<Response, WebError> {
    let teams = services::qualified_teams(state.db.pool(), &query).await?;

    Ok(Json(teams).into_response())
}
