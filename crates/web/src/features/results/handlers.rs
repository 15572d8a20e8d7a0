use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::event::UpdateEventStatusRequest;
use storage::dto::result::{
    CreateResultRequest, EventResultsResponse, ResultWithContext, UpdateResultRequest,
};
use storage::models::{EventResult, medal_label};
use validator::Validate;

use crate::activity::log_activity;
use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::notify::Update;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results/event/{event_id}",
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event with its results and matches", body = EventResultsResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "results"
)]
pub async fn get_event_results(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<Response, WebError> {
    let bundle = services::event_bundle(state.db.pool(), event_id).await?;

    Ok(Json(bundle).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All individual results, newest edits first", body = Vec<ResultWithContext>)
    ),
    tag = "results"
)]
pub async fn list_results(State(state): State<AppState>) -> Result<Response, WebError> {
    let results = services::list_results(state.db.pool()).await?;

    Ok(Json(results).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Result recorded", body = EventResult),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Position already assigned for this event")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::create_result(state.db.pool(), &req, user.id).await?;

    log_activity(
        &state.db,
        user.id,
        "ADD_RESULT",
        "result",
        Some(result.id),
        format!(
            "Added {} for {} in event {}",
            medal_label(req.position),
            req.participant_name,
            req.event_id
        ),
    );
    state.cache.invalidate_all();
    state.notifier.notify(Update::ResultAdded {
        event_id: req.event_id,
    });

    Ok((StatusCode::CREATED, Json(result)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(
        ("id" = i32, Path, description = "Result id")
    ),
    request_body = UpdateResultRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Result updated", body = EventResult),
        (status = 404, description = "Result not found"),
        (status = 409, description = "Position already assigned for this event")
    ),
    tag = "results"
)]
pub async fn update_result(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_result(state.db.pool(), id, &req, user.id).await?;

    log_activity(
        &state.db,
        user.id,
        "UPDATE_RESULT",
        "result",
        Some(id),
        format!("Updated result for {}", updated.participant_name),
    );
    state.cache.invalidate_all();
    state.notifier.notify(Update::ResultUpdated {
        event_id: updated.event_id,
    });

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = i32, Path, description = "Result id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Result deleted"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let deleted = services::delete_result(state.db.pool(), id).await?;

    log_activity(
        &state.db,
        user.id,
        "DELETE_RESULT",
        "result",
        Some(id),
        format!("Deleted result for {}", deleted.participant_name),
    );
    state.cache.invalidate_all();
    state.notifier.notify(Update::ResultDeleted {
        event_id: deleted.event_id,
    });

    Ok(Json(serde_json::json!({ "message": "Result deleted" })).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/event/{event_id}/status",
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    request_body = UpdateEventStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event status updated"),
        (status = 404, description = "Event not found")
    ),
    tag = "results"
)]
pub async fn set_event_status(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(event_id): Path<i32>,
    Json(req): Json<UpdateEventStatusRequest>,
) -> Result<Response, WebError> {
    services::set_event_status(state.db.pool(), event_id, req.status).await?;

    log_activity(
        &state.db,
        user.id,
        "UPDATE_EVENT_STATUS",
        "event",
        Some(event_id),
        format!("Changed event status to {}", req.status),
    );
    state.cache.invalidate_all();
    state.notifier.notify(Update::EventStatusChanged { event_id });

    Ok(Json(serde_json::json!({ "message": "Event status updated" })).into_response())
}
