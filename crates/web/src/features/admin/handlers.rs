use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::activity::{ActivityLogEntry, ActivityLogQuery};
use storage::dto::department::{CreateDepartmentRequest, UpdateDepartmentRequest};
use storage::dto::event::{CreateEventRequest, EventWithSport};
use storage::dto::matches::MatchDetail;
use storage::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use storage::dto::visibility::{UpdateVisibilityRequest, VisibilityResponse};
use storage::models::{Department, Event, Sport};
use validator::Validate;

use crate::activity::log_activity;
use crate::error::WebError;
use crate::features::auth::services::hash_password;
use crate::middleware::auth::CurrentUser;
use crate::notify::Update;
use crate::state::AppState;

use super::services;

const DEFAULT_LOG_LIMIT: i64 = 100;

#[utoipa::path(
    get,
    path = "/api/admin/users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All user accounts", body = Vec<UserResponse>)
    ),
    tag = "admin"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Response, WebError> {
    let users = services::list_users(state.db.pool()).await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already exists")
    ),
    tag = "admin"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(actor): Extension<CurrentUser>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let hash = hash_password(&req.password)
        .map_err(|e| WebError::Internal(format!("Failed to hash password: {e}")))?;

    let user = services::create_user(state.db.pool(), &req, &hash).await?;

    log_activity(
        &state.db,
        actor.id,
        "CREATE_USER",
        "user",
        Some(user.id),
        format!("Created {} user: {}", user.role.as_str(), user.username),
    );

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "admin"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(actor): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let hash = match &req.password {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| WebError::Internal(format!("Failed to hash password: {e}")))?,
        ),
        None => None,
    };

    let user = services::update_user(state.db.pool(), id, &req, hash.as_deref()).await?;

    log_activity(
        &state.db,
        actor.id,
        "UPDATE_USER",
        "user",
        Some(id),
        format!("Updated user: {}", user.username),
    );

    Ok(Json(UserResponse::from(user)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Attempted to delete own account"),
        (status = 404, description = "User not found")
    ),
    tag = "admin"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(actor): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    if id == actor.id {
        return Err(WebError::BadRequest(
            "Cannot delete your own account".to_string(),
        ));
    }

    let user = services::delete_user(state.db.pool(), id).await?;

    log_activity(
        &state.db,
        actor.id,
        "DELETE_USER",
        "user",
        Some(id),
        format!("Deleted user: {}", user.username),
    );

    Ok(Json(serde_json::json!({ "message": "User deleted" })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/departments",
    responses(
        (status = 200, description = "All departments", body = Vec<Department>)
    ),
    tag = "admin"
)]
pub async fn list_departments(State(state): State<AppState>) -> Result<Response, WebError> {
    let departments = services::list_departments(state.db.pool()).await?;

    Ok(Json(departments).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/departments",
    request_body = CreateDepartmentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Department created", body = Department),
        (status = 409, description = "Name or short code already exists")
    ),
    tag = "admin"
)]
pub async fn create_department(
    State(state): State<AppState>,
    Extension(actor): Extension<CurrentUser>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let department =
        services::create_department(state.db.pool(), &req.name, &req.short_code).await?;

    log_activity(
        &state.db,
        actor.id,
        "CREATE_DEPARTMENT",
        "department",
        Some(department.id),
        format!("Created department: {}", department.name),
    );
    state.cache.invalidate_all();

    Ok((StatusCode::CREATED, Json(department)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department id")
    ),
    request_body = UpdateDepartmentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Department updated", body = Department),
        (status = 404, description = "Department not found")
    ),
    tag = "admin"
)]
pub async fn update_department(
    State(state): State<AppState>,
    Extension(actor): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let department = services::update_department(
        state.db.pool(),
        id,
        req.name.as_deref(),
        req.short_code.as_deref(),
    )
    .await?;

    log_activity(
        &state.db,
        actor.id,
        "UPDATE_DEPARTMENT",
        "department",
        Some(id),
        format!("Updated department: {}", department.name),
    );
    state.cache.invalidate_all();

    Ok(Json(department).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Department deleted"),
        (status = 404, description = "Department not found")
    ),
    tag = "admin"
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Extension(actor): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let department = services::delete_department(state.db.pool(), id).await?;

    log_activity(
        &state.db,
        actor.id,
        "DELETE_DEPARTMENT",
        "department",
        Some(id),
        format!("Deleted department: {}", department.name),
    );
    state.cache.invalidate_all();

    Ok(Json(serde_json::json!({ "message": "Department deleted" })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All events with sport context", body = Vec<EventWithSport>)
    ),
    tag = "admin"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = services::list_events(state.db.pool()).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events",
    request_body = CreateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation error")
    ),
    tag = "admin"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Extension(actor): Extension<CurrentUser>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(state.db.pool(), &req).await?;

    log_activity(
        &state.db,
        actor.id,
        "CREATE_EVENT",
        "event",
        Some(event.id),
        format!("Created event: {} ({})", event.name, event.category.as_str()),
    );
    state.cache.invalidate_all();

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/logs",
    params(ActivityLogQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Recent activity log entries", body = Vec<ActivityLogEntry>)
    ),
    tag = "admin"
)]
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<ActivityLogQuery>,
) -> Result<Response, WebError> {
    let limit = query.limit.unwrap_or(DEFAULT_LOG_LIMIT);
    let logs = services::list_logs(state.db.pool(), limit).await?;

    Ok(Json(logs).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/sports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All sports including visibility settings", body = Vec<Sport>)
    ),
    tag = "admin"
)]
pub async fn list_sports(State(state): State<AppState>) -> Result<Response, WebError> {
    let sports = services::list_sports(state.db.pool()).await?;

    Ok(Json(sports).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/sports/{id}/visibility",
    params(
        ("id" = i32, Path, description = "Sport id")
    ),
    request_body = UpdateVisibilityRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visibility updated", body = VisibilityResponse),
        (status = 404, description = "Sport not found")
    ),
    tag = "admin"
)]
pub async fn update_visibility(
    State(state): State<AppState>,
    Extension(actor): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateVisibilityRequest>,
) -> Result<Response, WebError> {
    let sport = services::update_visibility(state.db.pool(), id, &req).await?;

    if req.visible_rounds.is_some() {
        log_activity(
            &state.db,
            actor.id,
            "UPDATE_VISIBILITY",
            "sport",
            Some(id),
            format!(
                "Updated visible rounds for {} to: {}",
                sport.name,
                sport.visible_rounds.to_csv()
            ),
        );
    }
    if req.visible.is_some() || req.visible_rounds.is_none() {
        log_activity(
            &state.db,
            actor.id,
            "TOGGLE_VISIBILITY",
            "sport",
            Some(id),
            format!(
                "{} fixtures for: {}",
                if sport.fixtures_visible { "Showed" } else { "Hid" },
                sport.name
            ),
        );
    }

    state.cache.invalidate_all();
    state.notifier.notify(Update::VisibilityChanged { sport_id: id });

    Ok(Json(VisibilityResponse {
        message: "Visibility updated".to_string(),
        fixtures_visible: sport.fixtures_visible,
        visible_rounds: sport.visible_rounds,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/matches",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every match, ignoring public visibility", body = Vec<MatchDetail>)
    ),
    tag = "admin"
)]
pub async fn list_matches(State(state): State<AppState>) -> Result<Response, WebError> {
    let matches = services::list_matches(state.db.pool()).await?;

    Ok(Json(matches).into_response())
}
