use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::user::{LoginRequest, LoginResponse, UserResponse};
use validator::Validate;

use crate::activity::log_activity;
use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::find_user(state.db.pool(), &req.username)
        .await?
        .ok_or(WebError::Unauthorized)?;

    if !services::verify_password(&req.password, &user.password_hash) {
        return Err(WebError::Unauthorized);
    }

    let token = state
        .auth
        .issue(&user)
        .map_err(|e| WebError::Internal(format!("Failed to sign token: {e}")))?;

    log_activity(
        &state.db,
        user.id,
        "LOGIN",
        "user",
        Some(user.id),
        format!("User {} logged in", user.username),
    );

    Ok(Json(LoginResponse {
        user: UserResponse::from(user),
        token,
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Not authenticated")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    log_activity(
        &state.db,
        user.id,
        "LOGOUT",
        "user",
        Some(user.id),
        format!("User {} logged out", user.username),
    );

    Ok(Json(serde_json::json!({ "message": "Logged out successfully" })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "auth"
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let user = services::get_user(state.db.pool(), user.id).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}
