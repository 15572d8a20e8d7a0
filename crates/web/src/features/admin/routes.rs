use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_department, create_event, create_user, delete_department, delete_user,
    list_departments, list_events, list_logs, list_matches, list_sports, list_users,
    update_department, update_user, update_visibility,
};
use crate::middleware::auth::{require_admin, require_organiser};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let organiser = Router::new()
        .route("/events", get(list_events))
        .route("/matches", get(list_matches))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_organiser,
        ));

    let admin = Router::new()
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user))
        .route("/users/:id", delete(delete_user))
        .route("/departments", post(create_department))
        .route("/departments/:id", put(update_department))
        .route("/departments/:id", delete(delete_department))
        .route("/events", post(create_event))
        .route("/logs", get(list_logs))
        .route("/sports", get(list_sports))
        .route("/sports/:id/visibility", put(update_visibility))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/departments", get(list_departments))
        .merge(organiser)
        .merge(admin)
}
