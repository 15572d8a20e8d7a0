use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_match, delete_match, qualification, update_match};
use crate::middleware::auth::require_organiser;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_match))
        .route("/qualification", get(qualification))
        .route("/:id", put(update_match))
        .route("/:id", delete(delete_match))
        .route_layer(middleware::from_fn_with_state(state, require_organiser))
}
