use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_sport, delete_sport, get_sport, list_sports, update_sport};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_sport))
        .route("/:id", put(update_sport))
        .route("/:id", delete(delete_sport))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/", get(list_sports))
        .route("/:id", get(get_sport))
        .merge(admin)
}
