use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_result, delete_result, get_event_results, list_results, set_event_status,
    update_result,
};
use crate::middleware::auth::require_organiser;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_results))
        .route("/", post(create_result))
        .route("/:id", put(update_result))
        .route("/:id", delete(delete_result))
        .route("/event/:event_id/status", put(set_event_status))
        .route_layer(middleware::from_fn_with_state(state, require_organiser));

    Router::new()
        .route("/event/:event_id", get(get_event_results))
        .merge(protected)
}
