use axum::{Router, routing::get};

use super::handlers::{get_sport_medals, get_tally, get_winners};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_tally))
        .route("/winners", get(get_winners))
        .route("/sport/:sport_id", get(get_sport_medals))
}
