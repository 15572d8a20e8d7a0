use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A podium placement for one event. Position 1..=3 maps to
/// gold/silver/bronze; `match_id` is set when the row was derived from a
/// completed bracket match rather than entered by hand.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResult {
    pub id: i32,
    pub event_id: i32,
    pub department_id: i32,
    pub participant_name: String,
    pub position: i16,
    pub score: Option<String>,
    pub match_id: Option<i32>,
    pub updated_by: Option<i32>,
    pub updated_at: chrono::NaiveDateTime,
}

pub fn medal_label(position: i16) -> &'static str {
    match position {
        1 => "Gold",
        2 => "Silver",
        _ => "Bronze",
    }
}
