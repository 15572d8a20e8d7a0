use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Event, EventCategory};

use super::matches::MatchDetail;

/// Request payload for recording an individual-event result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateResultRequest {
    pub event_id: i32,

    pub department_id: i32,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Participant name must be between 1 and 255 characters"
    ))]
    pub participant_name: String,

    #[validate(range(min = 1, max = 3, message = "Position must be 1, 2, or 3"))]
    pub position: i16,

    pub score: Option<String>,
}

/// Partial update for an existing result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateResultRequest {
    pub department_id: Option<i32>,

    #[validate(length(min = 1, max = 255))]
    pub participant_name: Option<String>,

    #[validate(range(min = 1, max = 3, message = "Position must be 1, 2, or 3"))]
    pub position: Option<i16>,

    pub score: Option<String>,
}

/// Result row joined with its department, as shown on public pages.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ResultDetail {
    pub id: i32,
    pub event_id: i32,
    pub department_id: i32,
    pub participant_name: String,
    pub position: i16,
    pub score: Option<String>,
    pub match_id: Option<i32>,
    pub updated_at: chrono::NaiveDateTime,
    pub department_name: String,
    pub short_code: String,
}

/// Result row with full event/sport context, for the organiser listing.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ResultWithContext {
    pub id: i32,
    pub event_id: i32,
    pub department_id: i32,
    pub participant_name: String,
    pub position: i16,
    pub score: Option<String>,
    pub match_id: Option<i32>,
    pub updated_at: chrono::NaiveDateTime,
    pub event_name: String,
    pub sport_name: String,
    pub category: EventCategory,
    pub dept_name: String,
    pub dept_code: String,
}

/// Everything an organiser needs to edit one event: the event itself, its
/// results and its matches (never visibility-filtered).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventResultsResponse {
    pub event: Event,
    pub results: Vec<ResultDetail>,
    pub matches: Vec<MatchDetail>,
}
