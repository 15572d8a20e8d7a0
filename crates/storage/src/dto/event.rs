use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Event, EventCategory, EventType, ProgressStatus};

use super::matches::MatchDetail;
use super::result::ResultDetail;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    pub sport_id: i32,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub category: EventCategory,

    pub event_type: Option<EventType>,
}

/// Manual status override for an event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventStatusRequest {
    pub status: ProgressStatus,
}

/// Event row joined with its owning sport, for the organiser listing.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct EventWithSport {
    pub id: i32,
    pub sport_id: i32,
    pub name: String,
    pub category: EventCategory,
    pub event_type: EventType,
    pub status: ProgressStatus,
    pub sport_name: String,
    pub day: i16,
}

/// An event with its results and (possibly visibility-filtered) matches.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub results: Vec<ResultDetail>,
    pub matches: Vec<MatchDetail>,
}
