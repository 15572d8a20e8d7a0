use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{ProgressStatus, RoundSet, RoundTag, Sport};

use super::event::EventDetail;

/// Request payload for creating a new sport
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSportRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, max = 2, message = "Day must be 1 or 2"))]
    pub day: i16,

    pub icon: Option<String>,
}

/// Request payload for updating an existing sport
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSportRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 2))]
    pub day: Option<i16>,

    pub icon: Option<String>,
}

/// Sport row joined with per-status event counts.
#[derive(Debug, Clone, FromRow)]
pub struct SportWithCounts {
    pub id: i32,
    pub name: String,
    pub day: i16,
    pub icon: String,
    pub fixtures_visible: bool,
    pub visible_rounds: RoundSet,
    pub live_events: i64,
    pub completed_events: i64,
    pub total_events: i64,
}

/// Public listing entry: a sport annotated with its rolled-up status.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SportSummary {
    pub id: i32,
    pub name: String,
    pub day: i16,
    pub icon: String,
    pub fixtures_visible: bool,
    #[schema(value_type = Vec<RoundTag>)]
    pub visible_rounds: RoundSet,
    pub status: ProgressStatus,
    pub live_events: i64,
    pub completed_events: i64,
    pub total_events: i64,
}

impl SportSummary {
    pub fn new(row: SportWithCounts, status: ProgressStatus) -> Self {
        Self {
            id: row.id,
            name: row.name,
            day: row.day,
            icon: row.icon,
            fixtures_visible: row.fixtures_visible,
            visible_rounds: row.visible_rounds,
            status,
            live_events: row.live_events,
            completed_events: row.completed_events,
            total_events: row.total_events,
        }
    }
}

/// Response for the public sports listing, grouped by tournament day
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SportsByDayResponse {
    pub day1: Vec<SportSummary>,
    pub day2: Vec<SportSummary>,
}

/// Events of one sport, grouped by category
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventsByCategory {
    pub boys: Vec<EventDetail>,
    pub girls: Vec<EventDetail>,
    pub mixed: Vec<EventDetail>,
}

/// Response for the public single-sport detail page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SportDetailResponse {
    pub sport: Sport,
    pub events: EventsByCategory,
}
