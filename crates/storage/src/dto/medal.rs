use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::{EventCategory, Sport};

/// Aggregated medal counts for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MedalTallyEntry {
    pub id: i32,
    pub name: String,
    pub short_code: String,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub total: i64,
}

/// One medal with full display context, for the winners listing.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct WinnerEntry {
    pub id: i32,
    pub participant_name: String,
    pub position: i16,
    pub score: Option<String>,
    pub dept_code: String,
    pub dept_name: String,
    pub event_name: String,
    pub category: EventCategory,
    pub sport_name: String,
    pub sport_icon: String,
}

/// Winners partitioned by medal colour
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MedalWinnersResponse {
    pub gold: Vec<WinnerEntry>,
    pub silver: Vec<WinnerEntry>,
    pub bronze: Vec<WinnerEntry>,
}

/// Medal tally scoped to one sport
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SportMedalsResponse {
    pub sport: Sport,
    pub medals: Vec<MedalTallyEntry>,
}
