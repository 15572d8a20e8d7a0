use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::status::ProgressStatus;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "event_category", rename_all = "lowercase")]
pub enum EventCategory {
    Boys,
    Girls,
    Mixed,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boys => "boys",
            Self::Girls => "girls",
            Self::Mixed => "mixed",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "event_type", rename_all = "lowercase")]
pub enum EventType {
    Individual,
    Team,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: i32,
    pub sport_id: i32,
    pub name: String,
    pub category: EventCategory,
    pub event_type: EventType,
    pub status: ProgressStatus,
}
