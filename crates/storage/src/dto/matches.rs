use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{ProgressStatus, RoundTag};

/// Request payload for creating a match. Leaving `team2_department_id`
/// unset creates a bye slot.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMatchRequest {
    pub event_id: i32,

    pub team1_department_id: i32,

    pub team2_department_id: Option<i32>,

    #[validate(length(max = 255))]
    pub team1_name: Option<String>,

    #[validate(length(max = 255))]
    pub team2_name: Option<String>,

    pub team1_score: Option<String>,

    pub team2_score: Option<String>,

    pub winner_department_id: Option<i32>,

    pub round: Option<RoundTag>,

    pub status: Option<ProgressStatus>,
}

/// Partial update for an existing match; omitted fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchRequest {
    pub team1_department_id: Option<i32>,

    pub team2_department_id: Option<i32>,

    #[validate(length(max = 255))]
    pub team1_name: Option<String>,

    #[validate(length(max = 255))]
    pub team2_name: Option<String>,

    pub team1_score: Option<String>,

    pub team2_score: Option<String>,

    pub winner_department_id: Option<i32>,

    pub round: Option<RoundTag>,

    pub status: Option<ProgressStatus>,
}

/// Raw match row with joined department names, before display fallbacks.
#[derive(Debug, Clone, FromRow)]
pub struct MatchRow {
    pub id: i32,
    pub event_id: i32,
    pub team1_department_id: i32,
    pub team2_department_id: Option<i32>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub winner_department_id: Option<i32>,
    pub round: RoundTag,
    pub status: ProgressStatus,
    pub updated_at: chrono::NaiveDateTime,
    pub team1_department_name: String,
    pub team1_code: String,
    pub team2_department_name: Option<String>,
    pub team2_code: Option<String>,
    pub winner_name: Option<String>,
    pub winner_code: Option<String>,
    pub event_name: Option<String>,
    pub sport_name: Option<String>,
}

/// A match as exposed over the API: display names resolved against the
/// department register, with a derived bye flag instead of sentinel scores.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MatchDetail {
    pub id: i32,
    pub event_id: i32,
    pub team1_department_id: i32,
    pub team2_department_id: Option<i32>,
    pub team1_name: String,
    pub team1_code: String,
    pub team2_name: Option<String>,
    pub team2_code: Option<String>,
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub winner_department_id: Option<i32>,
    pub winner_name: Option<String>,
    pub winner_code: Option<String>,
    pub round: RoundTag,
    pub status: ProgressStatus,
    pub is_bye: bool,
    pub updated_at: chrono::NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_name: Option<String>,
}

impl From<MatchRow> for MatchDetail {
    fn from(row: MatchRow) -> Self {
        let is_bye = row.team2_department_id.is_none();
        Self {
            id: row.id,
            event_id: row.event_id,
            team1_department_id: row.team1_department_id,
            team2_department_id: row.team2_department_id,
            team1_name: row
                .team1_name
                .filter(|n| !n.is_empty())
                .unwrap_or(row.team1_department_name),
            team1_code: row.team1_code,
            team2_name: row
                .team2_name
                .filter(|n| !n.is_empty())
                .or(row.team2_department_name),
            team2_code: row.team2_code,
            team1_score: row.team1_score,
            team2_score: row.team2_score,
            winner_department_id: row.winner_department_id,
            winner_name: row.winner_name,
            winner_code: row.winner_code,
            round: row.round,
            status: row.status,
            is_bye,
            updated_at: row.updated_at,
            event_name: row.event_name,
            sport_name: row.sport_name,
        }
    }
}

/// Query parameters for the next-round qualification listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct QualificationQuery {
    pub event_id: i32,
    pub source_round: RoundTag,
    pub target_round: RoundTag,
}

/// A department eligible to be paired into the target round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QualifiedTeam {
    pub department_id: i32,
    pub name: String,
    pub short_code: String,
}
