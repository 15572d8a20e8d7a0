use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::round_set::RoundTag;
use super::status::ProgressStatus;

/// One bracket fixture. A NULL `team2_department_id` marks a bye slot;
/// `team1_name`/`team2_name` are optional display overrides on top of the
/// department names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
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
    pub updated_by: Option<i32>,
    pub updated_at: chrono::NaiveDateTime,
}

impl Match {
    pub fn is_bye(&self) -> bool {
        self.team2_department_id.is_none()
    }

    /// The department that did not win, when both slots are filled and a
    /// winner has been declared.
    pub fn loser_department_id(&self) -> Option<i32> {
        let winner = self.winner_department_id?;
        if winner == self.team1_department_id {
            self.team2_department_id
        } else {
            Some(self.team1_department_id)
        }
    }
}
