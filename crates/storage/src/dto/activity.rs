use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Activity-log row joined with the acting user.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ActivityLogEntry {
    pub id: i32,
    pub user_id: i32,
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<i32>,
    pub details: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ActivityLogQuery {
    pub limit: Option<i64>,
}
