use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::round_set::{RoundSet, RoundTag};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sport {
    pub id: i32,
    pub name: String,
    pub day: i16,
    pub icon: String,
    pub fixtures_visible: bool,
    #[schema(value_type = Vec<RoundTag>)]
    pub visible_rounds: RoundSet,
}
