use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{RoundSet, RoundTag};

/// Visibility update for a sport's bracket. Supplying neither field
/// toggles the master flag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateVisibilityRequest {
    pub visible: Option<bool>,
    pub visible_rounds: Option<Vec<RoundTag>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VisibilityResponse {
    pub message: String,
    pub fixtures_visible: bool,
    #[schema(value_type = Vec<RoundTag>)]
    pub visible_rounds: RoundSet,
}
