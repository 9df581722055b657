use axum::Json;

use crate::tiers::catalogue::{catalogue, TierInfo};

/// GET /api/tiers
pub async fn handle_list_tiers() -> Json<Vec<TierInfo>> {
    Json(catalogue())
}
