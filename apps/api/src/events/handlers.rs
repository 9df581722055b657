use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::event::Event;
use crate::models::user::User;
use crate::state::AppState;
use crate::tiers::{allowed_tiers, filter_event_rows, filter_events, Tier};

#[derive(Debug, Deserialize)]
pub struct TierQuery {
    pub tier: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VisibleEventsResponse {
    pub user: User,
    pub allowed_tiers: Vec<Tier>,
    pub count: usize,
    pub events: Vec<Event>,
}

/// GET /api/events
/// With `?tier=Gold`, only the events a Gold member may see.
pub async fn handle_list_events(
    State(state): State<AppState>,
    Query(params): Query<TierQuery>,
) -> Result<Json<Vec<Event>>, AppError> {
    let viewer = params.tier.as_deref().map(str::parse::<Tier>).transpose()?;

    let events = state
        .store
        .list_events()
        .await?
        .into_iter()
        .map(Event::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::data_integrity)?;

    Ok(Json(match viewer {
        Some(tier) => filter_events(events, tier),
        None => events,
    }))
}

/// GET /api/users/:id/events
pub async fn handle_visible_events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VisibleEventsResponse>, AppError> {
    let user_row = state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;

    let rows = state.store.list_events().await?;
    let events = filter_event_rows(rows, &user_row.tier).map_err(AppError::data_integrity)?;
    let user = User::try_from(user_row).map_err(AppError::data_integrity)?;

    tracing::debug!("User {id} ({}) sees {} events", user.tier, events.len());

    Ok(Json(VisibleEventsResponse {
        allowed_tiers: allowed_tiers(user.tier).to_vec(),
        count: events.len(),
        user,
        events,
    }))
}
