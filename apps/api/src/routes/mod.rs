pub mod health;
pub mod tiers;

use axum::{
    routing::{get, put},
    Router,
};

use crate::events::handlers as events;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/tiers", get(tiers::handle_list_tiers))
        .route("/api/events", get(events::handle_list_events))
        .route(
            "/api/users",
            get(users::handle_list_users).post(users::handle_create_user),
        )
        .route("/api/users/:id", get(users::handle_get_user))
        .route("/api/users/:id/tier", put(users::handle_update_tier))
        .route("/api/users/:id/events", get(events::handle_visible_events))
        .with_state(state)
}
