use std::sync::Arc;

use crate::store::MembershipStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Users and events. Default: PgMembershipStore.
    pub store: Arc<dyn MembershipStore>,
}
