//! Membership store — persistence seam for users and events.
//!
//! Default: `PgMembershipStore` (sqlx over PostgreSQL).
//! `AppState` holds an `Arc<dyn MembershipStore>`; tests plug in `MemoryStore`.
//!
//! Rows come back with their tier as raw text. Validation happens in the
//! callers so a bad stored tier surfaces as a data-integrity error.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::event::{EventRow, NewEvent};
use crate::models::user::{NewUser, UserRow};
use crate::tiers::Tier;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgMembershipStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users_inserted: usize,
    pub events_inserted: usize,
}

#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// All users, oldest first.
    async fn list_users(&self) -> Result<Vec<UserRow>, AppError>;

    async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>, AppError>;

    /// Fails with `AppError::Conflict` when the email is already taken.
    async fn insert_user(&self, user: &NewUser) -> Result<UserRow, AppError>;

    /// Returns `None` when no user has this id.
    async fn update_user_tier(&self, id: Uuid, tier: Tier) -> Result<Option<UserRow>, AppError>;

    /// All events ordered by date, then id.
    async fn list_events(&self) -> Result<Vec<EventRow>, AppError>;

    /// Inserts `users` only if there are no users yet, and `events` only if
    /// there are no events yet.
    async fn seed(&self, users: &[NewUser], events: &[NewEvent]) -> Result<SeedReport, AppError>;
}
