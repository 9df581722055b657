//! In-process store used by the router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::event::{EventRow, NewEvent};
use crate::models::user::{NewUser, UserRow};
use crate::store::{MembershipStore, SeedReport};
use crate::tiers::Tier;

#[derive(Default)]
struct Tables {
    users: Vec<UserRow>,
    events: Vec<EventRow>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Inserts a row verbatim, bypassing tier validation.
    pub fn push_event_row(&self, row: EventRow) {
        self.tables.lock().expect("store lock").events.push(row);
    }

    pub fn push_user_row(&self, row: UserRow) {
        self.tables.lock().expect("store lock").users.push(row);
    }

    fn user_row(user: &NewUser) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            name: user.name.clone(),
            email: user.email.clone(),
            tier: user.tier.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl MembershipStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<UserRow>, AppError> {
        let mut users = self.tables.lock().expect("store lock").users.clone();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>, AppError> {
        let tables = self.tables.lock().expect("store lock");
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<UserRow, AppError> {
        let mut tables = self.tables.lock().expect("store lock");
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict(format!(
                "A user with email {} already exists",
                user.email
            )));
        }
        let row = Self::user_row(user);
        tables.users.push(row.clone());
        Ok(row)
    }

    async fn update_user_tier(&self, id: Uuid, tier: Tier) -> Result<Option<UserRow>, AppError> {
        let mut tables = self.tables.lock().expect("store lock");
        Ok(tables.users.iter_mut().find(|u| u.id == id).map(|u| {
            u.tier = tier.to_string();
            u.clone()
        }))
    }

    async fn list_events(&self) -> Result<Vec<EventRow>, AppError> {
        let mut events = self.tables.lock().expect("store lock").events.clone();
        events.sort_by_key(|e| (e.date, e.id));
        Ok(events)
    }

    async fn seed(&self, users: &[NewUser], events: &[NewEvent]) -> Result<SeedReport, AppError> {
        let mut tables = self.tables.lock().expect("store lock");
        let mut report = SeedReport::default();
        if tables.users.is_empty() {
            tables.users.extend(users.iter().map(Self::user_row));
            report.users_inserted = users.len();
        }
        if tables.events.is_empty() {
            tables.events.extend(events.iter().map(|e| EventRow {
                id: Uuid::new_v4(),
                title: e.title.clone(),
                description: e.description.clone(),
                date: e.date,
                location: e.location.clone(),
                tier: e.tier.to_string(),
                created_at: Utc::now(),
            }));
            report.events_inserted = events.len();
        }
        Ok(report)
    }
}
