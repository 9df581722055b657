use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::event::{EventRow, NewEvent};
use crate::models::user::{NewUser, UserRow};
use crate::store::{MembershipStore, SeedReport};
use crate::tiers::Tier;

const USER_COLUMNS: &str = "id, name, email, tier, created_at";
const EVENT_COLUMNS: &str = "id, title, description, date, location, tier, created_at";

pub struct PgMembershipStore {
    pool: PgPool,
}

impl PgMembershipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn conflict_on_unique(err: sqlx::Error, email: &str) -> AppError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(format!("A user with email {email} already exists"))
        }
        other => AppError::Database(other),
    }
}

#[async_trait]
impl MembershipStore for PgMembershipStore {
    async fn list_users(&self) -> Result<Vec<UserRow>, AppError> {
        Ok(sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>, AppError> {
        Ok(sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<UserRow, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (id, name, email, tier) VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.tier.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, &user.email))?;

        info!("Created user {} with tier {}", row.id, row.tier);
        Ok(row)
    }

    async fn update_user_tier(&self, id: Uuid, tier: Tier) -> Result<Option<UserRow>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET tier = $1 WHERE id = $2 RETURNING {USER_COLUMNS}"
        ))
        .bind(tier.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            info!("User {id} moved to tier {tier}");
        }
        Ok(row)
    }

    async fn list_events(&self) -> Result<Vec<EventRow>, AppError> {
        Ok(sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY date, id"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn seed(&self, users: &[NewUser], events: &[NewEvent]) -> Result<SeedReport, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut report = SeedReport::default();

        let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;
        if user_count == 0 {
            for user in users {
                sqlx::query("INSERT INTO users (id, name, email, tier) VALUES ($1, $2, $3, $4)")
                    .bind(Uuid::new_v4())
                    .bind(&user.name)
                    .bind(&user.email)
                    .bind(user.tier.as_str())
                    .execute(&mut *tx)
                    .await?;
                report.users_inserted += 1;
            }
        }

        let event_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&mut *tx)
            .await?;
        if event_count == 0 {
            for event in events {
                sqlx::query(
                    r#"
                    INSERT INTO events (id, title, description, date, location, tier)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(&event.title)
                .bind(&event.description)
                .bind(event.date)
                .bind(&event.location)
                .bind(event.tier.as_str())
                .execute(&mut *tx)
                .await?;
                report.events_inserted += 1;
            }
        }

        tx.commit().await?;
        Ok(report)
    }
}
