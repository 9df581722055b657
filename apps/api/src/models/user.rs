use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::tiers::{Tier, TierError};

/// A `users` row as stored. `tier` is kept as text until it is validated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub tier: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = TierError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            tier: row.tier.parse()?,
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub tier: Tier,
}
