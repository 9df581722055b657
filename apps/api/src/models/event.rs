use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::tiers::{Tier, TierError, Tiered};

/// An `events` row as stored. `tier` is the required tier, still unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub tier: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub tier: Tier,
}

impl Tiered for Event {
    fn tier(&self) -> Tier {
        self.tier
    }
}

impl TryFrom<EventRow> for Event {
    type Error = TierError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            tier: row.tier.parse()?,
            id: row.id,
            title: row.title,
            description: row.description,
            date: row.date,
            location: row.location,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub tier: Tier,
}
