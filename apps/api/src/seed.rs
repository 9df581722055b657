use chrono::NaiveDate;
use tracing::info;

use crate::errors::AppError;
use crate::models::event::NewEvent;
use crate::models::user::NewUser;
use crate::store::{MembershipStore, SeedReport};
use crate::tiers::Tier;

/// One demo user per tier: "Gold User" <gold@example.com>, and so on.
pub fn demo_users() -> Vec<NewUser> {
    Tier::ALL
        .into_iter()
        .map(|tier| NewUser {
            name: format!("{tier} User"),
            email: format!("{}@example.com", tier.as_str().to_lowercase()),
            tier,
        })
        .collect()
}

pub fn demo_events() -> Vec<NewEvent> {
    const EVENTS: &[(&str, &str, (i32, u32, u32), &str, Tier)] = &[
        (
            "Community Meetup",
            "Monthly networking event for all members",
            (2023, 6, 15),
            "Virtual",
            Tier::Free,
        ),
        (
            "Silver Workshop",
            "Advanced techniques for Silver members",
            (2023, 6, 20),
            "Conference Room A",
            Tier::Silver,
        ),
        (
            "Gold Masterclass",
            "Exclusive training for Gold members",
            (2023, 6, 25),
            "Grand Ballroom",
            Tier::Gold,
        ),
        (
            "Platinum Gala",
            "Annual VIP event for Platinum members",
            (2023, 7, 1),
            "Luxury Hotel",
            Tier::Platinum,
        ),
        (
            "Tech Conference",
            "Industry conference for all paid members",
            (2023, 7, 10),
            "Convention Center",
            Tier::Silver,
        ),
        (
            "Free Webinar",
            "Introduction to our platform",
            (2023, 7, 15),
            "Online",
            Tier::Free,
        ),
        (
            "Gold Networking",
            "Exclusive networking for Gold members",
            (2023, 7, 20),
            "Rooftop Lounge",
            Tier::Gold,
        ),
        (
            "Platinum Retreat",
            "Weekend retreat for Platinum members",
            (2023, 8, 1),
            "Mountain Resort",
            Tier::Platinum,
        ),
    ];

    EVENTS
        .iter()
        .filter_map(|&(title, description, (y, m, d), location, tier)| {
            Some(NewEvent {
                title: title.to_string(),
                description: description.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                location: location.to_string(),
                tier,
            })
        })
        .collect()
}

/// Loads the demo users and events into an empty store. Safe to run on every start.
pub async fn seed_demo_data(store: &dyn MembershipStore) -> Result<SeedReport, AppError> {
    let report = store.seed(&demo_users(), &demo_events()).await?;
    info!(
        "Seeded {} users and {} events",
        report.users_inserted, report.events_inserted
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::tiers::filter_event_rows;

    #[test]
    fn test_demo_users_cover_every_tier() {
        let users = demo_users();
        let tiers: Vec<Tier> = users.iter().map(|u| u.tier).collect();
        assert_eq!(tiers, Tier::ALL.to_vec());
        assert_eq!(users[2].name, "Gold User");
        assert_eq!(users[2].email, "gold@example.com");
    }

    #[test]
    fn test_demo_events_all_dates_valid() {
        let events = demo_events();
        assert_eq!(events.len(), 8);
        assert_eq!(events[0].title, "Community Meetup");
        assert_eq!(events[7].date, NaiveDate::from_ymd_opt(2023, 8, 1).unwrap());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::default();
        let first = seed_demo_data(&store).await.unwrap();
        assert_eq!(
            first,
            SeedReport {
                users_inserted: 4,
                events_inserted: 8
            }
        );
        let second = seed_demo_data(&store).await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(store.list_events().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_seeded_gold_member_sees_six_events() {
        let store = MemoryStore::default();
        seed_demo_data(&store).await.unwrap();
        let events = filter_event_rows(store.list_events().await.unwrap(), "Gold").unwrap();
        assert_eq!(events.len(), 6);
        assert!(events.iter().all(|e| e.tier != Tier::Platinum));
        assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
