//! Tier filter: decides which events a member of a given tier may see.
//!
//! An event is visible when its required tier ranks at or below the viewer's
//! tier. Filtering is stable; callers that want date order ask the store for it.

use crate::models::event::{Event, EventRow};
use crate::tiers::tier::{Tier, TierError};

/// Anything gated behind a required tier.
pub trait Tiered {
    fn tier(&self) -> Tier;
}

impl Tiered for Tier {
    fn tier(&self) -> Tier {
        *self
    }
}

pub fn is_visible(user_tier: Tier, event_tier: Tier) -> bool {
    event_tier.rank() <= user_tier.rank()
}

/// Keeps the items visible to `user_tier`, in their original relative order.
pub fn filter_events<T, I>(events: I, user_tier: Tier) -> Vec<T>
where
    T: Tiered,
    I: IntoIterator<Item = T>,
{
    events
        .into_iter()
        .filter(|event| is_visible(user_tier, event.tier()))
        .collect()
}

/// Filters raw event rows for a raw user tier.
///
/// The user tier and every row tier are validated before anything is filtered,
/// so an unknown tier anywhere yields an error and never a partial list.
pub fn filter_event_rows(rows: Vec<EventRow>, user_tier: &str) -> Result<Vec<Event>, TierError> {
    let user_tier: Tier = user_tier.parse()?;
    let events = rows
        .into_iter()
        .map(Event::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(filter_events(events, user_tier))
}

/// The tiers whose events `user_tier` may see, lowest first.
pub fn allowed_tiers(user_tier: Tier) -> &'static [Tier] {
    let ladder: &'static [Tier; 4] = &Tier::ALL;
    &ladder[..=user_tier.rank() as usize]
}
