// Membership tiers and tier-based visibility.
// Everything here is pure: no I/O, no shared state.

pub mod catalogue;
pub mod filter;
pub mod tier;

pub use filter::{allowed_tiers, filter_event_rows, filter_events, is_visible, Tiered};
pub use tier::{Tier, TierError};
