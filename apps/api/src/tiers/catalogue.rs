use serde::Serialize;

use crate::tiers::filter::allowed_tiers;
use crate::tiers::tier::Tier;

#[derive(Debug, Clone, Serialize)]
pub struct TierInfo {
    pub tier: Tier,
    pub rank: u8,
    /// Tiers whose events a member at this tier can see.
    pub includes: Vec<Tier>,
    pub benefits: &'static [&'static str],
}

pub fn benefits(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Free => &["Access to community events", "Monthly newsletters"],
        Tier::Silver => &[
            "All Free benefits",
            "Exclusive workshops",
            "Priority support",
        ],
        Tier::Gold => &[
            "All Silver benefits",
            "Masterclass access",
            "Networking events",
        ],
        Tier::Platinum => &["All Gold benefits", "VIP events", "Personal concierge"],
    }
}

/// All tiers in rank order.
pub fn catalogue() -> Vec<TierInfo> {
    Tier::ALL
        .into_iter()
        .map(|tier| TierInfo {
            tier,
            rank: tier.rank(),
            includes: allowed_tiers(tier).to_vec(),
            benefits: benefits(tier),
        })
        .collect()
}
