use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierError {
    #[error("Invalid tier '{0}': expected one of Free, Silver, Gold, Platinum")]
    InvalidTier(String),
}

/// Membership level. Variants are declared in privilege order so the derived
/// `Ord` agrees with [`Tier::rank`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    #[default]
    Free,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// Every tier, lowest privilege first.
    pub const ALL: [Tier; 4] = [Tier::Free, Tier::Silver, Tier::Gold, Tier::Platinum];

    pub const fn rank(self) -> u8 {
        match self {
            Tier::Free => 0,
            Tier::Silver => 1,
            Tier::Gold => 2,
            Tier::Platinum => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the tier name.
impl FromStr for Tier {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| TierError::InvalidTier(s.to_string()))
    }
}

impl TryFrom<&str> for Tier {
    type Error = TierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
