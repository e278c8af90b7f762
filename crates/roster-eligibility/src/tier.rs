//! Town Hall tiers.
//!
//! Tiers run from TH1 to TH18. Only the top four are restricted:
//! - TH18 → top of the cascade, never receives credit
//! - TH17, TH16, TH15 → receive the unused slots of the tier above
//! - TH1..=TH14 → unrestricted

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lowest valid tier.
pub const MIN_TIER: u8 = 1;

/// Highest valid tier.
pub const MAX_TIER: u8 = 18;

/// Highest tier that joins without any capacity check.
pub const UNRESTRICTED_MAX: u8 = 14;

/// A validated tier in `MIN_TIER..=MAX_TIER`.
///
/// Decision functions take raw `Option<u8>` values so they stay total; use
/// `Tier` at the edge where player input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    /// Validate a raw tier level.
    ///
    /// ```
    /// use roster_eligibility::Tier;
    ///
    /// assert!(Tier::new(16).is_ok());
    /// assert!(Tier::new(0).is_err());
    /// assert!(Tier::new(19).is_err());
    /// ```
    pub fn new(level: u8) -> Result<Self> {
        if (MIN_TIER..=MAX_TIER).contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::TierOutOfRange(level))
        }
    }

    /// The raw level.
    pub const fn level(self) -> u8 {
        self.0
    }

    /// The restricted band this tier falls in, if any.
    pub const fn restricted(self) -> Option<RestrictedTier> {
        RestrictedTier::from_level(self.0)
    }

    /// Whether this tier joins without a capacity check.
    pub const fn is_unrestricted(self) -> bool {
        self.0 <= UNRESTRICTED_MAX
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TH{}", self.0)
    }
}

impl FromStr for Tier {
    type Err = Error;

    /// Accepts `"16"`, `"TH16"` or `"th16"`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("TH")
            .or_else(|| trimmed.strip_prefix("th"))
            .unwrap_or(trimmed);
        let level: u8 = digits
            .parse()
            .map_err(|_| Error::InvalidTier(s.to_string()))?;
        Self::new(level)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

/// One of the four capacity-restricted tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RestrictedTier {
    Th18,
    Th17,
    Th16,
    Th15,
}

impl RestrictedTier {
    /// All restricted tiers in cascade order (top first).
    pub const ALL: [RestrictedTier; 4] = [
        RestrictedTier::Th18,
        RestrictedTier::Th17,
        RestrictedTier::Th16,
        RestrictedTier::Th15,
    ];

    pub const fn level(self) -> u8 {
        match self {
            RestrictedTier::Th18 => 18,
            RestrictedTier::Th17 => 17,
            RestrictedTier::Th16 => 16,
            RestrictedTier::Th15 => 15,
        }
    }

    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            18 => Some(RestrictedTier::Th18),
            17 => Some(RestrictedTier::Th17),
            16 => Some(RestrictedTier::Th16),
            15 => Some(RestrictedTier::Th15),
            _ => None,
        }
    }

    /// The tier whose unused capacity cascades into this one.
    pub const fn above(self) -> Option<Self> {
        match self {
            RestrictedTier::Th18 => None, // Top of the chain
            RestrictedTier::Th17 => Some(RestrictedTier::Th18),
            RestrictedTier::Th16 => Some(RestrictedTier::Th17),
            RestrictedTier::Th15 => Some(RestrictedTier::Th16),
        }
    }
}

impl fmt::Display for RestrictedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TH{}", self.level())
    }
}

impl From<RestrictedTier> for Tier {
    fn from(tier: RestrictedTier) -> Self {
        Tier(tier.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_range_validation() {
        for level in MIN_TIER..=MAX_TIER {
            assert_eq!(Tier::new(level).map(Tier::level), Ok(level));
        }
        assert_eq!(Tier::new(0), Err(Error::TierOutOfRange(0)));
        assert_eq!(Tier::new(19), Err(Error::TierOutOfRange(19)));
        assert_eq!(Tier::new(u8::MAX), Err(Error::TierOutOfRange(u8::MAX)));
    }

    #[test]
    fn parse_accepts_prefix() {
        assert_eq!("16".parse::<Tier>().map(Tier::level), Ok(16));
        assert_eq!("TH17".parse::<Tier>().map(Tier::level), Ok(17));
        assert_eq!(" th9 ".parse::<Tier>().map(Tier::level), Ok(9));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "sixteen".parse::<Tier>(),
            Err(Error::InvalidTier("sixteen".to_string()))
        );
        assert!("-3".parse::<Tier>().is_err());
        assert_eq!("TH20".parse::<Tier>(), Err(Error::TierOutOfRange(20)));
    }

    #[test]
    fn restricted_band_split() {
        assert_eq!(Tier::new(14).unwrap().restricted(), None);
        assert!(Tier::new(14).unwrap().is_unrestricted());
        assert_eq!(Tier::new(15).unwrap().restricted(), Some(RestrictedTier::Th15));
        assert!(!Tier::new(15).unwrap().is_unrestricted());
    }

    #[test]
    fn cascade_chain_is_linear() {
        // Walking `above` from TH15 visits every tier once and stops at TH18
        let mut chain = vec![RestrictedTier::Th15];
        while let Some(next) = chain.last().and_then(|t| t.above()) {
            chain.push(next);
        }
        chain.reverse();
        assert_eq!(chain, RestrictedTier::ALL.to_vec());
    }

    #[test]
    fn level_roundtrip() {
        for tier in RestrictedTier::ALL {
            assert_eq!(RestrictedTier::from_level(tier.level()), Some(tier));
        }
        assert_eq!(RestrictedTier::from_level(14), None);
        assert_eq!(RestrictedTier::Th16.to_string(), "TH16");
        assert_eq!(Tier::from(RestrictedTier::Th18).to_string(), "TH18");
    }
}
