//! Roster snapshots reduced to restricted-tier counts.

use crate::slots::TierCounts;
use crate::tier::RestrictedTier;

/// Anything on a roster that may carry a tier.
///
/// Implement this for the membership service's own records so they can be
/// counted without copying.
pub trait HasTier {
    fn tier(&self) -> Option<u8>;
}

/// Minimal roster entry: the only attribute eligibility reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterMember {
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: Option<u8>,
}

impl RosterMember {
    pub const fn new(tier: u8) -> Self {
        Self { tier: Some(tier) }
    }

    /// A member whose profile has no tier yet.
    pub const fn unset() -> Self {
        Self { tier: None }
    }
}

impl HasTier for RosterMember {
    fn tier(&self) -> Option<u8> {
        self.tier
    }
}

impl HasTier for Option<u8> {
    fn tier(&self) -> Option<u8> {
        *self
    }
}

impl HasTier for u8 {
    fn tier(&self) -> Option<u8> {
        Some(*self)
    }
}

impl<T: HasTier + ?Sized> HasTier for &T {
    fn tier(&self) -> Option<u8> {
        (**self).tier()
    }
}

/// Count members at exactly TH18, TH17, TH16 and TH15.
///
/// Members without a tier, at TH14 or below, or outside the valid range are
/// not counted. Order never matters.
///
/// ```
/// use roster_eligibility::{tier_counts, RosterMember, TierCounts};
///
/// let roster = [RosterMember::new(18), RosterMember::new(12), RosterMember::unset()];
/// assert_eq!(tier_counts(&roster), TierCounts::new(1, 0, 0, 0));
/// ```
pub fn tier_counts<I>(members: I) -> TierCounts
where
    I: IntoIterator,
    I::Item: HasTier,
{
    members
        .into_iter()
        .filter_map(|m| m.tier().and_then(RestrictedTier::from_level))
        .fold(TierCounts::default(), |mut counts, tier| {
            counts[tier] = counts[tier].saturating_add(1);
            counts
        })
}
