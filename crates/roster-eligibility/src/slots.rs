//! Cascading slot allocation for the restricted tiers.
//!
//! Each restricted tier has a base capacity of one. Capacity left unused at a
//! tier is added to the tier directly below it:
//! - TH18 → always 1
//! - TH17 → 1 + unused TH18
//! - TH16 → 1 + unused TH17
//! - TH15 → 1 + unused TH16
//!
//! Nothing ever flows upward, so the TH15 count cannot change any capacity.

use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::tier::RestrictedTier;

/// Capacity every restricted tier starts with before cascade credit.
pub const BASE_CAPACITY: u32 = 1;

/// Current roster composition, restricted to the top four tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierCounts {
    pub t18: u32,
    pub t17: u32,
    pub t16: u32,
    pub t15: u32,
}

impl TierCounts {
    pub const fn new(t18: u32, t17: u32, t16: u32, t15: u32) -> Self {
        Self { t18, t17, t16, t15 }
    }

    /// Count of members at `tier`.
    pub const fn get(&self, tier: RestrictedTier) -> u32 {
        match tier {
            RestrictedTier::Th18 => self.t18,
            RestrictedTier::Th17 => self.t17,
            RestrictedTier::Th16 => self.t16,
            RestrictedTier::Th15 => self.t15,
        }
    }

    /// Members across all restricted tiers.
    pub const fn total(&self) -> u32 {
        self.t18
            .saturating_add(self.t17)
            .saturating_add(self.t16)
            .saturating_add(self.t15)
    }
}

impl Index<RestrictedTier> for TierCounts {
    type Output = u32;

    fn index(&self, tier: RestrictedTier) -> &u32 {
        match tier {
            RestrictedTier::Th18 => &self.t18,
            RestrictedTier::Th17 => &self.t17,
            RestrictedTier::Th16 => &self.t16,
            RestrictedTier::Th15 => &self.t15,
        }
    }
}

impl IndexMut<RestrictedTier> for TierCounts {
    fn index_mut(&mut self, tier: RestrictedTier) -> &mut u32 {
        match tier {
            RestrictedTier::Th18 => &mut self.t18,
            RestrictedTier::Th17 => &mut self.t17,
            RestrictedTier::Th16 => &mut self.t16,
            RestrictedTier::Th15 => &mut self.t15,
        }
    }
}

/// Capacity of each restricted tier after cascade.
///
/// Always derived from a [`TierCounts`] via [`compute_available_slots`];
/// every capacity is at least [`BASE_CAPACITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotAllocation {
    pub slot18: u32,
    pub slot17: u32,
    pub slot16: u32,
    pub slot15: u32,
}

impl SlotAllocation {
    /// Capacity at `tier`.
    pub const fn cap(&self, tier: RestrictedTier) -> u32 {
        match tier {
            RestrictedTier::Th18 => self.slot18,
            RestrictedTier::Th17 => self.slot17,
            RestrictedTier::Th16 => self.slot16,
            RestrictedTier::Th15 => self.slot15,
        }
    }

    /// Slots at `tier` that came from unused capacity above it.
    ///
    /// Zero for hand-built allocations whose cap is below the base.
    pub const fn cascaded(&self, tier: RestrictedTier) -> u32 {
        self.cap(tier).saturating_sub(BASE_CAPACITY)
    }

    /// Combined restricted capacity.
    pub const fn total(&self) -> u32 {
        self.slot18
            .saturating_add(self.slot17)
            .saturating_add(self.slot16)
            .saturating_add(self.slot15)
    }
}

/// Unused capacity at a tier, floored at zero.
const fn unused(cap: u32, used: u32) -> u32 {
    cap.saturating_sub(used)
}

/// Compute the capacity of every restricted tier from the current roster.
///
/// Total over all counts; oversubscribed tiers simply pass nothing down.
///
/// # Examples
///
/// ```
/// use roster_eligibility::{compute_available_slots, TierCounts};
///
/// let slots = compute_available_slots(&TierCounts::new(1, 0, 0, 0));
/// assert_eq!((slots.slot18, slots.slot17, slots.slot16, slots.slot15), (1, 1, 2, 3));
/// ```
pub fn compute_available_slots(counts: &TierCounts) -> SlotAllocation {
    let slot18 = BASE_CAPACITY;
    let slot17 = BASE_CAPACITY + unused(slot18, counts.t18);
    let slot16 = BASE_CAPACITY + unused(slot17, counts.t17);
    let slot15 = BASE_CAPACITY + unused(slot16, counts.t16);

    let slots = SlotAllocation {
        slot18,
        slot17,
        slot16,
        slot15,
    };
    trace!(?counts, ?slots, "computed slot allocation");
    slots
}

/// How many more members `tier` can take before hitting its cap.
///
/// Only considers the tier itself: admitting a member at a higher tier can
/// shrink this number.
pub fn remaining_capacity(tier: RestrictedTier, counts: &TierCounts) -> u32 {
    unused(compute_available_slots(counts).cap(tier), counts[tier])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(counts: TierCounts) -> [u32; 4] {
        let s = compute_available_slots(&counts);
        [s.slot18, s.slot17, s.slot16, s.slot15]
    }

    #[test]
    fn empty_roster_cascades_every_level() {
        // unused18 = 1 → slot17 = 2; unused17 = 2 → slot16 = 3; unused16 = 3 → slot15 = 4
        assert_eq!(caps(TierCounts::new(0, 0, 0, 0)), [1, 2, 3, 4]);
    }

    #[test]
    fn filled_top_tier_passes_nothing_down() {
        assert_eq!(caps(TierCounts::new(1, 0, 0, 0)), [1, 1, 2, 3]);
    }

    #[test]
    fn one_per_tier_leaves_base_capacity() {
        assert_eq!(caps(TierCounts::new(1, 1, 1, 1)), [1, 1, 1, 1]);
    }

    #[test]
    fn free_top_slot_lifts_every_lower_tier() {
        // slot17 = 2, one used → 1 passes to slot16 = 2, one used → slot15 = 2
        assert_eq!(caps(TierCounts::new(0, 1, 1, 1)), [1, 2, 2, 2]);
    }

    #[test]
    fn oversubscribed_tier_floors_at_zero() {
        assert_eq!(caps(TierCounts::new(5, 0, 0, 0)), [1, 1, 2, 3]);
        assert_eq!(caps(TierCounts::new(0, 9, 0, 0)), [1, 2, 1, 2]);
        assert_eq!(caps(TierCounts::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX)), [1, 1, 1, 1]);
    }

    #[test]
    fn lowest_tier_count_never_matters() {
        for t15 in [0, 1, 2, 100] {
            assert_eq!(caps(TierCounts::new(0, 0, 0, t15)), [1, 2, 3, 4]);
        }
    }

    #[test]
    fn cascaded_is_cap_minus_base() {
        let slots = compute_available_slots(&TierCounts::default());
        assert_eq!(slots.cascaded(RestrictedTier::Th18), 0);
        assert_eq!(slots.cascaded(RestrictedTier::Th17), 1);
        assert_eq!(slots.cascaded(RestrictedTier::Th16), 2);
        assert_eq!(slots.cascaded(RestrictedTier::Th15), 3);
    }

    #[test]
    fn cascaded_saturates_below_base() {
        let zeroed = SlotAllocation {
            slot18: 0,
            slot17: 0,
            slot16: 0,
            slot15: 0,
        };
        for tier in RestrictedTier::ALL {
            assert_eq!(zeroed.cascaded(tier), 0);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_zero_caps_do_not_underflow() {
        let slots: SlotAllocation =
            serde_json::from_str(r#"{"slot18":0,"slot17":0,"slot16":0,"slot15":0}"#).unwrap();
        assert_eq!(slots.cascaded(RestrictedTier::Th17), 0);
        assert_eq!(slots.total(), 0);
    }

    #[test]
    fn remaining_capacity_calculation() {
        let counts = TierCounts::new(0, 1, 0, 0);
        assert_eq!(remaining_capacity(RestrictedTier::Th18, &counts), 1);
        assert_eq!(remaining_capacity(RestrictedTier::Th17, &counts), 1);
        assert_eq!(remaining_capacity(RestrictedTier::Th16, &counts), 2);
        assert_eq!(remaining_capacity(RestrictedTier::Th15, &counts), 3);

        // Already over capacity
        let counts = TierCounts::new(1, 3, 0, 0);
        assert_eq!(remaining_capacity(RestrictedTier::Th17, &counts), 0);
    }

    #[test]
    fn counts_index_by_tier() {
        let mut counts = TierCounts::default();
        counts[RestrictedTier::Th16] += 2;
        assert_eq!(counts.t16, 2);
        assert_eq!(counts.get(RestrictedTier::Th16), 2);
        assert_eq!(counts.total(), 2);
    }
}
