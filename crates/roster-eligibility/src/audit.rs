//! Roster composition audit.
//!
//! Join checks look at one candidate against the roster as it stands. A
//! sequence of individually valid joins can still leave a roster over
//! capacity, because admitting a higher tier takes back the cascade credit a
//! lower tier was already using:
//!
//! ```text
//! empty roster        slot17 = 2   → two TH17 join on cascade credit
//! TH18 joins (cap 1)  slot17 = 1   → TH17 now holds 2 of 1
//! ```
//!
//! The audit reports every tier left in that state so an admin can resolve it.

use std::fmt;

use thiserror::Error;

use crate::slots::{compute_available_slots, TierCounts};
use crate::tier::RestrictedTier;

/// One restricted tier holding more members than its cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierOverflow {
    pub tier: u8,
    pub count: u32,
    pub cap: u32,
}

impl TierOverflow {
    /// Members that would have to leave to bring this tier back under cap.
    ///
    /// Zero for a hand-built overflow whose count is not above its cap.
    pub const fn excess(&self) -> u32 {
        self.count.saturating_sub(self.cap)
    }
}

impl fmt::Display for TierOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TH{} holds {} of {}", self.tier, self.count, self.cap)
    }
}

/// A roster whose composition exceeds one or more tier caps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("roster over capacity: {}", join_overflows(.overflows))]
pub struct CompositionViolation {
    /// Offending tiers in cascade order (top first)
    pub overflows: Vec<TierOverflow>,
}

fn join_overflows(overflows: &[TierOverflow]) -> String {
    overflows
        .iter()
        .map(TierOverflow::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that no restricted tier holds more members than its cap.
pub fn audit_composition(counts: &TierCounts) -> Result<(), CompositionViolation> {
    let slots = compute_available_slots(counts);

    let overflows: Vec<_> = RestrictedTier::ALL
        .into_iter()
        .filter(|&tier| counts[tier] > slots.cap(tier))
        .map(|tier| TierOverflow {
            tier: tier.level(),
            count: counts[tier],
            cap: slots.cap(tier),
        })
        .collect();

    if overflows.is_empty() {
        Ok(())
    } else {
        Err(CompositionViolation { overflows })
    }
}
