//! Join decisions for a single candidate.
//!
//! A candidate falls in exactly one band:
//! - no tier → refused until the profile is completed
//! - TH14 and below → always admitted
//! - TH15..=TH18 → admitted while the tier is below its cascaded cap
//!
//! Refusals carry a human-readable reason the membership service can show
//! verbatim.

use std::fmt;

use tracing::debug;

use crate::roster::{tier_counts, HasTier};
use crate::slots::{compute_available_slots, TierCounts};
use crate::tier::{RestrictedTier, MAX_TIER, MIN_TIER, UNRESTRICTED_MAX};

/// Reason given when the candidate has no tier on record.
pub const MISSING_TIER_REASON: &str = "tier must be set before joining";

/// The outcome of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Candidate has no tier set; a precondition, not a capacity failure
    MissingTier,
    /// Candidate is at or below TH14
    Unrestricted { tier: u8 },
    /// Restricted tier with room left
    Admitted {
        tier: RestrictedTier,
        used: u32,
        cap: u32,
    },
    /// Restricted tier already at its cap
    CapacityExceeded {
        tier: RestrictedTier,
        used: u32,
        cap: u32,
        /// How much of `cap` came from unused higher-tier slots
        cascaded: u32,
    },
    /// Tier above the supported range; should have been rejected upstream
    OutOfRange { tier: u8 },
}

impl Eligibility {
    pub const fn is_allowed(&self) -> bool {
        matches!(
            self,
            Eligibility::Unrestricted { .. } | Eligibility::Admitted { .. }
        )
    }

    /// Why the candidate was refused, or `None` when allowed.
    pub fn reason(&self) -> Option<String> {
        match *self {
            Eligibility::Unrestricted { .. } | Eligibility::Admitted { .. } => None,
            Eligibility::MissingTier => Some(MISSING_TIER_REASON.to_string()),
            Eligibility::CapacityExceeded {
                tier,
                used,
                cap,
                cascaded,
            } => {
                let mut reason = format!(
                    "{tier} cap reached: roster already has {used} {tier} player{} and the cap is {cap}",
                    if used == 1 { "" } else { "s" },
                );
                if cascaded > 0 {
                    reason.push_str(&format!(
                        " ({cascaded} of which cascaded from unused higher-tier slots)"
                    ));
                }
                Some(reason)
            }
            Eligibility::OutOfRange { tier } => Some(format!(
                "tier {tier} is outside the supported range {MIN_TIER}-{MAX_TIER}"
            )),
        }
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "refused: {reason}"),
            None => f.write_str("allowed"),
        }
    }
}

/// Flat result handed to the membership service.
///
/// `reason` is present exactly when `allowed` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EligibilityResult {
    pub allowed: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reason: Option<String>,
}

impl From<Eligibility> for EligibilityResult {
    fn from(eligibility: Eligibility) -> Self {
        Self {
            allowed: eligibility.is_allowed(),
            reason: eligibility.reason(),
        }
    }
}

/// Decide whether a candidate at `candidate_tier` may join a roster with
/// `counts`.
///
/// Values below 1 are treated as unrestricted. Range validation belongs in
/// front of this function (see [`Tier::new`](crate::Tier::new)); it only
/// branches on the TH14 / TH15..=TH18 split.
pub fn can_join(candidate_tier: Option<u8>, counts: &TierCounts) -> Eligibility {
    let Some(level) = candidate_tier else {
        debug!("join refused: candidate has no tier");
        return Eligibility::MissingTier;
    };

    if level <= UNRESTRICTED_MAX {
        return Eligibility::Unrestricted { tier: level };
    }

    let Some(tier) = RestrictedTier::from_level(level) else {
        debug!(tier = level, "join refused: tier out of range");
        return Eligibility::OutOfRange { tier: level };
    };

    let slots = compute_available_slots(counts);
    let used = counts[tier];
    let cap = slots.cap(tier);

    if used >= cap {
        debug!(%tier, used, cap, "join refused: tier cap reached");
        Eligibility::CapacityExceeded {
            tier,
            used,
            cap,
            cascaded: slots.cascaded(tier),
        }
    } else {
        Eligibility::Admitted { tier, used, cap }
    }
}

/// Count `members` and decide for `candidate_tier` in one step.
pub fn can_join_roster<I>(candidate_tier: Option<u8>, members: I) -> Eligibility
where
    I: IntoIterator,
    I::Item: HasTier,
{
    can_join(candidate_tier, &tier_counts(members))
}
