//! Town Hall Roster Eligibility
//!
//! Decides whether a player may join a team roster, given the Town Hall (TH)
//! tier of the candidate and the tiers already on the roster.
//!
//! # Restricted Tiers
//!
//! TH15 through TH18 are capacity-restricted. Each starts with exactly one
//! slot. Everything at TH14 and below is unrestricted.
//!
//! # Cascade
//!
//! A slot left unused at one tier becomes an extra slot at the tier directly
//! below it:
//!
//! ```text
//! slot18 = 1
//! slot17 = 1 + max(0, slot18 - count18)
//! slot16 = 1 + max(0, slot17 - count17)
//! slot15 = 1 + max(0, slot16 - count16)
//! ```
//!
//! Surplus only flows downward, one level at a time. An empty roster therefore
//! has room for one TH18, two TH17, three TH16 and four TH15 players; filling
//! a higher tier removes the credit it would have passed down.
//!
//! # Purity
//!
//! Every operation is a pure function of its arguments. Callers take a
//! consistent roster snapshot, ask for a decision, and own whatever
//! membership mutation follows.
//!
//! ```
//! use roster_eligibility::{can_join, TierCounts};
//!
//! let counts = TierCounts::new(1, 0, 0, 0);
//! assert!(!can_join(Some(18), &counts).is_allowed());
//! assert!(can_join(Some(17), &counts).is_allowed());
//! assert!(can_join(Some(9), &counts).is_allowed());
//! assert!(!can_join(None, &counts).is_allowed());
//! ```

mod audit;
mod eligibility;
mod error;
mod roster;
mod slots;
mod tier;

pub use audit::{audit_composition, CompositionViolation, TierOverflow};
pub use eligibility::{can_join, can_join_roster, Eligibility, EligibilityResult, MISSING_TIER_REASON};
pub use error::{Error, Result};
pub use roster::{tier_counts, HasTier, RosterMember};
pub use slots::{compute_available_slots, remaining_capacity, SlotAllocation, TierCounts, BASE_CAPACITY};
pub use tier::{RestrictedTier, Tier, MAX_TIER, MIN_TIER, UNRESTRICTED_MAX};
