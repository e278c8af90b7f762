//! Error types for roster-eligibility.
//!
//! Eligibility decisions are values, never errors. These cover malformed
//! input at the validation layer in front of the decision functions.

use thiserror::Error;

/// Result type for roster-eligibility operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating tier input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tier is outside the supported 1-18 range.
    #[error("tier {0} is out of range (expected {min}-{max})", min = crate::MIN_TIER, max = crate::MAX_TIER)]
    TierOutOfRange(u8),

    /// Tier text could not be parsed.
    #[error("invalid tier: {0:?}")]
    InvalidTier(String),
}
