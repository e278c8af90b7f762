//! Roster snapshot files.
//!
//! ```json
//! { "team": "Night Owls", "members": [ { "tier": 17 }, { "tier": null } ] }
//! ```

use std::path::Path;

use roster_eligibility::{tier_counts, RosterMember, TierCounts};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// A team's roster as exported by the membership service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default)]
    pub members: Vec<RosterMember>,
}

impl RosterSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            team = snapshot.team.as_deref().unwrap_or("-"),
            members = snapshot.members.len(),
            "loaded roster snapshot"
        );
        Ok(snapshot)
    }

    pub fn counts(&self) -> TierCounts {
        tier_counts(&self.members)
    }

    /// Team name for display.
    pub fn label(&self) -> &str {
        self.team.as_deref().unwrap_or("roster")
    }
}
