//! Command parsing and execution.

use std::path::PathBuf;

use roster_eligibility::{
    audit_composition, can_join, compute_available_slots, EligibilityResult, RestrictedTier,
    SlotAllocation, Tier, TierCounts, TierOverflow,
};
use serde::Serialize;
use tracing::info;

use crate::config::{CheckConfig, OutputFormat};
use crate::error::{Error, Result};
use crate::snapshot::RosterSnapshot;

/// Exit code when a candidate is refused or an audit finds overflows.
pub const EXIT_REFUSED: i32 = 2;

/// A parsed roster-check command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Slots { snapshot: Option<PathBuf> },
    CanJoin { tier: Option<u8>, snapshot: Option<PathBuf> },
    Audit { snapshot: Option<PathBuf> },
}

impl Command {
    /// Parse arguments following the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some(name) = args.first() else {
            return Err(Error::Usage("missing command".to_string()));
        };
        let rest = &args[1..];

        match name.as_str() {
            "slots" => Ok(Command::Slots {
                snapshot: optional_path(rest, 0, "slots")?,
            }),
            "can-join" => {
                let Some(raw) = rest.first() else {
                    return Err(Error::Usage(
                        "can-join requires a tier argument (1-18 or `none`)".to_string(),
                    ));
                };
                let tier = match raw.as_str() {
                    "none" | "unset" => None,
                    other => Some(other.parse::<Tier>()?.level()),
                };
                Ok(Command::CanJoin {
                    tier,
                    snapshot: optional_path(rest, 1, "can-join")?,
                })
            }
            "audit" => Ok(Command::Audit {
                snapshot: optional_path(rest, 0, "audit")?,
            }),
            other => Err(Error::Usage(format!("unknown command: {other}"))),
        }
    }

    fn snapshot(&self) -> Option<&PathBuf> {
        match self {
            Command::Slots { snapshot }
            | Command::CanJoin { snapshot, .. }
            | Command::Audit { snapshot } => snapshot.as_ref(),
        }
    }

    /// Load the snapshot and run the command.
    pub fn run(&self, config: &CheckConfig) -> Result<Outcome> {
        let path = self.snapshot().unwrap_or(&config.snapshot);
        let snapshot = RosterSnapshot::load(path)?;
        self.evaluate(&snapshot, config.format)
    }

    /// Run the command against an already loaded snapshot.
    pub fn evaluate(&self, snapshot: &RosterSnapshot, format: OutputFormat) -> Result<Outcome> {
        let counts = snapshot.counts();

        match *self {
            Command::Slots { .. } => {
                let report = SlotsReport {
                    team: snapshot.label(),
                    counts,
                    slots: compute_available_slots(&counts),
                };
                Ok(Outcome::success(match format {
                    OutputFormat::Json => serde_json::to_string_pretty(&report)?,
                    OutputFormat::Text => report.to_text(),
                }))
            }
            Command::CanJoin { tier, .. } => {
                let decision = can_join(tier, &counts);
                info!(
                    team = snapshot.label(),
                    tier = ?tier,
                    allowed = decision.is_allowed(),
                    "eligibility checked"
                );
                let result = EligibilityResult::from(decision);
                let output = match format {
                    OutputFormat::Json => serde_json::to_string_pretty(&result)?,
                    OutputFormat::Text => decision.to_string(),
                };
                Ok(Outcome::from_verdict(result.allowed, output))
            }
            Command::Audit { .. } => {
                let overflows = match audit_composition(&counts) {
                    Ok(()) => Vec::new(),
                    Err(violation) => violation.overflows,
                };
                info!(
                    team = snapshot.label(),
                    overflows = overflows.len(),
                    "roster audited"
                );
                let output = match format {
                    OutputFormat::Json => serde_json::to_string_pretty(&AuditReport {
                        team: snapshot.label(),
                        ok: overflows.is_empty(),
                        overflows: &overflows,
                    })?,
                    OutputFormat::Text if overflows.is_empty() => {
                        format!("{}: composition ok", snapshot.label())
                    }
                    OutputFormat::Text => overflows
                        .iter()
                        .map(|o| format!("{}: {o} (excess {})", snapshot.label(), o.excess()))
                        .collect::<Vec<_>>()
                        .join("\n"),
                };
                Ok(Outcome::from_verdict(overflows.is_empty(), output))
            }
        }
    }
}

fn optional_path(rest: &[String], index: usize, command: &str) -> Result<Option<PathBuf>> {
    if rest.len() > index + 1 {
        return Err(Error::Usage(format!("too many arguments for {command}")));
    }
    Ok(rest.get(index).map(PathBuf::from))
}

/// What to print and how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub exit_code: i32,
}

impl Outcome {
    fn success(output: String) -> Self {
        Self {
            output,
            exit_code: 0,
        }
    }

    fn from_verdict(ok: bool, output: String) -> Self {
        Self {
            output,
            exit_code: if ok { 0 } else { EXIT_REFUSED },
        }
    }
}

#[derive(Serialize)]
struct SlotsReport<'a> {
    team: &'a str,
    counts: TierCounts,
    slots: SlotAllocation,
}

impl SlotsReport<'_> {
    fn to_text(&self) -> String {
        let mut lines = vec![format!("{}:", self.team)];
        for tier in RestrictedTier::ALL {
            lines.push(format!(
                "  {tier}: {} of {} (cascaded {})",
                self.counts[tier],
                self.slots.cap(tier),
                self.slots.cascaded(tier)
            ));
        }
        lines.join("\n")
    }
}

#[derive(Serialize)]
struct AuditReport<'a> {
    team: &'a str,
    ok: bool,
    overflows: &'a [TierOverflow],
}
