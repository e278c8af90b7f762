//! Runtime configuration from the environment.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Usage(format!(
                "ROSTER_CHECK_FORMAT must be `text` or `json`, got {other:?}"
            ))),
        }
    }
}

/// Configuration for a roster-check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Snapshot used when no path argument is given
    pub snapshot: PathBuf,

    /// Output format
    pub format: OutputFormat,
}

/// Built-in defaults; `from_env` overlays the environment on these.
impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("./roster.json"),
            format: OutputFormat::Text,
        }
    }
}

impl CheckConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let snapshot = lookup("ROSTER_SNAPSHOT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot);

        let format = match lookup("ROSTER_CHECK_FORMAT") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => defaults.format,
        };

        Ok(Self { snapshot, format })
    }
}
