// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration for the `check-event-status` binary
//!
//! Loaded from environment variables:
//!
//! | Variable               | Required | Default | Meaning                              |
//! |------------------------|----------|---------|--------------------------------------|
//! | `EVENT_STATUS_RECORDS` | yes      |         | JSON file of group id → event record |
//! | `EVENT_STATUS_OUTPUT`  | no       | `text`  | `text` or `json`                     |

use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::errors::{StatusError, StatusResult};
use crate::lookup::InMemoryLastEventLookup;

/// Environment variable naming the records file
pub const RECORDS_ENV: &str = "EVENT_STATUS_RECORDS";

/// Environment variable selecting the output format
pub const OUTPUT_ENV: &str = "EVENT_STATUS_OUTPUT";

/// How classification results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `group: status` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(StatusError::Configuration(format!(
                "unknown output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

/// Status check configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCheckConfig {
    /// JSON file holding the last event of each group
    pub records_path: PathBuf,
    /// Output format
    pub output: OutputFormat,
}

impl StatusCheckConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> StatusResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> StatusResult<Self> {
        let records_path = var(RECORDS_ENV)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| StatusError::Configuration(format!("{RECORDS_ENV} not set")))?;

        let output = match var(OUTPUT_ENV) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            records_path,
            output,
        })
    }

    /// Read the records file into an in-memory lookup
    pub fn load_lookup(&self) -> StatusResult<InMemoryLastEventLookup> {
        let json = std::fs::read_to_string(&self.records_path).map_err(|e| {
            StatusError::Configuration(format!(
                "cannot read {}: {e}",
                self.records_path.display()
            ))
        })?;

        let lookup = InMemoryLastEventLookup::from_json_str(&json)?;
        info!(path = %self.records_path.display(), "Loaded event records");
        Ok(lookup)
    }
}
