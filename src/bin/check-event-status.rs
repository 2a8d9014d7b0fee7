// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Status Checker
//!
//! Classifies the last event of one or more groups against the wall clock.
//!
//! Run with: cargo run --bin check-event-status -- <group-id>...
//!
//! Prerequisites:
//! 1. A JSON file mapping group ids to `{ "endDate", "reviewDurationInHours" }`
//! 2. `EVENT_STATUS_RECORDS` pointing at that file
//! 3. Optional `EVENT_STATUS_OUTPUT=json` for machine-readable output

use anyhow::{bail, Context, Result};
use last_event_status::config::{OutputFormat, StatusCheckConfig};
use last_event_status::{CheckLastEventStatus, GroupId};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let group_ids = std::env::args()
        .skip(1)
        .map(|arg| GroupId::new(arg.as_str()).with_context(|| format!("invalid group id '{arg}'")))
        .collect::<Result<Vec<_>>>()?;

    if group_ids.is_empty() {
        bail!("usage: check-event-status <group-id>...");
    }

    let config = StatusCheckConfig::from_env().context("Failed to load configuration")?;
    debug!(?config, "Loaded configuration");

    let lookup = config.load_lookup().context("Failed to load event records")?;
    let service = Arc::new(CheckLastEventStatus::new(lookup));

    info!(groups = group_ids.len(), "Classifying last events");

    let handles: Vec<_> = group_ids
        .into_iter()
        .map(|group_id| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let status = service.exec(&group_id).await;
                (group_id, status)
            })
        })
        .collect();

    for handle in handles {
        let (group_id, status) = handle.await.context("Classification task panicked")?;
        let status = status.with_context(|| format!("Failed to classify group {group_id}"))?;

        match config.output {
            OutputFormat::Text => println!("{group_id}: {status}"),
            OutputFormat::Json => {
                println!("{}", json!({ "groupId": group_id, "status": status }))
            }
        }
    }

    Ok(())
}
