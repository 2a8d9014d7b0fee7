// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory last event lookup
//!
//! Backs the lookup capability with a map guarded by an async `RwLock`.
//! Used by the `check-event-status` binary and as a stand-in store in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::trace;

use super::LastEventLookup;
use crate::domain::{EventRecord, GroupId};
use crate::errors::StatusResult;

/// Last event records keyed by group
#[derive(Debug, Default)]
pub struct InMemoryLastEventLookup {
    records: RwLock<HashMap<GroupId, EventRecord>>,
}

impl InMemoryLastEventLookup {
    /// Create an empty lookup
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lookup seeded with records
    pub fn with_records(records: impl IntoIterator<Item = (GroupId, EventRecord)>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    /// Parse a JSON object mapping group ids to event records
    ///
    /// ```json
    /// {
    ///   "group-a": { "endDate": "2026-01-19T12:00:00Z", "reviewDurationInHours": 1 }
    /// }
    /// ```
    ///
    /// Group ids and records are validated the same way as their constructors.
    pub fn from_json_str(json: &str) -> StatusResult<Self> {
        let records: HashMap<GroupId, EventRecord> = serde_json::from_str(json)?;
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Record `record` as the last event of `group_id`, returning the one it replaced
    pub async fn insert(&self, group_id: GroupId, record: EventRecord) -> Option<EventRecord> {
        self.records.write().await.insert(group_id, record)
    }

    /// Forget the last event of `group_id`
    pub async fn remove(&self, group_id: &GroupId) -> Option<EventRecord> {
        self.records.write().await.remove(group_id)
    }

    /// Number of groups with a tracked event
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether no group has a tracked event
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl LastEventLookup for InMemoryLastEventLookup {
    async fn load_last_event(&self, group_id: &GroupId) -> StatusResult<Option<EventRecord>> {
        let record = self.records.read().await.get(group_id).cloned();
        trace!(group_id = %group_id, found = record.is_some(), "Loaded last event");
        Ok(record)
    }
}
