// Copyright (c) 2025 - Cowboy AI, Inc.
//! Last Event Lookup
//!
//! The single outbound capability the classifier depends on: given a group,
//! return its last event record or report that it has none.
//!
//! # Contract
//!
//! 1. **Absence is not failure**: `Ok(None)` means the group has no tracked event
//! 2. **Errors are the backend's**: the classifier propagates them unchanged
//! 3. **No policy**: timeouts or retries, if any, live in the implementation
//!
//! # Example
//!
//! ```rust
//! use last_event_status::lookup::{InMemoryLastEventLookup, LastEventLookup};
//! use last_event_status::domain::GroupId;
//!
//! # tokio_test::block_on(async {
//! let lookup = InMemoryLastEventLookup::new();
//! let group = GroupId::new("group-1").unwrap();
//! assert!(lookup.load_last_event(&group).await.unwrap().is_none());
//! # });
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EventRecord, GroupId};
use crate::errors::StatusResult;

pub mod memory;

pub use memory::InMemoryLastEventLookup;

/// Loads the last event recorded for a group
#[async_trait]
pub trait LastEventLookup: Send + Sync {
    /// Load the last event for `group_id`
    ///
    /// # Returns
    /// - `Ok(Some(record))` when the group has a tracked event
    /// - `Ok(None)` when it has none
    ///
    /// # Errors
    /// Whatever the backing store reports; callers must not translate it.
    async fn load_last_event(&self, group_id: &GroupId) -> StatusResult<Option<EventRecord>>;
}

#[async_trait]
impl<L: LastEventLookup + ?Sized> LastEventLookup for Arc<L> {
    async fn load_last_event(&self, group_id: &GroupId) -> StatusResult<Option<EventRecord>> {
        (**self).load_last_event(group_id).await
    }
}
