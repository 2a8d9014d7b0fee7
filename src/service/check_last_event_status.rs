// Copyright (c) 2025 - Cowboy AI, Inc.
//! Last Event Status Service
//!
//! Each call is one transaction with a single suspension point:
//! 1. Load the group's last event from the lookup
//! 2. Return `Done` if there is none
//! 3. Read the clock once
//! 4. Classify the record against that instant
//!
//! Lookup failures propagate to the caller untouched. There are no retries
//! and nothing is cached between calls.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clock::{Clock, SystemClock};
use crate::domain::GroupId;
use crate::errors::StatusResult;
use crate::lookup::LastEventLookup;
use crate::status::EventStatus;

/// Event status classifier interface
#[async_trait]
pub trait EventStatusClassifier: Send + Sync {
    /// Classify the last event of a group
    ///
    /// # Errors
    /// Only errors raised by the underlying lookup.
    async fn classify(&self, group_id: &GroupId) -> StatusResult<EventStatus>;
}

/// Classifies a group's last event using an injected lookup and clock
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use last_event_status::{
///     CheckLastEventStatus, EventRecord, EventStatus, FixedClock, GroupId,
///     InMemoryLastEventLookup,
/// };
///
/// # tokio_test::block_on(async {
/// let now = Utc.with_ymd_and_hms(2026, 1, 19, 12, 0, 0).unwrap();
/// let group = GroupId::new("group-1").unwrap();
/// let lookup = InMemoryLastEventLookup::with_records([(
///     group.clone(),
///     EventRecord::new(now + Duration::hours(2), 1.0).unwrap(),
/// )]);
///
/// let service = CheckLastEventStatus::with_clock(lookup, FixedClock::at(now));
/// assert_eq!(service.exec(&group).await.unwrap(), EventStatus::Active);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct CheckLastEventStatus<L, C = SystemClock> {
    lookup: L,
    clock: C,
}

impl<L: LastEventLookup> CheckLastEventStatus<L, SystemClock> {
    /// Create a service reading wall-clock time
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            clock: SystemClock,
        }
    }
}

impl<L: LastEventLookup, C: Clock> CheckLastEventStatus<L, C> {
    /// Create a service with an explicit time source
    pub fn with_clock(lookup: L, clock: C) -> Self {
        Self { lookup, clock }
    }

    /// Classify the last event of `group_id`
    #[instrument(skip_all, fields(group_id = %group_id))]
    pub async fn exec(&self, group_id: &GroupId) -> StatusResult<EventStatus> {
        let Some(record) = self.lookup.load_last_event(group_id).await? else {
            debug!("No event recorded, status is done");
            return Ok(EventStatus::Done);
        };

        let now = self.clock.now();
        let status = EventStatus::from_record(Some(&record), now);

        debug!(
            %now,
            end_date = %record.end_date(),
            review_end = ?record.review_end_date(),
            %status,
            "Classified last event"
        );

        Ok(status)
    }
}

#[async_trait]
impl<L: LastEventLookup, C: Clock> EventStatusClassifier for CheckLastEventStatus<L, C> {
    async fn classify(&self, group_id: &GroupId) -> StatusResult<EventStatus> {
        self.exec(group_id).await
    }
}
