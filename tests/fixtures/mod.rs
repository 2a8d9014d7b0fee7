// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for last-event-status
//!
//! Provides a fixed reference instant and lookup test doubles.
//!
//! # Design Principles
//! - All test data is deterministic (no `Utc::now()`)
//! - The classifier under test always reads `fixed_timestamp()` from its clock

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use last_event_status::{
    CheckLastEventStatus, Clock, EventRecord, FixedClock, GroupId, LastEventLookup, StatusError,
    StatusResult,
};

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub const GROUP_ID: &str = "any_group_id";

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn group_id() -> GroupId {
    GroupId::new(GROUP_ID).expect("Invalid group id in test fixture")
}

/// Record ending at `fixed_timestamp() + end_offset`
pub fn record_ending_at(end_offset: Duration, review_duration_in_hours: f64) -> EventRecord {
    EventRecord::new(fixed_timestamp() + end_offset, review_duration_in_hours)
        .expect("Invalid event record in test fixture")
}

/// Lookup spy that records every call and replays a configured output
#[derive(Default)]
pub struct LoadLastEventSpy {
    calls: Mutex<Vec<GroupId>>,
    output: Mutex<Option<EventRecord>>,
}

impl LoadLastEventSpy {
    pub fn returning(output: Option<EventRecord>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            output: Mutex::new(output),
        }
    }

    pub fn set_output(&self, output: Option<EventRecord>) {
        *self.output.lock().unwrap() = output;
    }

    pub fn calls(&self) -> Vec<GroupId> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LastEventLookup for LoadLastEventSpy {
    async fn load_last_event(&self, group_id: &GroupId) -> StatusResult<Option<EventRecord>> {
        self.calls.lock().unwrap().push(group_id.clone());
        Ok(self.output.lock().unwrap().clone())
    }
}

/// Lookup that always fails for the requested group
pub struct FailingLookup;

#[async_trait]
impl LastEventLookup for FailingLookup {
    async fn load_last_event(&self, group_id: &GroupId) -> StatusResult<Option<EventRecord>> {
        Err(StatusError::Lookup {
            group_id: group_id.to_string(),
            reason: "connection refused".to_string(),
        })
    }
}

/// Fixed clock that counts how often it is read
pub struct CountingClock {
    inner: FixedClock,
    reads: AtomicUsize,
}

impl CountingClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            inner: FixedClock::at(instant),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for CountingClock {
    fn now(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.now()
    }
}

pub type Sut = CheckLastEventStatus<Arc<LoadLastEventSpy>, FixedClock>;

/// Build the classifier under test with a spy returning `output`
pub fn sut_with(output: Option<EventRecord>) -> (Sut, Arc<LoadLastEventSpy>) {
    let spy = Arc::new(LoadLastEventSpy::returning(output));
    let sut = CheckLastEventStatus::with_clock(spy.clone(), FixedClock::at(fixed_timestamp()));
    (sut, spy)
}

/// Build the classifier under test with a spy and a read-counting clock
pub fn sut_with_counting_clock(
    output: Option<EventRecord>,
) -> (
    CheckLastEventStatus<Arc<LoadLastEventSpy>, Arc<CountingClock>>,
    Arc<LoadLastEventSpy>,
    Arc<CountingClock>,
) {
    let spy = Arc::new(LoadLastEventSpy::returning(output));
    let clock = Arc::new(CountingClock::at(fixed_timestamp()));
    let sut = CheckLastEventStatus::with_clock(spy.clone(), clock.clone());
    (sut, spy, clock)
}
