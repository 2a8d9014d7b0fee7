// Copyright (c) 2025 - Cowboy AI, Inc.
//! Last event status classification
//!
//! Determines whether the last event tracked for a group is `active`,
//! `inReview` or `done`, given an injected lookup of the event record and an
//! injected clock. Classification is a pure function of
//! `(now, end_date, review_duration_in_hours)`; the service around it performs
//! exactly one lookup per call and holds no state between calls.

pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod lookup;
pub mod service;
pub mod status;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{EventRecord, EventRecordError, GroupId, GroupIdError};
pub use errors::{StatusError, StatusResult};
pub use lookup::{InMemoryLastEventLookup, LastEventLookup};
pub use service::{CheckLastEventStatus, EventStatusClassifier};
pub use status::{EventStatus, ParseEventStatusError};
