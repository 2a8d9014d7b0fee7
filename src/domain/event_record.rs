// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Record Value Object
//!
//! The last event known for a group: the instant its active window closes
//! and the length of the review window that trails it.
//!
//! # Wire Shape
//!
//! ```json
//! { "endDate": "2026-01-19T12:00:00Z", "reviewDurationInHours": 1 }
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::EventStatus;

const NANOS_PER_HOUR: f64 = 60.0 * 60.0 * 1_000_000_000.0;

/// Event record validation error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EventRecordError {
    #[error("Review duration cannot be negative: {0} hours")]
    NegativeReviewDuration(f64),

    #[error("Review duration must be a finite number of hours")]
    NonFiniteReviewDuration,
}

/// Last event recorded for a group
///
/// # Invariants
/// - `review_duration_in_hours` is finite and non-negative
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use last_event_status::domain::EventRecord;
///
/// let end = Utc.with_ymd_and_hms(2026, 1, 19, 12, 0, 0).unwrap();
/// let record = EventRecord::new(end, 1.5).unwrap();
/// assert_eq!(record.review_end_date(), Some(end + chrono::Duration::minutes(90)));
///
/// assert!(EventRecord::new(end, -1.0).is_err());
/// assert!(EventRecord::new(end, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EventRecordDto", into = "EventRecordDto")]
pub struct EventRecord {
    end_date: DateTime<Utc>,
    review_duration_in_hours: f64,
}

impl EventRecord {
    /// Create a new event record with validation
    pub fn new(
        end_date: DateTime<Utc>,
        review_duration_in_hours: f64,
    ) -> Result<Self, EventRecordError> {
        if !review_duration_in_hours.is_finite() {
            return Err(EventRecordError::NonFiniteReviewDuration);
        }

        if review_duration_in_hours < 0.0 {
            return Err(EventRecordError::NegativeReviewDuration(
                review_duration_in_hours,
            ));
        }

        Ok(Self {
            end_date,
            review_duration_in_hours,
        })
    }

    /// Instant at which the active window closes
    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Length of the review window in hours, as recorded
    pub fn review_duration_in_hours(&self) -> f64 {
        self.review_duration_in_hours
    }

    /// Length of the review window at nanosecond resolution
    ///
    /// Returns `None` when the duration does not fit a `chrono::Duration`.
    pub fn review_duration(&self) -> Option<Duration> {
        let nanos = (self.review_duration_in_hours * NANOS_PER_HOUR).round();
        if nanos >= i64::MAX as f64 {
            return None;
        }
        Some(Duration::nanoseconds(nanos as i64))
    }

    /// Instant at which the review window closes
    ///
    /// `None` means the end lies beyond the representable range of
    /// `DateTime<Utc>`, so the review window never closes.
    pub fn review_end_date(&self) -> Option<DateTime<Utc>> {
        self.review_duration()
            .and_then(|review| self.end_date.checked_add_signed(review))
    }

    /// Classify this record against the given instant
    pub fn status_at(&self, now: DateTime<Utc>) -> EventStatus {
        EventStatus::from_record(Some(self), now)
    }
}

/// Serialized form, validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecordDto {
    end_date: DateTime<Utc>,
    review_duration_in_hours: f64,
}

impl TryFrom<EventRecordDto> for EventRecord {
    type Error = EventRecordError;

    fn try_from(dto: EventRecordDto) -> Result<Self, Self::Error> {
        Self::new(dto.end_date, dto.review_duration_in_hours)
    }
}

impl From<EventRecord> for EventRecordDto {
    fn from(record: EventRecord) -> Self {
        Self {
            end_date: record.end_date,
            review_duration_in_hours: record.review_duration_in_hours,
        }
    }
}
