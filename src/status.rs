// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Status Classification
//!
//! Pure classification of a group's last event into one of three lifecycle
//! states. The classification is recomputed on every query; there is no
//! stored state that transitions over time.
//!
//! # Decision Order
//!
//! ```text
//! no record              → Done
//! now <= end_date        → Active
//! now <= review_end_date → InReview
//! otherwise              → Done
//! ```
//!
//! Both boundaries are inclusive: the instant exactly at `end_date` is still
//! `Active`, and the instant exactly at `review_end_date` is still `InReview`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::domain::EventRecord;

/// Lifecycle status of a group's last event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventStatus {
    /// The event's active window has not closed yet
    Active,

    /// The event has ended and its review window is still open
    InReview,

    /// No event, or the review window has closed
    Done,
}

impl EventStatus {
    /// Classify an optional record against `now`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{Duration, TimeZone, Utc};
    /// use last_event_status::{EventRecord, EventStatus};
    ///
    /// let now = Utc.with_ymd_and_hms(2026, 1, 19, 12, 0, 0).unwrap();
    ///
    /// assert_eq!(EventStatus::from_record(None, now), EventStatus::Done);
    ///
    /// let ended = EventRecord::new(now - Duration::minutes(30), 1.0).unwrap();
    /// assert_eq!(EventStatus::from_record(Some(&ended), now), EventStatus::InReview);
    /// ```
    pub fn from_record(record: Option<&EventRecord>, now: DateTime<Utc>) -> Self {
        let Some(record) = record else {
            return EventStatus::Done;
        };

        if now <= record.end_date() {
            return EventStatus::Active;
        }

        match record.review_end_date() {
            Some(review_end) if now <= review_end => EventStatus::InReview,
            Some(_) => EventStatus::Done,
            None => {
                warn!(
                    end_date = %record.end_date(),
                    review_hours = record.review_duration_in_hours(),
                    "Review window end is out of range, treating as open"
                );
                EventStatus::InReview
            }
        }
    }

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::InReview => "inReview",
            EventStatus::Done => "done",
        }
    }

    /// Rank from most alive (0) to finished (2)
    ///
    /// For a fixed record the rank never decreases as `now` advances.
    pub fn rank(&self) -> u8 {
        match self {
            EventStatus::Active => 0,
            EventStatus::InReview => 1,
            EventStatus::Done => 2,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown event status: {0}")]
pub struct ParseEventStatusError(String);

impl FromStr for EventStatus {
    type Err = ParseEventStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EventStatus::Active),
            "inReview" => Ok(EventStatus::InReview),
            "done" => Ok(EventStatus::Done),
            other => Err(ParseEventStatusError(other.to_string())),
        }
    }
}
