// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Status Classification
//!
//! Records are generated with end dates within ten days of the fixture
//! instant and review windows of up to two days.

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;

use crate::fixtures::{fixed_timestamp, group_id, sut_with};
use last_event_status::{EventRecord, EventStatus};

const TEN_DAYS_MS: i64 = 10 * 24 * 60 * 60 * 1000;

fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (-TEN_DAYS_MS..=TEN_DAYS_MS).prop_map(|ms| fixed_timestamp() + Duration::milliseconds(ms))
}

fn record_strategy() -> impl Strategy<Value = EventRecord> {
    (instant_strategy(), 0.0f64..48.0)
        .prop_map(|(end, hours)| EventRecord::new(end, hours).expect("generated record is valid"))
}

proptest! {
    /// Without a record the status is always done
    #[test]
    fn prop_absent_record_is_done(now in instant_strategy()) {
        prop_assert_eq!(EventStatus::from_record(None, now), EventStatus::Done);
    }

    /// Active exactly when now has not passed the end date
    #[test]
    fn prop_active_iff_not_past_end(record in record_strategy(), now in instant_strategy()) {
        let status = record.status_at(now);
        prop_assert_eq!(status == EventStatus::Active, now <= record.end_date());
    }

    /// In review exactly when now lies in (end_date, review_end_date]
    #[test]
    fn prop_in_review_iff_inside_window(record in record_strategy(), now in instant_strategy()) {
        let review_end = record.review_end_date().expect("bounded review window");
        let inside = now > record.end_date() && now <= review_end;
        prop_assert_eq!(record.status_at(now) == EventStatus::InReview, inside);
    }

    /// Status never becomes more alive as time advances
    #[test]
    fn prop_status_is_monotonic_in_time(
        record in record_strategy(),
        a in instant_strategy(),
        b in instant_strategy(),
    ) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(record.status_at(earlier).rank() <= record.status_at(later).rank());
    }

    /// The service agrees with the pure function and is idempotent
    #[test]
    fn prop_service_matches_pure_classification(record in proptest::option::of(record_strategy())) {
        let expected = EventStatus::from_record(record.as_ref(), fixed_timestamp());
        let (sut, spy) = sut_with(record);

        let (first, second) = tokio_test::block_on(async {
            let first = sut.exec(&group_id()).await.expect("spy never fails");
            let second = sut.exec(&group_id()).await.expect("spy never fails");
            (first, second)
        });

        prop_assert_eq!(first, expected);
        prop_assert_eq!(second, expected);
        prop_assert_eq!(spy.calls_count(), 2);
    }
}
