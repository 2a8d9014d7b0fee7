// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Value Objects
//!
//! Value objects describing a group and the last event tracked for it.
//! All value objects validate their invariants on construction, including
//! when deserialized.
//!
//! # Value Objects
//!
//! - [`GroupId`]: opaque, non-empty identifier of a group
//! - [`EventRecord`]: end instant plus trailing review window

pub mod event_record;
pub mod group_id;

pub use event_record::{EventRecord, EventRecordError};
pub use group_id::{GroupId, GroupIdError};
