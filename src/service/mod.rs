// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Event Status
//!
//! Application service that answers "what state is this group's last event
//! in right now?".
//!
//! # Architecture
//!
//! ```text
//! classify(group_id)
//!     ↓
//! LastEventLookup (injected, one await)
//!     ↓
//! Clock (injected, read once)
//!     ↓
//! EventStatus::from_record (pure)
//! ```
//!
//! # Design Principles
//!
//! 1. **Constructor Injection**: lookup and clock are passed in, never global
//! 2. **Pure Decision**: all branching lives in [`EventStatus::from_record`]
//! 3. **Stateless**: concurrent calls share nothing mutable
//!
//! [`EventStatus::from_record`]: crate::status::EventStatus::from_record

pub mod check_last_event_status;

pub use check_last_event_status::{CheckLastEventStatus, EventStatusClassifier};
