// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for event status operations

use thiserror::Error;

use crate::domain::EventRecordError;

/// Errors that can occur while looking up or classifying events
///
/// The classifier itself never produces an error. Every variant here comes
/// from a lookup backend, from record validation, or from configuration.
/// Group id validation errors stay as [`GroupIdError`] at the call site.
///
/// [`GroupIdError`]: crate::domain::GroupIdError
#[derive(Debug, Error)]
pub enum StatusError {
    /// Lookup backend failed for a specific group
    #[error("Lookup failed for group {group_id}: {reason}")]
    Lookup { group_id: String, reason: String },

    /// Lookup backend is not reachable at all
    #[error("Lookup backend unavailable: {0}")]
    Unavailable(String),

    /// Event record failed validation
    #[error("Invalid event record: {0}")]
    InvalidRecord(#[from] EventRecordError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for event status operations
pub type StatusResult<T> = Result<T, StatusError>;

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        StatusError::Serialization(err.to_string())
    }
}
