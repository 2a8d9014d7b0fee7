// Copyright (c) 2025 - Cowboy AI, Inc.
//! Group Identifier Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Group identifier validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupIdError {
    #[error("Group id is empty")]
    Empty,
}

/// Identifier of the group whose last event is tracked
///
/// The identifier is opaque: the only invariant is that it carries at
/// least one non-whitespace character.
///
/// # Examples
///
/// ```rust
/// use last_event_status::domain::GroupId;
///
/// let group = GroupId::new("any_group_id").unwrap();
/// assert_eq!(group.as_str(), "any_group_id");
///
/// assert!(GroupId::new("").is_err());
/// assert!(GroupId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupId(String);

impl GroupId {
    /// Create a new group id with validation
    pub fn new(group_id: impl Into<String>) -> Result<Self, GroupIdError> {
        let group_id = group_id.into();

        if group_id.trim().is_empty() {
            return Err(GroupIdError::Empty);
        }

        Ok(Self(group_id))
    }

    /// Get the group id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GroupId {
    type Error = GroupIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for GroupId {
    type Error = GroupIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupId> for String {
    fn from(value: GroupId) -> Self {
        value.0
    }
}
