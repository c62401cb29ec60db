//! The event entity shown on the details page.

use crate::error::LookupError;
use std::fmt;

/// A non-empty, opaque event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct EventId(String);

impl EventId {
    /// Create an id, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, LookupError> {
        let id = id.into();
        if id.is_empty() {
            return Err(LookupError::EmptyId);
        }
        Ok(Self(id))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventId {
    type Error = LookupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EventId {
    type Error = LookupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable event record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    id: EventId,
    name: String,
    description: String,
}

impl Event {
    /// Create an event.
    pub fn new(id: EventId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// The event's identifier.
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// The display name, used as the details page title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description, shown as the details page body.
    pub fn description(&self) -> &str {
        &self.description
    }
}
