//! Event store implementations.

use std::collections::HashMap;
use waypoint_core::{Event, EventId, EventStore, LookupError};

/// Name given to every event synthesized by [`MockEventStore`].
pub const MOCK_EVENT_NAME: &str = "Mock Event";

/// Description given to every event synthesized by [`MockEventStore`].
pub const MOCK_EVENT_DESCRIPTION: &str = "This is a mock event.";

/// A store that synthesizes a placeholder event for any non-empty id.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEventStore;

impl EventStore for MockEventStore {
    fn lookup(&self, id: &str) -> Result<Event, LookupError> {
        Ok(Event::new(
            EventId::new(id)?,
            MOCK_EVENT_NAME,
            MOCK_EVENT_DESCRIPTION,
        ))
    }
}

/// A fixed table of known events.
///
/// Unknown ids fail with [`LookupError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    events: HashMap<EventId, Event>,
}

impl InMemoryEventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an event, returning the previous one with the same id.
    pub fn insert(&mut self, event: Event) -> Option<Event> {
        self.events.insert(event.id().clone(), event)
    }

    /// Number of known events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the store has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Event> for InMemoryEventStore {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        let mut store = Self::new();
        for event in iter {
            store.insert(event);
        }
        store
    }
}

impl EventStore for InMemoryEventStore {
    fn lookup(&self, id: &str) -> Result<Event, LookupError> {
        let id = EventId::new(id)?;
        self.events
            .get(&id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(id.into()))
    }
}
