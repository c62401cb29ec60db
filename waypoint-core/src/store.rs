//! Event lookup.

use crate::{error::LookupError, event::Event};
use std::sync::Arc;

/// Resolves event ids to events.
///
/// Stores are passed to the components that need them; there is no global
/// instance.
pub trait EventStore: Send + Sync {
    /// Look up the event with `id`.
    fn lookup(&self, id: &str) -> Result<Event, LookupError>;
}

impl<T: EventStore + ?Sized> EventStore for &T {
    fn lookup(&self, id: &str) -> Result<Event, LookupError> {
        (**self).lookup(id)
    }
}

impl<T: EventStore + ?Sized> EventStore for Arc<T> {
    fn lookup(&self, id: &str) -> Result<Event, LookupError> {
        (**self).lookup(id)
    }
}

impl<T: EventStore + ?Sized> EventStore for Box<T> {
    fn lookup(&self, id: &str) -> Result<Event, LookupError> {
        (**self).lookup(id)
    }
}
