//! Observer registry.
//!
//! Hooks run in priority order. Each registration comes back with an
//! [`EnabledHandle`] that suspends or resumes it without unregistering.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use waypoint_core::{BoxError, Hook, HookResult, Message};

/// Runtime switch for one registered hook.
#[derive(Debug, Clone)]
pub struct EnabledHandle(Arc<AtomicBool>);

impl EnabledHandle {
    fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// Whether the hook currently receives messages.
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Resume delivery.
    pub fn enable(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Suspend delivery.
    pub fn disable(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// How a hook is registered.
#[derive(Debug, Clone, Default)]
pub struct RegistrationMeta {
    /// Lower runs first. Default is 0.
    pub priority: i32,
    /// Register suspended.
    pub suspended: bool,
}

impl RegistrationMeta {
    /// Priority 0, enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Register the hook disabled; enable it later through its handle.
    pub fn suspended(mut self) -> Self {
        self.suspended = true;
        self
    }
}

/// What happened during one [`Registry::dispatch`].
#[derive(Debug)]
pub struct Dispatched {
    /// [`HookResult::Stop`] if a hook ended propagation.
    pub result: HookResult,
    /// Errors from hooks that failed, in the order they ran.
    pub errors: Vec<BoxError>,
}

struct Entry<E: Message> {
    hook: Box<dyn Hook<E>>,
    priority: i32,
    enabled: EnabledHandle,
}

/// Priority-ordered collection of hooks for one message type.
///
/// Hooks can be added at any time. Entries with equal priority keep their
/// registration order.
pub struct Registry<E: Message> {
    entries: Vec<Entry<E>>,
}

impl<E: Message> Registry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a hook with default metadata.
    pub fn register<H: Hook<E>>(&mut self, hook: H) -> EnabledHandle {
        self.register_with_meta(hook, RegistrationMeta::new())
    }

    /// Register a hook with specified metadata.
    ///
    /// Returns the handle that toggles the hook.
    pub fn register_with_meta<H: Hook<E>>(
        &mut self,
        hook: H,
        meta: RegistrationMeta,
    ) -> EnabledHandle {
        let enabled = EnabledHandle::new(!meta.suspended);
        // Insert after every entry with priority <= ours to keep ties stable.
        let at = self.entries.partition_point(|e| e.priority <= meta.priority);
        self.entries.insert(
            at,
            Entry {
                hook: Box::new(hook),
                priority: meta.priority,
                enabled: enabled.clone(),
            },
        );
        enabled
    }

    /// Dispatch a message to all enabled hooks in priority order.
    ///
    /// Only [`HookResult::Stop`] ends propagation. A failing hook is skipped
    /// and its error collected.
    pub fn dispatch(&self, event: &E) -> Dispatched {
        let mut errors = Vec::new();
        for hook in self.iter() {
            match hook.on_event(event) {
                Ok(HookResult::Stop) => {
                    return Dispatched {
                        result: HookResult::Stop,
                        errors,
                    };
                }
                Ok(HookResult::Next) => {}
                Err(err) => errors.push(err),
            }
        }
        Dispatched {
            result: HookResult::Next,
            errors,
        }
    }

    /// Iterate over all enabled hooks in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Hook<E>> {
        self.entries
            .iter()
            .filter(|e| e.enabled.is_enabled())
            .map(|e| &*e.hook)
    }

    /// Get the number of registered hooks, enabled or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Message> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}
