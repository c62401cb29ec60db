//! Logging hook for observing messages.

use std::fmt::Debug;
use waypoint_core::{BoxError, Hook, HookResult, Message};

/// A hook that logs every message it sees and lets it through.
///
/// Uses `tracing` at debug level when the `tracing` feature is enabled;
/// otherwise it is a pass-through.
///
/// # Example
///
/// ```rust,ignore
/// navigator.subscribe(LoggingHook::named("main_nav"));
/// ```
pub struct LoggingHook {
    name: &'static str,
}

impl LoggingHook {
    /// Create a new `LoggingHook` with a default name.
    pub fn new() -> Self {
        Self { name: "navigation" }
    }

    /// Create a new `LoggingHook` with a custom name.
    ///
    /// The name is used in log messages to identify the source.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Hook<E> for LoggingHook
where
    E: Message + Debug,
{
    fn on_event(&self, event: &E) -> Result<HookResult, BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = %self.name, event = ?event, "navigation change");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, event);
        }
        Ok(HookResult::Next)
    }
}
