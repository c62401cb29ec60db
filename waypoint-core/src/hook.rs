//! # Observer Layer (Hook)
//!
//! The lowest-level entry point for reacting to things that happen in the
//! navigation core.
//!
//! A hook receives a message and decides whether later hooks should see it
//! too (`Next`) or not (`Stop`). The navigator notifies its observers through
//! this trait, synchronously and in order, after every stack mutation.
//!
//! # Use Cases
//!
//! - Rendering the current page after each navigation
//! - Recording page views
//! - Logging navigation changes

use crate::{error::BoxError, message::Message};

/// Result of hook execution indicating whether to continue or stop propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookResult {
    /// The message was observed; continue to the next hook.
    Next,
    /// The message was fully handled; stop propagation to subsequent hooks.
    Stop,
}

/// A synchronous observer of messages of type `E`.
///
/// Hooks are object safe, so registries store them as `Box<dyn Hook<E>>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Hook<{E}>`",
    label = "missing `Hook` implementation",
    note = "Hooks must implement `on_event` for the specific message type `{E}`."
)]
pub trait Hook<E: Message>: Send + Sync + 'static {
    /// Called when a message is dispatched.
    fn on_event(&self, event: &E) -> Result<HookResult, BoxError>;
}

impl<E: Message> Hook<E> for Box<dyn Hook<E>> {
    fn on_event(&self, event: &E) -> Result<HookResult, BoxError> {
        (**self).on_event(event)
    }
}

impl<E: Message, H: Hook<E>> Hook<E> for std::sync::Arc<H> {
    fn on_event(&self, event: &E) -> Result<HookResult, BoxError> {
        (**self).on_event(event)
    }
}

/// A hook backed by a closure. Created with [`hook_fn`].
pub struct FnHook<F> {
    f: F,
}

/// Wraps a closure as a [`Hook`].
///
/// ```rust,ignore
/// navigator.subscribe(hook_fn(|change: &NavigationChange| {
///     println!("depth is now {}", change.depth);
///     Ok(HookResult::Next)
/// }));
/// ```
pub fn hook_fn<E, F>(f: F) -> FnHook<F>
where
    E: Message,
    F: Fn(&E) -> Result<HookResult, BoxError> + Send + Sync + 'static,
{
    FnHook { f }
}

impl<E, F> Hook<E> for FnHook<F>
where
    E: Message,
    F: Fn(&E) -> Result<HookResult, BoxError> + Send + Sync + 'static,
{
    fn on_event(&self, event: &E) -> Result<HookResult, BoxError> {
        (self.f)(event)
    }
}
