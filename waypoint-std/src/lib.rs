//! # waypoint-std
//!
//! Standard implementations for the Waypoint navigation core.
//!
//! This crate provides:
//! - **Routing**: [`MatchitRouter`](routing::MatchitRouter) for URL path patterns
//! - **Observers**: [`Registry`](registry::Registry) with per-hook metadata and toggles
//! - **Hooks**: [`LoggingHook`](hooks::LoggingHook), [`PageViewHook`](hooks::PageViewHook)
//! - **Stores**: [`MockEventStore`](store::MockEventStore), [`InMemoryEventStore`](store::InMemoryEventStore)
//! - **Recorders**: [`ConsoleRecorder`](recorders::ConsoleRecorder), [`TracingRecorder`](recorders::TracingRecorder)
//! - **Testing**: recording fakes for every seam

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use waypoint_core;

// Modules
pub mod hooks;
pub mod recorders;
pub mod registry;
pub mod routing;
pub mod store;
pub mod testing;
