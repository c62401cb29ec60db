//! # waypoint-core
//!
//! Core traits and data model for the Waypoint navigation core.
//!
//! This crate has minimal dependencies and is designed to be imported by UI
//! layers and plugins that only need the contracts, not the standard
//! implementations in `waypoint-std`.
//!
//! # Layers
//!
//! ## Observation ([`Hook`])
//!
//! Synchronous observers of a message type. The navigator notifies its
//! observers through this trait after every mutation.
//!
//! ## Interpretation ([`Listener`])
//!
//! Turns raw input into typed values, or declines it. Combinators like
//! `filter`, `map` and `and_then` build pipelines.
//!
//! ## Routing ([`Router`])
//!
//! Matches keys (URL paths) against a table of patterns, capturing
//! parameters.
//!
//! # Data Model
//!
//! - [`Event`] / [`EventId`] - immutable event records
//! - [`Path`] - logical destinations, with [`Path::page`] as the total
//!   mapping to a [`PageDescriptor`]
//! - [`NavigationChange`] - what observers receive
//!
//! # Seams
//!
//! [`EventStore`], [`EventRecorder`], [`PageRenderer`] and [`ActionHandler`]
//! are implemented outside the core and injected.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod change;
mod error;
mod event;
mod hook;
mod listener;
mod message;
mod page;
mod path;
mod recorder;
mod router;
mod store;

// Re-exports
pub use change::{NavigationChange, NavigationOp};
pub use error::{
    BoxError, DeepLinkError, LookupError, NavigationError, RouterBuildError, WaypointError,
};
pub use event::{Event, EventId};
pub use hook::{FnHook, Hook, HookResult, hook_fn};
pub use listener::{Chain, Filter, Listener, Map};
pub use message::Message;
pub use page::{Action, ActionHandler, BoundCta, Content, Cta, PageDescriptor, PageRenderer};
pub use path::Path;
pub use recorder::EventRecorder;
pub use router::{Params, RouteResult, Router, RouterBuilder};
pub use store::EventStore;
