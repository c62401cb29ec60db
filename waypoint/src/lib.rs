//! # waypoint - Navigation Core for Small Apps
//!
//! `waypoint` owns "where the user is": a stack of [`Path`]s, a deep-link
//! parser that turns URLs into paths, and a total mapping from each path to
//! the [`PageDescriptor`] a renderer draws.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waypoint::prelude::*;
//! use waypoint::{hooks::PageViewHook, recorders::ConsoleRecorder, store::MockEventStore};
//!
//! let mut navigator = Navigator::new();
//! navigator.subscribe(PageViewHook::new(my_renderer, ConsoleRecorder::new()));
//!
//! let mut session = Session::new(DeepLinkParser::new(MockEventStore)?, navigator);
//! session.start();                                   // shows "Events"
//! session.open_str("myapp://host/events/42")?;       // shows "Mock Event"
//! session.navigator_mut().push(Path::SeatingSelection)?;
//! ```
//!
//! ## Flow
//!
//! URL → [`DeepLinkParser`] (consults an [`EventStore`]) → [`Path`] →
//! [`Navigator::reset`] → observers, synchronously → renderer and
//! [`EventRecorder`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod config;
mod deep_link;
mod navigator;
mod session;

pub use config::{EmptyPopPolicy, NavigatorConfig};
pub use deep_link::{DEFAULT_ROUTES, DeepLinkParser, LinkRoute};
pub use navigator::Navigator;
pub use session::Session;

// Data model
pub use waypoint_core::{Event, EventId, NavigationChange, NavigationOp, Path};

// Page model
pub use waypoint_core::{Action, ActionHandler, BoundCta, Content, Cta, PageDescriptor};

// Seams
pub use waypoint_core::{EventRecorder, EventStore, PageRenderer};

// Observation and interpretation
pub use waypoint_core::{FnHook, Hook, HookResult, Listener, Message, hook_fn};

// Errors
pub use waypoint_core::{
    BoxError, DeepLinkError, LookupError, NavigationError, RouterBuildError, WaypointError,
};

/// Observer bookkeeping.
pub mod registry {
    pub use waypoint_std::registry::{Dispatched, EnabledHandle, RegistrationMeta, Registry};
}

/// Standard navigation observers.
pub mod hooks {
    pub use waypoint_std::hooks::{LoggingHook, PageViewHook};
}

/// Event store implementations.
pub mod store {
    pub use waypoint_std::store::{
        InMemoryEventStore, MOCK_EVENT_DESCRIPTION, MOCK_EVENT_NAME, MockEventStore,
    };
}

/// Event recorder implementations.
pub mod recorders {
    pub use waypoint_std::recorders::{ConsoleRecorder, TracingRecorder};
}

/// Testing utilities.
pub mod testing {
    pub use waypoint_std::testing::{
        RecordingActionHandler, RecordingHook, RecordingRecorder, RecordingRenderer,
    };
}

/// Prelude module - common imports for Waypoint.
///
/// # Usage
///
/// ```rust,ignore
/// use waypoint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DeepLinkParser, Event, EventId, EventRecorder, EventStore, Hook, HookResult, Navigator,
        NavigatorConfig, PageDescriptor, PageRenderer, Path, Session,
    };
}
