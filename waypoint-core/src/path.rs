//! Logical destinations and their pages.

use crate::{
    event::Event,
    message::Message,
    page::{Action, Content, Cta, PageDescriptor},
};

/// A logical destination within the application.
///
/// Equality and hashing are structural: two `EventDetails` paths are equal
/// exactly when their events are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Path {
    /// The sign-up flow.
    SignUp,
    /// The events listing. Shown when nothing has been navigated to yet.
    #[default]
    Events,
    /// Details of one resolved event.
    EventDetails(Event),
    /// Seat picking.
    SeatingSelection,
}

impl Message for Path {}

impl Path {
    /// Derive the page for this path.
    ///
    /// Total: every variant has a page.
    pub fn page(&self) -> PageDescriptor {
        match self {
            Path::SignUp => PageDescriptor::new("Sign Up", Content::SignUpForm),
            Path::Events => PageDescriptor::new("Events", Content::EventList),
            Path::EventDetails(event) => PageDescriptor::new(
                event.name(),
                Content::Text(event.description().to_string()),
            )
            .with_primary(Cta::new("RSVP", Action::Rsvp(event.clone()))),
            Path::SeatingSelection => PageDescriptor::new("Seating", Content::SeatingChart),
        }
    }
}
