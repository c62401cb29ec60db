//! Rendering-agnostic page descriptions.
//!
//! A [`PageDescriptor`] is what the external renderer draws: a title, a body
//! and up to two calls-to-action. Descriptors are derived from a
//! [`Path`](crate::Path) on demand and never stored.

use crate::{error::BoxError, event::Event};
use std::sync::Arc;

/// The body of a page.
///
/// Everything except [`Content::Text`] is a placeholder whose actual
/// rendering belongs to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// The events listing.
    EventList,
    /// The sign-up form.
    SignUpForm,
    /// The seat picker.
    SeatingChart,
}

impl Content {
    /// The text body, if this is [`Content::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Something a CTA asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// RSVP to an event.
    Rsvp(Event),
}

/// Performs [`Action`]s on behalf of the renderer.
pub trait ActionHandler: Send + Sync {
    /// Carry out `action`.
    fn handle(&self, action: &Action) -> Result<(), BoxError>;
}

impl<T: ActionHandler + ?Sized> ActionHandler for Arc<T> {
    fn handle(&self, action: &Action) -> Result<(), BoxError> {
        (**self).handle(action)
    }
}

impl<T: ActionHandler + ?Sized> ActionHandler for &T {
    fn handle(&self, action: &Action) -> Result<(), BoxError> {
        (**self).handle(action)
    }
}

/// A labelled, user-triggerable action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cta {
    title: String,
    action: Action,
}

impl Cta {
    /// Create a CTA.
    pub fn new(title: impl Into<String>, action: Action) -> Self {
        Self {
            title: title.into(),
            action,
        }
    }

    /// Button label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The action performed on activation.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Perform the action through `handler`.
    pub fn trigger(&self, handler: &dyn ActionHandler) -> Result<(), BoxError> {
        handler.handle(&self.action)
    }

    /// Bind the CTA to a handler, producing a zero-argument operation.
    pub fn bind(&self, handler: Arc<dyn ActionHandler>) -> BoundCta {
        BoundCta {
            cta: self.clone(),
            handler,
        }
    }
}

/// A [`Cta`] bound to its [`ActionHandler`].
#[derive(Clone)]
pub struct BoundCta {
    cta: Cta,
    handler: Arc<dyn ActionHandler>,
}

impl BoundCta {
    /// Button label.
    pub fn title(&self) -> &str {
        self.cta.title()
    }

    /// Activate the CTA.
    pub fn invoke(&self) -> Result<(), BoxError> {
        self.cta.trigger(&*self.handler)
    }
}

impl std::fmt::Debug for BoundCta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundCta").field("cta", &self.cta).finish_non_exhaustive()
    }
}

/// Everything the renderer needs to show one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    title: String,
    content: Content,
    primary_cta: Option<Cta>,
    secondary_cta: Option<Cta>,
}

impl PageDescriptor {
    /// Create a descriptor with no CTAs.
    pub fn new(title: impl Into<String>, content: Content) -> Self {
        Self {
            title: title.into(),
            content,
            primary_cta: None,
            secondary_cta: None,
        }
    }

    /// Set the primary CTA.
    pub fn with_primary(mut self, cta: Cta) -> Self {
        self.primary_cta = Some(cta);
        self
    }

    /// Set the secondary CTA.
    pub fn with_secondary(mut self, cta: Cta) -> Self {
        self.secondary_cta = Some(cta);
        self
    }

    /// Page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Page body.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Primary call-to-action, if the page has one.
    pub fn primary_cta(&self) -> Option<&Cta> {
        self.primary_cta.as_ref()
    }

    /// Secondary call-to-action, if the page has one.
    pub fn secondary_cta(&self) -> Option<&Cta> {
        self.secondary_cta.as_ref()
    }

    /// Present CTAs, primary first.
    pub fn ctas(&self) -> impl Iterator<Item = &Cta> {
        self.primary_cta.iter().chain(self.secondary_cta.iter())
    }
}

/// Draws pages. Implemented by the UI layer.
pub trait PageRenderer: Send + Sync {
    /// Display `page`.
    fn render(&self, page: &PageDescriptor) -> Result<(), BoxError>;
}

impl<T: PageRenderer + ?Sized> PageRenderer for Arc<T> {
    fn render(&self, page: &PageDescriptor) -> Result<(), BoxError> {
        (**self).render(page)
    }
}
