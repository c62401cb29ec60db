//! Application glue: deep links in, pages out.

use crate::{deep_link::DeepLinkParser, navigator::Navigator};
use url::Url;
use waypoint_core::{Action, ActionHandler, BoxError, Cta, DeepLinkError, EventStore, Path};

/// Ties a [`DeepLinkParser`] to a [`Navigator`].
///
/// Rendering and analytics are observers on the navigator, typically a
/// [`PageViewHook`](waypoint_std::hooks::PageViewHook).
///
/// # Example
///
/// ```rust,ignore
/// let mut navigator = Navigator::new();
/// navigator.subscribe(PageViewHook::new(renderer, ConsoleRecorder::new()));
///
/// let mut session = Session::new(DeepLinkParser::new(MockEventStore)?, navigator);
/// session.start();
/// session.open_str("https://example.com/events/42")?;
/// ```
pub struct Session<S> {
    parser: DeepLinkParser<S>,
    navigator: Navigator,
}

impl<S: EventStore> Session<S> {
    /// Create a session.
    pub fn new(parser: DeepLinkParser<S>, navigator: Navigator) -> Self {
        Self { parser, navigator }
    }

    /// Announce the initial page to observers.
    pub fn start(&mut self) {
        self.navigator.refresh();
    }

    /// Handle a deep link.
    ///
    /// On success the stack is reset to the resolved path. On failure the
    /// stack is untouched and the caller chooses a fallback.
    pub fn open(&mut self, url: &Url) -> Result<Path, DeepLinkError> {
        let path = self.parser.parse(url)?;
        self.navigator.reset(path.clone());
        Ok(path)
    }

    /// Handle a deep link given as a string.
    pub fn open_str(&mut self, input: &str) -> Result<Path, DeepLinkError> {
        let path = self.parser.parse_str(input)?;
        self.navigator.reset(path.clone());
        Ok(path)
    }

    /// Activate the current page's primary CTA.
    ///
    /// Returns the action the handler accepted, or `None` if the page has no
    /// primary CTA. An action that navigates is applied by the caller through
    /// [`Session::navigator_mut`].
    pub fn activate_primary(
        &self,
        handler: &dyn ActionHandler,
    ) -> Result<Option<Action>, BoxError> {
        let page = self.navigator.current_page();
        Self::activate(page.primary_cta(), handler)
    }

    /// Activate the current page's secondary CTA.
    ///
    /// Same contract as [`Session::activate_primary`].
    pub fn activate_secondary(
        &self,
        handler: &dyn ActionHandler,
    ) -> Result<Option<Action>, BoxError> {
        let page = self.navigator.current_page();
        Self::activate(page.secondary_cta(), handler)
    }

    fn activate(
        cta: Option<&Cta>,
        handler: &dyn ActionHandler,
    ) -> Result<Option<Action>, BoxError> {
        match cta {
            Some(cta) => {
                cta.trigger(handler)?;
                Ok(Some(cta.action().clone()))
            }
            None => Ok(None),
        }
    }

    /// The deep-link parser.
    pub fn parser(&self) -> &DeepLinkParser<S> {
        &self.parser
    }

    /// The navigator.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The navigator, for in-app navigation.
    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Split the session back into its parts.
    pub fn into_parts(self) -> (DeepLinkParser<S>, Navigator) {
        (self.parser, self.navigator)
    }
}
