//! Display hook: renders the current page and records the view.

use waypoint_core::{BoxError, EventRecorder, Hook, HookResult, NavigationChange, PageRenderer};

/// Renders the page of every [`NavigationChange`] and records its title.
///
/// The title is recorded once per successful render. A failed render is not
/// a view, so nothing is recorded and the error goes back to the dispatcher.
pub struct PageViewHook<R, A> {
    renderer: R,
    recorder: A,
}

impl<R, A> PageViewHook<R, A> {
    /// Pair a renderer with the recorder that hears about its views.
    pub fn new(renderer: R, recorder: A) -> Self {
        Self { renderer, recorder }
    }

    /// The wrapped renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The wrapped recorder.
    pub fn recorder(&self) -> &A {
        &self.recorder
    }
}

impl<R, A> Hook<NavigationChange> for PageViewHook<R, A>
where
    R: PageRenderer + 'static,
    A: EventRecorder + 'static,
{
    fn on_event(&self, change: &NavigationChange) -> Result<HookResult, BoxError> {
        let page = change.current_page();
        self.renderer.render(&page)?;
        self.recorder.record(page.title());
        Ok(HookResult::Next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingRecorder, RecordingRenderer};
    use waypoint_core::{NavigationOp, Path};

    fn change(top: Option<Path>) -> NavigationChange {
        NavigationChange {
            op: NavigationOp::Reset,
            depth: usize::from(top.is_some()),
            top,
        }
    }

    #[test]
    fn test_renders_then_records() {
        let renderer = RecordingRenderer::new();
        let recorder = RecordingRecorder::new();
        let hook = PageViewHook::new(renderer.clone(), recorder.clone());

        hook.on_event(&change(Some(Path::SeatingSelection))).unwrap();
        hook.on_event(&change(None)).unwrap();

        assert_eq!(renderer.titles(), ["Seating", "Events"]);
        assert_eq!(recorder.titles(), ["Seating", "Events"]);
    }

    #[test]
    fn test_failed_render_is_not_recorded() {
        let renderer = RecordingRenderer::failing();
        let recorder = RecordingRecorder::new();
        let hook = PageViewHook::new(renderer, recorder.clone());

        assert!(hook.on_event(&change(Some(Path::SignUp))).is_err());
        assert_eq!(recorder.count(), 0);
    }
}
