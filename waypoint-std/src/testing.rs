//! Testing utilities for Waypoint.
//!
//! Fakes for the injected seams, all cheaply cloneable so a test can keep a
//! handle while the navigator owns another.
//!
//! - [`RecordingHook`]: A hook that records all messages it receives
//! - [`RecordingRecorder`]: An [`EventRecorder`] that keeps the titles
//! - [`RecordingRenderer`]: A [`PageRenderer`] that keeps the pages, or fails
//! - [`RecordingActionHandler`]: An [`ActionHandler`] that keeps the actions

use std::sync::{Arc, Mutex};
use waypoint_core::{
    Action, ActionHandler, BoxError, EventRecorder, Hook, HookResult, Message, PageDescriptor,
    PageRenderer,
};

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records all messages it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHook::<NavigationChange>::new();
/// navigator.subscribe(recorder.clone());
///
/// navigator.push(Path::SignUp)?;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHook<E: Clone> {
    events: Arc<Mutex<Vec<E>>>,
    result: HookResult,
}

impl<E: Clone> RecordingHook<E> {
    /// Create a new recording hook that returns `Next`.
    pub fn new() -> Self {
        Self::with_result(HookResult::Next)
    }

    /// Create a recording hook that returns a specific result.
    pub fn with_result(result: HookResult) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a clone of the recorded messages.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded messages.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded messages.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl<E: Clone> Default for RecordingHook<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for RecordingHook<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            result: self.result,
        }
    }
}

impl<E: Message + Clone> Hook<E> for RecordingHook<E> {
    fn on_event(&self, event: &E) -> Result<HookResult, BoxError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(self.result)
    }
}

// ============================================================================
// Recording Recorder
// ============================================================================

/// An event recorder that keeps every title.
#[derive(Clone, Default)]
pub struct RecordingRecorder {
    titles: Arc<Mutex<Vec<String>>>,
}

impl RecordingRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles recorded so far, oldest first.
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    /// Number of recorded views.
    pub fn count(&self) -> usize {
        self.titles.lock().unwrap().len()
    }

    /// Forget all recorded views.
    pub fn clear(&self) {
        self.titles.lock().unwrap().clear();
    }
}

impl EventRecorder for RecordingRecorder {
    fn record(&self, page_title: &str) {
        self.titles.lock().unwrap().push(page_title.to_string());
    }
}

// ============================================================================
// Recording Renderer
// ============================================================================

/// A renderer that keeps every page it is asked to draw.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pages: Arc<Mutex<Vec<PageDescriptor>>>,
    fail: bool,
}

impl RecordingRenderer {
    /// Create a renderer that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that rejects every page.
    pub fn failing() -> Self {
        Self {
            pages: Arc::default(),
            fail: true,
        }
    }

    /// Pages rendered so far.
    pub fn pages(&self) -> Vec<PageDescriptor> {
        self.pages.lock().unwrap().clone()
    }

    /// Titles of the pages rendered so far.
    pub fn titles(&self) -> Vec<String> {
        self.pages
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.title().to_string())
            .collect()
    }

    /// The most recently rendered page.
    pub fn last(&self) -> Option<PageDescriptor> {
        self.pages.lock().unwrap().last().cloned()
    }
}

impl PageRenderer for RecordingRenderer {
    fn render(&self, page: &PageDescriptor) -> Result<(), BoxError> {
        if self.fail {
            return Err(format!("render failed: {}", page.title()).into());
        }
        self.pages.lock().unwrap().push(page.clone());
        Ok(())
    }
}

// ============================================================================
// Recording Action Handler
// ============================================================================

/// An action handler that keeps every action it receives.
#[derive(Clone, Default)]
pub struct RecordingActionHandler {
    actions: Arc<Mutex<Vec<Action>>>,
}

impl RecordingActionHandler {
    /// Create an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions handled so far.
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }
}

impl ActionHandler for RecordingActionHandler {
    fn handle(&self, action: &Action) -> Result<(), BoxError> {
        self.actions.lock().unwrap().push(action.clone());
        Ok(())
    }
}
