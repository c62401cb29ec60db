//! Analytics sink.

use std::sync::Arc;

/// Receives a page title each time a page becomes visible.
///
/// Fire-and-forget: implementations swallow their own failures.
pub trait EventRecorder: Send + Sync {
    /// Record a view of the page titled `page_title`.
    fn record(&self, page_title: &str);
}

impl<T: EventRecorder + ?Sized> EventRecorder for &T {
    fn record(&self, page_title: &str) {
        (**self).record(page_title)
    }
}

impl<T: EventRecorder + ?Sized> EventRecorder for Arc<T> {
    fn record(&self, page_title: &str) {
        (**self).record(page_title)
    }
}
