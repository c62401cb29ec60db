#![allow(dead_code)]

use waypoint::{
    DeepLinkParser, Event, EventId, EventStore, Navigator, Session,
    hooks::PageViewHook,
    store::{InMemoryEventStore, MockEventStore},
    testing::{RecordingRecorder, RecordingRenderer},
};

// ============================================================================
// Fixtures
// ============================================================================

pub fn event(id: &str, name: &str, description: &str) -> Event {
    Event::new(EventId::new(id).unwrap(), name, description)
}

pub fn known_events() -> InMemoryEventStore {
    [
        event("jazz", "Jazz Night", "Live quartet, doors at 8."),
        event("gala", "Winter Gala", "Black tie."),
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// Harness
// ============================================================================

/// A session wired to recording fakes.
pub struct Harness<S> {
    pub session: Session<S>,
    pub renderer: RecordingRenderer,
    pub recorder: RecordingRecorder,
}

pub fn harness_with<S: EventStore>(store: S) -> Harness<S> {
    let renderer = RecordingRenderer::new();
    let recorder = RecordingRecorder::new();

    let mut navigator = Navigator::new();
    navigator.subscribe(PageViewHook::new(renderer.clone(), recorder.clone()));

    let parser = DeepLinkParser::new(store).unwrap();
    Harness {
        session: Session::new(parser, navigator),
        renderer,
        recorder,
    }
}

pub fn mock_harness() -> Harness<MockEventStore> {
    harness_with(MockEventStore)
}
