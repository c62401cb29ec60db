//! Navigation stack behaviour seen from the outside.

use std::sync::{Arc, Mutex};
use waypoint::{
    EmptyPopPolicy, Hook, HookResult, NavigationChange, NavigationError, NavigationOp, Navigator,
    NavigatorConfig, Path, hook_fn,
    hooks::PageViewHook,
    registry::RegistrationMeta,
    testing::{RecordingHook, RecordingRecorder, RecordingRenderer},
};

mod common;
use common::event;

#[test]
fn test_push_pop_titles() {
    let mut nav = Navigator::new();

    nav.push(Path::SignUp).unwrap();
    nav.push(Path::Events).unwrap();
    assert_eq!(nav.current_page().title(), "Events");

    nav.pop().unwrap();
    assert_eq!(nav.current_page().title(), "Sign Up");

    nav.pop().unwrap();
    assert!(nav.is_empty());
    assert_eq!(nav.pop(), Ok(None), "empty pop is a silent no-op by default");
    assert_eq!(nav.current_page().title(), "Events");
}

#[test]
fn test_reset_after_pushes() {
    let mut nav = Navigator::new();
    nav.push(Path::SignUp).unwrap();
    nav.push(Path::EventDetails(event("1", "A", "a"))).unwrap();
    nav.push(Path::Events).unwrap();

    nav.reset(Path::SeatingSelection);
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.paths(), [Path::SeatingSelection]);
    assert_eq!(nav.current_page().title(), "Seating");
}

#[test]
fn test_event_details_page_from_stack() {
    let mut nav = Navigator::new();
    let gala = event("gala", "Winter Gala", "Black tie.");
    nav.push(Path::EventDetails(gala.clone())).unwrap();

    let page = nav.current_page();
    assert_eq!(page.title(), gala.name());
    assert_eq!(page.content().as_text(), Some(gala.description()));
    assert_eq!(page.primary_cta().map(|c| c.title()), Some("RSVP"));
    assert_eq!(nav.current_path(), Path::EventDetails(gala));
}

#[test]
fn test_depth_limit() {
    let config = NavigatorConfig::default().with_max_depth(2);
    let mut nav = Navigator::with_config(config);
    let hook = RecordingHook::<NavigationChange>::new();
    nav.subscribe(hook.clone());

    nav.push(Path::SignUp).unwrap();
    nav.push(Path::Events).unwrap();
    assert_eq!(
        nav.push(Path::SeatingSelection),
        Err(NavigationError::StackOverflow { limit: 2 })
    );

    assert_eq!(nav.depth(), 2);
    assert_eq!(nav.current_path(), Path::Events);
    assert_eq!(hook.count(), 2, "rejected push must not notify");
}

#[test]
fn test_strict_pop_policy() {
    let config = NavigatorConfig::default().with_empty_pop(EmptyPopPolicy::Error);
    let mut nav = Navigator::with_config(config);
    let hook = RecordingHook::<NavigationChange>::new();
    nav.subscribe(hook.clone());

    assert_eq!(nav.pop(), Err(NavigationError::EmptyStack));
    assert!(!nav.can_pop());
    assert_eq!(hook.count(), 0);
}

#[test]
fn test_observer_order_and_stop() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let push = |id: &'static str, result: HookResult| {
        let order = order.clone();
        hook_fn(move |_: &NavigationChange| {
            order.lock().unwrap().push(id);
            Ok(result)
        })
    };

    let mut nav = Navigator::new();
    nav.subscribe(push("late", HookResult::Next));
    nav.subscribe_with_meta(
        push("early", HookResult::Next),
        RegistrationMeta::new().with_priority(-1),
    );
    let stopper = nav.subscribe_with_meta(
        push("stopper", HookResult::Stop),
        RegistrationMeta::new().with_priority(0),
    );
    nav.subscribe(push("never", HookResult::Next));

    nav.push(Path::SignUp).unwrap();
    assert_eq!(*order.lock().unwrap(), ["early", "late", "stopper"]);

    order.lock().unwrap().clear();
    stopper.disable();
    nav.pop().unwrap();
    assert_eq!(*order.lock().unwrap(), ["early", "late", "never"]);
}

#[test]
fn test_failing_observer_does_not_undo_mutation() {
    struct Broken;
    impl Hook<NavigationChange> for Broken {
        fn on_event(&self, _: &NavigationChange) -> Result<HookResult, waypoint::BoxError> {
            Err("renderer offline".into())
        }
    }

    let mut nav = Navigator::new();
    nav.subscribe(Broken);
    nav.push(Path::SignUp).unwrap();
    nav.reset(Path::SeatingSelection);
    assert_eq!(nav.paths(), [Path::SeatingSelection]);
}

#[test]
fn test_failing_observer_does_not_starve_renderer() {
    let renderer = RecordingRenderer::new();
    let recorder = RecordingRecorder::new();

    let mut nav = Navigator::new();
    nav.subscribe_with_meta(
        hook_fn(|_: &NavigationChange| Err("analytics offline".into())),
        RegistrationMeta::new().with_priority(-1),
    );
    nav.subscribe(PageViewHook::new(renderer.clone(), recorder.clone()));

    nav.push(Path::SignUp).unwrap();
    nav.push(Path::SeatingSelection).unwrap();

    assert_eq!(nav.current_path(), Path::SeatingSelection);
    assert_eq!(renderer.titles(), ["Sign Up", "Seating"]);
    assert_eq!(recorder.titles(), ["Sign Up", "Seating"]);
}

#[test]
fn test_suspended_observer() {
    let hook = RecordingHook::<NavigationChange>::new();
    let mut nav = Navigator::new();
    let handle = nav.subscribe_with_meta(hook.clone(), RegistrationMeta::new().suspended());

    nav.push(Path::SignUp).unwrap();
    assert_eq!(hook.count(), 0);

    handle.enable();
    nav.pop().unwrap();
    assert_eq!(hook.count(), 1);
    assert_eq!(hook.events()[0].op, NavigationOp::Pop);
}

#[test]
fn test_changes_are_synchronous_and_ordered() {
    let mut nav = Navigator::new();
    let hook = RecordingHook::<NavigationChange>::new();
    nav.subscribe(hook.clone());

    nav.push(Path::SignUp).unwrap();
    assert_eq!(hook.count(), 1, "observer runs before push returns");
    nav.push(Path::Events).unwrap();
    nav.reset(Path::SeatingSelection);
    nav.pop().unwrap();

    let ops: Vec<_> = hook.events().iter().map(|c| (c.op, c.depth)).collect();
    assert_eq!(
        ops,
        [
            (NavigationOp::Push, 1),
            (NavigationOp::Push, 2),
            (NavigationOp::Reset, 1),
            (NavigationOp::Pop, 0),
        ]
    );
}
