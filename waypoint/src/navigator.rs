//! The navigation stack and its observers.

use crate::config::{EmptyPopPolicy, NavigatorConfig};
use waypoint_core::{Hook, NavigationChange, NavigationError, NavigationOp, PageDescriptor, Path};
use waypoint_std::registry::{EnabledHandle, RegistrationMeta, Registry};

/// Owns the ordered stack of [`Path`]s and tells observers about every change.
///
/// The last path is the current one. An empty stack shows [`Path::Events`].
/// Observers run synchronously, in priority order, before each mutating call
/// returns. A failing observer is logged and the rest still run.
pub struct Navigator {
    paths: Vec<Path>,
    config: NavigatorConfig,
    observers: Registry<NavigationChange>,
}

impl Navigator {
    /// Create an unbounded navigator with an empty stack.
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::default())
    }

    /// Create a navigator with the given limits and policies.
    pub fn with_config(config: NavigatorConfig) -> Self {
        Self {
            paths: Vec::new(),
            config,
            observers: Registry::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Register an observer with default metadata.
    pub fn subscribe<H: Hook<NavigationChange>>(&mut self, hook: H) -> EnabledHandle {
        self.observers.register(hook)
    }

    /// Register an observer with explicit priority or initial state.
    pub fn subscribe_with_meta<H: Hook<NavigationChange>>(
        &mut self,
        hook: H,
        meta: RegistrationMeta,
    ) -> EnabledHandle {
        self.observers.register_with_meta(hook, meta)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Append `path` to the stack.
    ///
    /// Fails with [`NavigationError::StackOverflow`] if a depth cap is
    /// configured and already reached; the stack is left unchanged.
    pub fn push(&mut self, path: Path) -> Result<(), NavigationError> {
        if let Some(limit) = self.config.max_depth {
            if self.paths.len() >= limit {
                return Err(NavigationError::StackOverflow { limit });
            }
        }
        self.paths.push(path);
        self.notify(NavigationOp::Push);
        Ok(())
    }

    /// Remove and return the top of the stack.
    ///
    /// On an empty stack the result depends on
    /// [`NavigatorConfig::empty_pop`]; observers are not notified either way.
    pub fn pop(&mut self) -> Result<Option<Path>, NavigationError> {
        let Some(path) = self.paths.pop() else {
            return match self.config.empty_pop {
                EmptyPopPolicy::Ignore => Ok(None),
                EmptyPopPolicy::Error => Err(NavigationError::EmptyStack),
            };
        };
        self.notify(NavigationOp::Pop);
        Ok(Some(path))
    }

    /// Replace the whole stack with `path`.
    pub fn reset(&mut self, path: Path) {
        self.paths.clear();
        self.paths.push(path);
        self.notify(NavigationOp::Reset);
    }

    /// Notify observers of the current state without changing it.
    pub fn refresh(&mut self) {
        self.notify(NavigationOp::Refresh);
    }

    /// The page for the top of the stack, derived on every call.
    pub fn current_page(&self) -> PageDescriptor {
        match self.paths.last() {
            Some(path) => path.page(),
            None => Path::default().page(),
        }
    }

    /// The top of the stack, or [`Path::Events`] when empty.
    pub fn current_path(&self) -> Path {
        self.paths.last().cloned().unwrap_or_default()
    }

    /// The stack, oldest first.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Number of paths on the stack.
    pub fn depth(&self) -> usize {
        self.paths.len()
    }

    /// Check if nothing has been navigated to.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether a back action would remove anything.
    pub fn can_pop(&self) -> bool {
        !self.paths.is_empty()
    }

    fn notify(&self, op: NavigationOp) {
        let change = NavigationChange {
            op,
            top: self.paths.last().cloned(),
            depth: self.paths.len(),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?op, depth = change.depth, "navigation");

        let dispatched = self.observers.dispatch(&change);
        for err in dispatched.errors {
            #[cfg(feature = "tracing")]
            tracing::warn!(?op, error = %err, "navigation observer failed");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("paths", &self.paths)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_std::testing::RecordingHook;

    #[test]
    fn test_push_pop_order() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current_page().title(), "Events");

        nav.push(Path::SignUp).unwrap();
        nav.push(Path::Events).unwrap();
        assert_eq!(nav.current_page().title(), "Events");

        assert_eq!(nav.pop().unwrap(), Some(Path::Events));
        assert_eq!(nav.current_page().title(), "Sign Up");

        assert_eq!(nav.pop().unwrap(), Some(Path::SignUp));
        assert_eq!(nav.pop().unwrap(), None);
        assert_eq!(nav.current_page().title(), "Events");
    }

    #[test]
    fn test_reset_truncates() {
        let mut nav = Navigator::new();
        nav.push(Path::SignUp).unwrap();
        nav.push(Path::Events).unwrap();
        nav.reset(Path::SeatingSelection);
        assert_eq!(nav.paths(), [Path::SeatingSelection]);
    }

    #[test]
    fn test_depth_cap() {
        let mut nav = Navigator::with_config(NavigatorConfig::default().with_max_depth(1));
        nav.push(Path::SignUp).unwrap();
        assert_eq!(
            nav.push(Path::Events),
            Err(NavigationError::StackOverflow { limit: 1 })
        );
        assert_eq!(nav.depth(), 1);
        // reset never grows the stack past one
        nav.reset(Path::Events);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_strict_empty_pop() {
        let mut nav =
            Navigator::with_config(NavigatorConfig::default().with_empty_pop(EmptyPopPolicy::Error));
        assert_eq!(nav.pop(), Err(NavigationError::EmptyStack));
    }

    #[test]
    fn test_observers_see_post_state() {
        let mut nav = Navigator::new();
        let hook = RecordingHook::<NavigationChange>::new();
        nav.subscribe(hook.clone());

        nav.push(Path::SignUp).unwrap();
        nav.pop().unwrap();
        nav.pop().unwrap();
        nav.refresh();

        let changes = hook.events();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].op, NavigationOp::Push);
        assert_eq!(changes[0].top, Some(Path::SignUp));
        assert_eq!(changes[1].op, NavigationOp::Pop);
        assert_eq!(changes[1].depth, 0);
        assert_eq!(changes[2].op, NavigationOp::Refresh);
    }

    #[test]
    fn test_current_page_does_not_notify() {
        let mut nav = Navigator::new();
        let hook = RecordingHook::<NavigationChange>::new();
        nav.subscribe(hook.clone());

        let _ = nav.current_page();
        let _ = nav.current_path();
        assert_eq!(hook.count(), 0);
    }
}
