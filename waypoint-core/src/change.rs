//! Notification payload for navigation observers.

use crate::{message::Message, page::PageDescriptor, path::Path};

/// Which operation produced a [`NavigationChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationOp {
    /// A path was pushed.
    Push,
    /// The top path was popped.
    Pop,
    /// The stack was replaced by a single path.
    Reset,
    /// The current state was re-announced without mutation.
    Refresh,
}

/// The state of the navigation stack right after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationChange {
    /// The operation that was applied.
    pub op: NavigationOp,
    /// The new top of the stack; `None` when the stack is empty.
    pub top: Option<Path>,
    /// The new stack depth.
    pub depth: usize,
}

impl Message for NavigationChange {}

impl NavigationChange {
    /// The path that is now current, falling back to [`Path::Events`].
    pub fn current_path(&self) -> Path {
        self.top.clone().unwrap_or_default()
    }

    /// Derive the page that is now current.
    pub fn current_page(&self) -> PageDescriptor {
        match &self.top {
            Some(path) => path.page(),
            None => Path::default().page(),
        }
    }
}
