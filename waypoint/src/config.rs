//! Navigator configuration.

/// What [`Navigator::pop`](crate::Navigator::pop) does on an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyPopPolicy {
    /// Return `Ok(None)` and change nothing.
    #[default]
    Ignore,
    /// Return [`NavigationError::EmptyStack`](crate::NavigationError::EmptyStack).
    Error,
}

/// Limits and policies for a [`Navigator`](crate::Navigator).
///
/// # Example
///
/// ```rust,ignore
/// let config = NavigatorConfig::default()
///     .with_max_depth(16)
///     .with_empty_pop(EmptyPopPolicy::Error);
/// let navigator = Navigator::with_config(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigatorConfig {
    /// Maximum stack depth; `None` is unbounded.
    pub max_depth: Option<usize>,
    /// Behaviour of `pop` on an empty stack.
    pub empty_pop: EmptyPopPolicy,
}

impl NavigatorConfig {
    /// Cap the stack at `depth` paths.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Remove any depth cap.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Set the empty-pop policy.
    pub fn with_empty_pop(mut self, policy: EmptyPopPolicy) -> Self {
        self.empty_pop = policy;
        self
    }
}
