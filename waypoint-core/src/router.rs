//! Routing abstraction layer.
//!
//! This module provides a trait-based routing abstraction so the deep-link
//! parser does not depend on a particular pattern-matching backend.

use crate::error::RouterBuildError;

/// Parameters captured while matching a route, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a captured parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Get the raw (still percent-encoded) value captured for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched, contains the value and captured parameters.
    Matched(&'a V, Params),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(..))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v, _) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// A router that maps keys to values.
pub trait Router<K: ?Sized, V>: Send + Sync + 'static {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<'_, V>;

    /// Check if a key matches any route.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}

/// Builder for constructing routers.
pub trait RouterBuilder<K, V>: Default + Send {
    /// The router type this builder produces.
    type Router: Router<str, V>;

    /// Insert a pattern into the router.
    ///
    /// Returns an error if the pattern conflicts with an existing one.
    fn insert(&mut self, key: K, value: V) -> Result<(), RouterBuildError>;

    /// Build the router, consuming the builder.
    fn build(self) -> Result<Self::Router, RouterBuildError>;
}
