//! Matchit-based router implementation.
//!
//! Provides parameter matching for URL paths (e.g. `/events/{id}`). Matching
//! is whole-path: extra or missing segments never match.

use ::matchit::Router as InnerRouter;
use waypoint_core::{Params, RouteResult, Router, RouterBuildError, RouterBuilder};

/// A router based on `matchit`.
pub struct MatchitRouter<V> {
    router: InnerRouter<V>,
    patterns: Vec<String>,
}

impl<V> MatchitRouter<V> {
    /// The patterns this router was built from, in insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl<V: Send + Sync + 'static> Router<str, V> for MatchitRouter<V> {
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.router.at(key) {
            Ok(matched) => RouteResult::Matched(matched.value, matched.params.iter().collect()),
            Err(_) => RouteResult::NotFound,
        }
    }
}

/// Builder for [`MatchitRouter`].
pub struct MatchitRouterBuilder<V> {
    router: InnerRouter<V>,
    patterns: Vec<String>,
}

impl<V> Default for MatchitRouterBuilder<V> {
    fn default() -> Self {
        Self {
            router: InnerRouter::new(),
            patterns: Vec::new(),
        }
    }
}

impl<V: Send + Sync + 'static> RouterBuilder<String, V> for MatchitRouterBuilder<V> {
    type Router = MatchitRouter<V>;

    fn insert(&mut self, key: String, value: V) -> Result<(), RouterBuildError> {
        // matchit errors if the route exists, conflicts, or is malformed
        self.router
            .insert(key.clone(), value)
            .map_err(|e| RouterBuildError::Conflict(format!("{}: {}", key, e)))?;
        self.patterns.push(key);
        Ok(())
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(MatchitRouter {
            router: self.router,
            patterns: self.patterns,
        })
    }
}
