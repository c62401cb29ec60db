//! Error types for Waypoint.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`WaypointError`] - Top-level error type for all Waypoint operations
//! - [`NavigationError`] - Errors from navigation stack mutations
//! - [`DeepLinkError`] - Errors while resolving a deep link
//! - [`LookupError`] - Errors from an [`EventStore`](crate::EventStore)
//! - [`RouterBuildError`] - Errors while building a route table

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Waypoint operations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// A navigation stack operation failed.
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// A deep link could not be resolved.
    #[error("deep link error: {0}")]
    DeepLink(#[from] DeepLinkError),

    /// An event lookup failed.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// A route table could not be built.
    #[error("router error: {0}")]
    Router(#[from] RouterBuildError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur when mutating the navigation stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// `pop` was called on an empty stack under a strict policy.
    #[error("cannot pop an empty navigation stack")]
    EmptyStack,

    /// `push` would exceed the configured depth limit.
    #[error("navigation stack is full (limit {limit})")]
    StackOverflow {
        /// The configured maximum depth.
        limit: usize,
    },
}

/// Errors that can occur while resolving a deep link into a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeepLinkError {
    /// The input was not a valid absolute URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL path does not match any known route.
    #[error("no route matches path: {0}")]
    Mismatch(String),

    /// The route matched but the referenced event could not be found.
    #[error("event lookup failed: {0}")]
    LookupMiss(#[from] LookupError),
}

/// Errors that can occur when looking up an event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Event ids must be non-empty.
    #[error("event id must not be empty")]
    EmptyId,

    /// No event exists for the given id.
    #[error("no event found for id: {0}")]
    NotFound(String),
}

/// Errors that can occur while building a router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterBuildError {
    /// The pattern is a duplicate of, or conflicts with, an existing route.
    #[error("route conflict: {0}")]
    Conflict(String),

    /// The pattern lacks a parameter its target requires.
    #[error("route `{pattern}` is missing required parameter `{param}`")]
    MissingParam {
        /// The offending pattern.
        pattern: String,
        /// The parameter name that was expected.
        param: &'static str,
    },
}

impl From<BoxError> for WaypointError {
    fn from(err: BoxError) -> Self {
        WaypointError::Custom(err)
    }
}
