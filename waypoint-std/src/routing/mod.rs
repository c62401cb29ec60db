//! # Routing Implementations
//!
//! | Router | Use Case |
//! |--------|----------|
//! | [`MatchitRouter`] | URL path patterns with `{param}` and `{*catch_all}` segments |

pub mod matchit;

pub use self::matchit::{MatchitRouter, MatchitRouterBuilder};
