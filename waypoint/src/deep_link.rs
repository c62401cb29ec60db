//! Deep-link resolution: URL path → [`Path`].

use percent_encoding::percent_decode_str;
use url::Url;
use waypoint_core::{
    BoxError, DeepLinkError, EventStore, Listener, Params, Path, RouteResult, Router,
    RouterBuildError, RouterBuilder,
};
use waypoint_std::routing::{MatchitRouter, MatchitRouterBuilder};

/// What a matched route pattern resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRoute {
    /// `EventDetails` for the event named by the `{id}` parameter.
    EventDetails,
    /// `SignUp`.
    SignUp,
}

impl LinkRoute {
    /// The path parameter a pattern for this route must capture.
    pub fn required_param(self) -> Option<&'static str> {
        match self {
            LinkRoute::EventDetails => Some("id"),
            LinkRoute::SignUp => None,
        }
    }
}

/// The route table used by [`DeepLinkParser::new`].
pub const DEFAULT_ROUTES: &[(&str, LinkRoute)] = &[
    ("/events/{id}", LinkRoute::EventDetails),
    ("/signup", LinkRoute::SignUp),
];

/// Resolves deep links against a route table, looking events up in `S`.
///
/// Only the URL path takes part in matching. Matching is whole-path; one
/// trailing slash is ignored. Captured parameters are percent-decoded.
pub struct DeepLinkParser<S> {
    store: S,
    routes: MatchitRouter<LinkRoute>,
}

impl<S: EventStore> DeepLinkParser<S> {
    /// Create a parser over [`DEFAULT_ROUTES`].
    pub fn new(store: S) -> Result<Self, RouterBuildError> {
        Self::with_routes(store, DEFAULT_ROUTES.iter().copied())
    }

    /// Create a parser over a custom route table.
    ///
    /// Rejects conflicting patterns, and `EventDetails` patterns that capture
    /// no `id` (either `{id}` or `{*id}`).
    pub fn with_routes<'a, I>(store: S, routes: I) -> Result<Self, RouterBuildError>
    where
        I: IntoIterator<Item = (&'a str, LinkRoute)>,
    {
        let mut builder = MatchitRouterBuilder::default();
        for (pattern, route) in routes {
            if let Some(param) = route.required_param() {
                if !captures(pattern).any(|name| name == param) {
                    return Err(RouterBuildError::MissingParam {
                        pattern: pattern.to_string(),
                        param,
                    });
                }
            }
            builder.insert(pattern.to_string(), route)?;
        }
        Ok(Self {
            store,
            routes: builder.build()?,
        })
    }

    /// The store consulted for event lookups.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The route patterns, in table order.
    pub fn patterns(&self) -> &[String] {
        self.routes.patterns()
    }

    /// Resolve the path of `url`. Query and fragment are ignored.
    pub fn parse(&self, url: &Url) -> Result<Path, DeepLinkError> {
        self.parse_path(url.path())
    }

    /// Parse `input` as an absolute URL, then resolve it.
    pub fn parse_str(&self, input: &str) -> Result<Path, DeepLinkError> {
        let url = Url::parse(input)?;
        self.parse(&url)
    }

    /// Resolve a raw, percent-encoded URL path such as `/events/42`.
    pub fn parse_path(&self, path: &str) -> Result<Path, DeepLinkError> {
        match self.routes.route(trim_trailing_slash(path)) {
            RouteResult::Matched(route, params) => self.build(*route, &params, path),
            RouteResult::NotFound => Err(DeepLinkError::Mismatch(path.to_string())),
        }
    }

    /// Like [`parse`](Self::parse), but discards the reason for a failure.
    pub fn resolve(&self, url: &Url) -> Option<Path> {
        match self.parse(url) {
            Ok(path) => Some(path),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(url = %url, error = %err, "deep link rejected");
                #[cfg(not(feature = "tracing"))]
                let _ = err;
                None
            }
        }
    }

    fn build(&self, route: LinkRoute, params: &Params, raw: &str) -> Result<Path, DeepLinkError> {
        match route {
            LinkRoute::SignUp => Ok(Path::SignUp),
            LinkRoute::EventDetails => {
                let id = params
                    .get("id")
                    .and_then(decode_param)
                    .ok_or_else(|| DeepLinkError::Mismatch(raw.to_string()))?;
                Ok(Path::EventDetails(self.store.lookup(&id)?))
            }
        }
    }
}

impl<S: EventStore + 'static> Listener<Url> for DeepLinkParser<S> {
    type Output = Path;

    fn listen(&self, url: &Url) -> Result<Option<Path>, BoxError> {
        Ok(self.resolve(url))
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for DeepLinkParser<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLinkParser")
            .field("store", &self.store)
            .field("routes", &self.routes.patterns())
            .finish()
    }
}

/// Names captured by a route pattern, catch-alls included. `{{` and `}}` are
/// literal braces.
fn captures(pattern: &str) -> impl Iterator<Item = &str> {
    let mut rest = pattern;
    std::iter::from_fn(move || {
        loop {
            let start = rest.find('{')?;
            let after = &rest[start + 1..];
            if let Some(escaped) = after.strip_prefix('{') {
                rest = escaped;
                continue;
            }
            let end = after.find('}')?;
            rest = &after[end + 1..];
            return Some(after[..end].trim_start_matches('*'));
        }
    })
}

fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Percent-decode a captured segment; empty or non-UTF-8 results are rejected.
fn decode_param(raw: &str) -> Option<String> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    if decoded.is_empty() {
        None
    } else {
        Some(decoded.into_owned())
    }
}
