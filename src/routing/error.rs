//! Routing error types.

use thiserror::Error;

use crate::routing::method::Method;

/// Malformed route registration. Raised at startup, never per request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("path must start with '/': {0:?}")]
    InvalidPath(String),

    #[error("catch-all must be the last segment: {0:?}")]
    CatchAllNotLast(String),

    #[error("placeholder without a name in {0:?}")]
    EmptyParamName(String),

    #[error("unknown HTTP method: {0:?}")]
    UnknownMethod(String),
}

/// Why a request did not resolve to a handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No registered route covers the path for any method.
    #[error("no route for path")]
    NotFound,

    /// The path is routed, but not for the requested method.
    #[error("method not allowed (allowed: {allowed:?})")]
    MethodNotAllowed { allowed: Vec<Method> },
}
