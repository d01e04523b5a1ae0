//! Route registration, lookup and dispatch.
//!
//! # Responsibilities
//! - Build the segment trie from `(method, path template, handler)` triples
//! - Resolve a request path to a handler plus captured `Params`
//! - Tell "unknown path" (404) apart from "wrong method" (405)
//! - Wrap the resolved handler in the middleware chain and invoke it
//!
//! # Design Decisions
//! - Registration happens once at startup through `&mut self`; the built
//!   router is shared read-only (`Arc<Router>`) without locks
//! - Precedence per segment: literal, then `:param`, then `*catch_all`
//! - No backtracking: once a branch is taken the match commits to it
//! - Last registration for the same method and path wins

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::header::{self, HeaderValue};
use axum::http::StatusCode;
use percent_encoding::percent_decode_str;

use crate::routing::error::{MatchError, RouteError};
use crate::routing::method::Method;
use crate::routing::node::Node;
use crate::routing::params::Params;
use crate::routing::response::ResponseWriter;

/// Inbound request as seen by handlers. The body is fully buffered.
pub type Request = axum::http::Request<Bytes>;

/// A route handler. Writing the response is entirely its job.
pub type Handler = Arc<dyn Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync>;

/// Wraps the next handler in the chain and returns the wrapped handler.
pub type Middleware = Arc<dyn Fn(Handler) -> Handler + Send + Sync>;

/// Boxes a closure as a [`Handler`].
///
/// Also the way to build the inner handler returned by a middleware, since it
/// pins the closure to the handler signature.
pub fn handler_fn<F>(f: F) -> Handler
where
    F: Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Splits a path into its non-empty segments.
///
/// `/a//b/` and `/a/b` produce the same segments; `/` and `""` produce none.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// A successful lookup.
pub struct RouteMatch {
    pub handler: Handler,
    pub params: Params,
}

impl std::fmt::Debug for RouteMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteMatch")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Segment-trie request router with per-method handlers and middleware.
#[derive(Default)]
pub struct Router {
    root: Node,
    middlewares: Vec<Middleware>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `method` and `path`.
    ///
    /// # Panics
    /// On a malformed template or unknown method. Routing tables are built at
    /// startup and a bad one must stop the process; use [`Router::try_handle`]
    /// to get the error instead.
    pub fn handle<F>(&mut self, method: &str, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static,
    {
        if let Err(e) = self.try_handle(method, path, handler) {
            panic!("invalid route {method} {path}: {e}");
        }
        self
    }

    pub fn try_handle<F>(&mut self, method: &str, path: &str, handler: F) -> Result<(), RouteError>
    where
        F: Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static,
    {
        let method: Method = method.parse()?;
        self.insert(method, path, handler_fn(handler))
    }

    pub fn get<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static,
    {
        self.handle(Method::Get.as_str(), path, handler)
    }

    pub fn post<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static,
    {
        self.handle(Method::Post.as_str(), path, handler)
    }

    pub fn put<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static,
    {
        self.handle(Method::Put.as_str(), path, handler)
    }

    pub fn delete<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static,
    {
        self.handle(Method::Delete.as_str(), path, handler)
    }

    pub fn patch<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut ResponseWriter, &Request, &Params) + Send + Sync + 'static,
    {
        self.handle(Method::Patch.as_str(), path, handler)
    }

    /// Appends a middleware. The first one registered is the outermost.
    pub fn use_middleware<M>(&mut self, middleware: M) -> &mut Self
    where
        M: Fn(Handler) -> Handler + Send + Sync + 'static,
    {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    fn insert(&mut self, method: Method, path: &str, handler: Handler) -> Result<(), RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPath(path.to_string()));
        }

        let segments = split_path(path);

        // Validate the whole template before touching the trie.
        let last = segments.len().saturating_sub(1);
        for (i, seg) in segments.iter().enumerate() {
            if let Some(name) = seg.strip_prefix('*') {
                if i != last {
                    return Err(RouteError::CatchAllNotLast(path.to_string()));
                }
                if name.is_empty() {
                    return Err(RouteError::EmptyParamName(path.to_string()));
                }
            } else if seg.strip_prefix(':').is_some_and(str::is_empty) {
                return Err(RouteError::EmptyParamName(path.to_string()));
            }
        }

        let mut node = &mut self.root;
        for seg in segments {
            node = if seg.starts_with('*') {
                node.catch_all_child_or_insert(seg)
            } else if seg.starts_with(':') {
                node.param_child_or_insert(seg)
            } else {
                node.literal_child_or_insert(seg)
            };
        }

        if node.handlers.insert(method, handler).is_some() {
            tracing::debug!(%method, path, "Route handler replaced");
        } else {
            tracing::debug!(%method, path, "Route registered");
        }
        Ok(())
    }

    /// Walks the trie for `path`, collecting parameters on the way.
    ///
    /// Returns the terminal node, or `None` when some segment has nowhere to go.
    fn resolve(&self, path: &str) -> Option<(&Node, Params)> {
        let segments = split_path(path);
        let mut node = &self.root;
        let mut params = Params::new();

        for (i, seg) in segments.iter().enumerate() {
            if let Some(child) = node.children.get(*seg) {
                node = child;
                continue;
            }
            if let Some(child) = node.param_child.as_deref() {
                params.insert(child.param_name(), *seg);
                node = child;
                continue;
            }
            if let Some(child) = node.catch_all_child.as_deref() {
                params.insert(child.param_name(), segments[i..].join("/"));
                return Some((child, params));
            }
            return None;
        }

        // Path ran out before a catch-all was reached: `/api` against
        // `/api/*rest` binds an empty remainder unless `/api` is itself routed.
        if node.handlers.is_empty() {
            if let Some(child) = node.catch_all_child.as_deref() {
                params.insert(child.param_name(), "");
                return Some((child, params));
            }
        }

        Some((node, params))
    }

    /// Resolves `method` and `path` to a handler, or explains why not.
    pub fn find(&self, method: &str, path: &str) -> Result<RouteMatch, MatchError> {
        let (node, params) = self.resolve(path).ok_or(MatchError::NotFound)?;
        if node.handlers.is_empty() {
            return Err(MatchError::NotFound);
        }

        let handler = method
            .parse::<Method>()
            .ok()
            .and_then(|m| node.handlers.get(&m));

        match handler {
            Some(handler) => Ok(RouteMatch {
                handler: Arc::clone(handler),
                params,
            }),
            None => Err(MatchError::MethodNotAllowed {
                allowed: node.allowed_methods(),
            }),
        }
    }

    /// Handler and params for `method` and `path`, if both match.
    pub fn lookup(&self, method: &str, path: &str) -> Option<(Handler, Params)> {
        self.find(method, path).ok().map(|m| (m.handler, m.params))
    }

    /// Whether `path` is routed for any method.
    pub fn path_exists(&self, path: &str) -> bool {
        self.resolve(path)
            .is_some_and(|(node, _)| !node.handlers.is_empty())
    }

    /// Wraps `handler` so the first registered middleware runs outermost.
    fn compose(&self, handler: Handler) -> Handler {
        self.middlewares
            .iter()
            .rev()
            .fold(handler, |next, middleware| middleware(next))
    }

    /// Serves one request into `w`.
    ///
    /// The request path is percent-decoded before matching, so parameters
    /// bind decoded text and an encoded `%2F` separates segments.
    pub fn dispatch(&self, req: &Request, w: &mut ResponseWriter) {
        let decoded = percent_decode_str(req.uri().path()).decode_utf8_lossy();
        let path = decoded.as_ref();

        match self.find(req.method().as_str(), path) {
            Ok(RouteMatch { handler, params }) => {
                let handler = self.compose(handler);
                handler(w, req, &params);
            }
            Err(MatchError::NotFound) => {
                tracing::debug!(method = %req.method(), path, "No route matched");
                w.text(StatusCode::NOT_FOUND, "404 page not found");
            }
            Err(MatchError::MethodNotAllowed { allowed }) => {
                tracing::debug!(method = %req.method(), path, ?allowed, "Method not allowed");
                let allow = allowed
                    .iter()
                    .map(Method::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                if let Ok(value) = HeaderValue::from_str(&allow) {
                    w.set_header(header::ALLOW, value);
                }
                w.text(StatusCode::METHOD_NOT_ALLOWED, "405 method not allowed");
            }
        }
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("root", &self.root)
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}
