//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     (method, "/users/:id", handler)
//!     → split into segments
//!     → walk/extend segment trie (literal | :param | *catch_all)
//!     → store handler on terminal node under its method
//!
//! Incoming request (method, path):
//!     → router.rs (trie walk, literal > param > catch-all)
//!     → Found(handler, params) | NotFound (404) | MethodNotAllowed (405)
//!     → middleware chain wraps handler (first registered = outermost)
//!     → handler writes into ResponseWriter
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex, no backtracking: one pass over the segments
//! - Deterministic: same input always matches same route

pub mod error;
pub mod method;
pub mod middleware;
mod node;
pub mod params;
pub mod response;
pub mod router;

pub use error::{MatchError, RouteError};
pub use method::Method;
pub use params::Params;
pub use response::ResponseWriter;
pub use router::{handler_fn, split_path, Handler, Middleware, Request, RouteMatch, Router};
