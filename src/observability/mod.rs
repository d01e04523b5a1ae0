//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!
//! Request path:
//!     tower-http TraceLayer (span per request, x-request-id)
//!     → routing::middleware::request_logger (method, path, status, latency)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows from the HTTP layer into router logs

pub mod logging;

pub use logging::init_logging;
