//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Load data + template → Register routes → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C / SIGTERM → Stop accepting → Drain connections → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then data, then routes, then listener
//! - Route registration finishes before the router is shared

pub mod shutdown;
pub mod startup;

pub use shutdown::shutdown_signal;
pub use startup::{build_router, StartupError};
