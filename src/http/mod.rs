//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace, timeout)
//!     → /static/* → tower-http ServeDir
//!     → anything else → buffer body → routing::Router::dispatch
//!     → ResponseWriter → axum Response → client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
