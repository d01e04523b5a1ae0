//! Settlements dashboard backend library.
//!
//! A segment-trie HTTP router (`routing`) serving aggregated statistics over
//! a regional settlements data set loaded from CSV.

pub mod config;
pub mod data;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod stats;
pub mod web;

pub use config::AppConfig;
pub use http::HttpServer;
pub use routing::Router;
