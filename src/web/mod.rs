//! Dashboard page and JSON API served through the segment router.
//!
//! # Routes
//! - `GET /`: HTML page with embedded table and chart data
//! - `GET /api/health`: liveness and data set size
//! - `GET /api/stats/settlement-types`: summary table rows
//! - `GET /api/stats/districts`: population per district
//! - `GET /api/stats/longitude`: population per longitude bucket
//! - `GET /api/cities/:id`: one settlement

pub mod controller;
pub mod page;

pub use controller::DashboardController;
pub use page::{PageData, PageTemplate};
