//! Settlement data set.
//!
//! # Data Flow
//! ```text
//! regional CSV export
//!     → loader.rs (csv parse, column mapping, row filtering)
//!     → CityRepo (owned Vec<City>, shared via Arc)
//!     → stats / web controllers
//! ```

pub mod loader;
pub mod repo;

use serde::Serialize;
use thiserror::Error;

pub use loader::{load_cities, parse_cities};
pub use repo::CityRepo;

/// One settlement row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub id: u32,
    pub name: String,
    /// Settlement type (city, village, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub district: String,
    pub population: i64,
    pub children: f64,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file is empty or has no data rows")]
    Empty,
}
