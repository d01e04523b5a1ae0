//! Chart and table aggregations over the settlement data set.
//!
//! # Design Decisions
//! - Each aggregation is a strategy behind the `Aggregation` trait with a
//!   concrete output type, so callers never downcast results
//! - Chart x-values are an explicit `Axis` variant (category or number)
//! - Output order is deterministic: ties break on the category name

pub mod aggregation;
pub mod axis;

pub use aggregation::{
    Aggregation, DistrictAggregation, LongitudeAggregation, SettlementTypeAggregation,
    SettlementTypeStats, DEFAULT_LONGITUDE_BUCKETS,
};
pub use axis::{Axis, GraphPoint};
