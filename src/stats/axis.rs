//! Chart axis values.

use serde::Serialize;

/// An x-axis value: a category label or a numeric position.
///
/// Serialized untagged, so JSON consumers see a plain string or number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Axis {
    Categorical(String),
    Numeric(f64),
}

impl Axis {
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Axis::Categorical(label) => Some(label),
            Axis::Numeric(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Axis::Numeric(value) => Some(*value),
            Axis::Categorical(_) => None,
        }
    }
}

/// One chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPoint {
    pub x: Axis,
    pub y: i64,
}
