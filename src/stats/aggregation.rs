//! Aggregation strategies.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::data::City;
use crate::stats::axis::{Axis, GraphPoint};

pub const DEFAULT_LONGITUDE_BUCKETS: usize = 100;

/// A way of summarising the settlement list.
pub trait Aggregation {
    type Output: Serialize;

    fn aggregate(&self, cities: &[City]) -> Self::Output;

    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Per settlement type figures for the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementTypeStats {
    #[serde(rename = "type")]
    pub kind: String,
    pub avg_population: f64,
    #[serde(rename = "avgChildrens")]
    pub avg_children: f64,
    pub min_population: i64,
    pub max_population: i64,
}

/// Groups by settlement type; sorted by average population, largest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementTypeAggregation;

#[derive(Default)]
struct TypeAcc {
    count: usize,
    population: i64,
    children: f64,
    min: i64,
    max: i64,
}

impl Aggregation for SettlementTypeAggregation {
    type Output = Vec<SettlementTypeStats>;

    fn aggregate(&self, cities: &[City]) -> Self::Output {
        let mut groups: HashMap<&str, TypeAcc> = HashMap::new();

        for city in cities {
            let acc = groups.entry(city.kind.as_str()).or_default();
            if acc.count == 0 {
                acc.min = city.population;
                acc.max = city.population;
            } else {
                acc.min = acc.min.min(city.population);
                acc.max = acc.max.max(city.population);
            }
            acc.count += 1;
            acc.population += city.population;
            acc.children += city.children;
        }

        let mut result: Vec<SettlementTypeStats> = groups
            .into_iter()
            .map(|(kind, acc)| SettlementTypeStats {
                kind: kind.to_string(),
                avg_population: acc.population as f64 / acc.count as f64,
                avg_children: acc.children / acc.count as f64,
                min_population: acc.min,
                max_population: acc.max,
            })
            .collect();

        result.sort_by(|a, b| {
            b.avg_population
                .partial_cmp(&a.avg_population)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.kind.cmp(&b.kind))
        });
        result
    }

    fn name(&self) -> &'static str {
        "settlement_type_aggregation"
    }
}

/// Total population per district; largest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistrictAggregation;

impl Aggregation for DistrictAggregation {
    type Output = Vec<GraphPoint>;

    fn aggregate(&self, cities: &[City]) -> Self::Output {
        let mut totals: HashMap<&str, i64> = HashMap::new();
        for city in cities {
            *totals.entry(city.district.as_str()).or_default() += city.population;
        }

        let mut totals: Vec<(&str, i64)> = totals.into_iter().collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        totals
            .into_iter()
            .map(|(district, population)| GraphPoint {
                x: Axis::Categorical(district.to_string()),
                y: population,
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "district_aggregation"
    }
}

/// Population summed over equal-width longitude buckets, west to east.
///
/// Each point's x is the bucket's starting longitude. The easternmost
/// settlement belongs to the last bucket.
#[derive(Debug, Clone, Copy)]
pub struct LongitudeAggregation {
    buckets: usize,
}

impl LongitudeAggregation {
    /// A zero bucket count falls back to [`DEFAULT_LONGITUDE_BUCKETS`].
    pub fn new(buckets: usize) -> Self {
        let buckets = if buckets == 0 {
            DEFAULT_LONGITUDE_BUCKETS
        } else {
            buckets
        };
        Self { buckets }
    }

    pub fn buckets(&self) -> usize {
        self.buckets
    }
}

impl Default for LongitudeAggregation {
    fn default() -> Self {
        Self::new(DEFAULT_LONGITUDE_BUCKETS)
    }
}

impl Aggregation for LongitudeAggregation {
    type Output = Vec<GraphPoint>;

    fn aggregate(&self, cities: &[City]) -> Self::Output {
        let Some(first) = cities.first() else {
            return Vec::new();
        };

        let (min, max) = cities.iter().fold((first.longitude, first.longitude), |(lo, hi), c| {
            (lo.min(c.longitude), hi.max(c.longitude))
        });
        let step = (max - min) / self.buckets as f64;

        let mut sums = vec![0i64; self.buckets];
        for city in cities {
            let index = if step > 0.0 {
                (((city.longitude - min) / step).floor() as usize).min(self.buckets - 1)
            } else {
                0
            };
            sums[index] += city.population;
        }

        sums.into_iter()
            .enumerate()
            .map(|(i, population)| GraphPoint {
                x: Axis::Numeric(min + i as f64 * step),
                y: population,
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "longitude_aggregation"
    }
}
