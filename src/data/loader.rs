//! CSV ingestion for the settlements export.
//!
//! Column layout of the export (0-based): 1 region, 3 settlement name,
//! 4 settlement type, 5 population, 6 children, 10 latitude, 11 longitude.
//! Rows shorter than 14 columns are skipped, as are rows without a positive
//! population and rows whose numbers do not parse to finite values.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::data::{City, DataError};

const MIN_COLUMNS: usize = 14;

const COL_REGION: usize = 1;
const COL_NAME: usize = 3;
const COL_TYPE: usize = 4;
const COL_POPULATION: usize = 5;
const COL_CHILDREN: usize = 6;
const COL_LATITUDE: usize = 10;
const COL_LONGITUDE: usize = 11;

/// Load all usable rows from the CSV file at `path`.
pub fn load_cities(path: &Path) -> Result<Vec<City>, DataError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let cities = parse_cities(file)?;
    tracing::info!(path = ?path, count = cities.len(), "Settlement data loaded");
    Ok(cities)
}

/// Parse CSV content; the first row is a header.
///
/// Malformed rows are logged and skipped, never fatal.
pub fn parse_cities<R: io::Read>(reader: R) -> Result<Vec<City>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut cities = Vec::new();
    let mut rows = 0usize;

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        rows += 1;
        // 1-based line number, header is line 1.
        let line = i + 2;

        if record.len() < MIN_COLUMNS {
            tracing::warn!(line, columns = record.len(), "Skipping row: insufficient columns");
            continue;
        }

        match parse_row(&record) {
            Ok(Some(mut city)) => {
                city.id = cities.len() as u32 + 1;
                cities.push(city);
            }
            Ok(None) => tracing::debug!(line, "Skipping row: no population"),
            Err(field) => tracing::warn!(line, field, "Skipping row: unparsable value"),
        }
    }

    if rows == 0 {
        return Err(DataError::Empty);
    }
    Ok(cities)
}

/// `Ok(None)` for unpopulated settlements, `Err(field)` naming a bad column.
fn parse_row(record: &StringRecord) -> Result<Option<City>, &'static str> {
    let field = |idx: usize| record.get(idx).unwrap_or_default().trim();

    let population: i64 = field(COL_POPULATION).parse().map_err(|_| "population")?;
    if population < 1 {
        return Ok(None);
    }

    let children = match field(COL_CHILDREN) {
        "" => 0.0,
        raw => parse_finite(raw, "children")?,
    };
    let latitude = parse_finite(field(COL_LATITUDE), "latitude")?;
    let longitude = parse_finite(field(COL_LONGITUDE), "longitude")?;

    Ok(Some(City {
        id: 0,
        name: field(COL_NAME).to_string(),
        kind: field(COL_TYPE).to_string(),
        district: field(COL_REGION).to_string(),
        population,
        children,
        latitude,
        longitude,
    }))
}

/// `f64::from_str` accepts `NaN` and `inf`; neither is a usable measurement.
fn parse_finite(raw: &str, name: &'static str) -> Result<f64, &'static str> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(name),
    }
}
