//! Country dataset loading.
//!
//! Two input encodings exist for coordinates: a signed `latlng` pair, and
//! `latitude`/`longitude` strings carrying a magnitude and a cardinal letter
//! (`"33 N"`, `"65.5E"`). Both are normalised to [`GeoCoord`] here, before any
//! geometry code sees them. Bad entries are collected, not fatal.

use crate::error::{DatasetError, InvalidRecordError, InvalidRecordKind};
use crate::geo::GeoCoord;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One country, normalised. Immutable after load; the marker that belongs to
/// it is tracked by [`crate::marker::MarkerRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    pub name: String,
    pub population: u64,
    pub coordinates: GeoCoord,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<GeoRecord>,
    pub rejected: Vec<InvalidRecordError>,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: String,
    population: u64,
    #[serde(flatten)]
    coordinates: RawCoordinates,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCoordinates {
    Signed { latlng: [f64; 2] },
    Cardinal { latitude: String, longitude: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Latitude,
    Longitude,
}

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|err| DatasetError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    parse_dataset(&content)
}

/// Parse a JSON array of countries. Only a document that is not an array
/// fails as a whole; individual bad entries end up in `rejected`.
pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    let document: Value =
        serde_json::from_str(json).map_err(|err| DatasetError::Parse(err.to_string()))?;
    let Value::Array(entries) = document else {
        return Err(DatasetError::NotAnArray);
    };

    let mut dataset = Dataset::default();
    for (index, entry) in entries.iter().enumerate() {
        match parse_record(index, entry) {
            Ok(record) => dataset.records.push(record),
            Err(err) => {
                log::warn!("skipping {err}");
                dataset.rejected.push(err);
            }
        }
    }

    log::debug!(
        "dataset: {} records loaded, {} rejected",
        dataset.records.len(),
        dataset.rejected.len()
    );
    Ok(dataset)
}

pub fn parse_record(index: usize, entry: &Value) -> Result<GeoRecord, InvalidRecordError> {
    let name_hint = entry.get("name").and_then(Value::as_str).map(str::to_string);
    let reject = |kind| InvalidRecordError {
        index,
        name: name_hint.clone(),
        kind,
    };

    let raw = RawCountry::deserialize(entry)
        .map_err(|err| reject(InvalidRecordKind::Malformed(err.to_string())))?;

    let name = raw.name.trim();
    if name.is_empty() {
        return Err(reject(InvalidRecordKind::EmptyName));
    }

    let (latitude, longitude) = match &raw.coordinates {
        RawCoordinates::Signed { latlng } => (latlng[0], latlng[1]),
        RawCoordinates::Cardinal {
            latitude,
            longitude,
        } => (
            parse_cardinal(latitude, Axis::Latitude).map_err(reject)?,
            parse_cardinal(longitude, Axis::Longitude).map_err(reject)?,
        ),
    };

    let coordinates = validate_coordinates(latitude, longitude).map_err(reject)?;

    Ok(GeoRecord {
        name: name.to_string(),
        population: raw.population,
        coordinates,
    })
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<GeoCoord, InvalidRecordKind> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(InvalidRecordKind::NonFiniteCoordinate);
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(InvalidRecordKind::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(InvalidRecordKind::LongitudeOutOfRange(longitude));
    }
    Ok(GeoCoord::new(latitude, longitude))
}

/// `"33 N"` -> 33.0, `"65.5W"` -> -65.5. The letter must match the axis.
fn parse_cardinal(text: &str, axis: Axis) -> Result<f64, InvalidRecordKind> {
    let bad = || InvalidRecordKind::BadCardinal(text.to_string());

    let trimmed = text.trim();
    let letter = trimmed.chars().last().ok_or_else(bad)?;
    let sign = match (axis, letter.to_ascii_uppercase()) {
        (Axis::Latitude, 'N') | (Axis::Longitude, 'E') => 1.0,
        (Axis::Latitude, 'S') | (Axis::Longitude, 'W') => -1.0,
        _ => return Err(bad()),
    };

    let magnitude: f64 = trimmed[..trimmed.len() - letter.len_utf8()]
        .trim()
        .parse()
        .map_err(|_| bad())?;
    if magnitude.is_sign_negative() {
        return Err(bad());
    }

    Ok(sign * magnitude)
}
