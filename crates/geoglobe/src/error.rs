use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum InvalidRecordKind {
    /// The entry does not have the expected shape (missing field, wrong type,
    /// negative population, unknown coordinate encoding).
    Malformed(String),
    EmptyName,
    NonFiniteCoordinate,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
    BadCardinal(String),
}

impl fmt::Display for InvalidRecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidRecordKind::Malformed(msg) => write!(f, "malformed entry: {msg}"),
            InvalidRecordKind::EmptyName => write!(f, "empty name"),
            InvalidRecordKind::NonFiniteCoordinate => write!(f, "coordinate is not finite"),
            InvalidRecordKind::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} outside [-90, 90]")
            }
            InvalidRecordKind::LongitudeOutOfRange(lon) => {
                write!(f, "longitude {lon} outside [-180, 180]")
            }
            InvalidRecordKind::BadCardinal(text) => {
                write!(f, "cannot read cardinal coordinate {text:?}")
            }
        }
    }
}

/// A single country entry that was rejected while loading the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRecordError {
    pub index: usize,
    pub name: Option<String>,
    pub kind: InvalidRecordKind,
}

impl fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "record #{} ({name}): {}", self.index, self.kind),
            None => write!(f, "record #{}: {}", self.index, self.kind),
        }
    }
}

impl std::error::Error for InvalidRecordError {}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    Io { path: String, message: String },
    Parse(String),
    NotAnArray,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, message } => {
                write!(f, "cannot read dataset {path}: {message}")
            }
            DatasetError::Parse(msg) => write!(f, "dataset is not valid JSON: {msg}"),
            DatasetError::NotAnArray => write!(f, "dataset must be a JSON array of countries"),
        }
    }
}

impl std::error::Error for DatasetError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => write!(f, "cannot read config {path}: {message}"),
            ConfigError::Parse(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerError {
    /// The record already has a marker.
    AlreadyAssigned { record: usize },
    /// The handle is already registered for another record.
    HandleInUse { record: usize },
    UnknownRecord { record: usize },
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerError::AlreadyAssigned { record } => {
                write!(f, "record #{record} already has a marker")
            }
            MarkerError::HandleInUse { record } => {
                write!(f, "marker handle is already used by record #{record}")
            }
            MarkerError::UnknownRecord { record } => write!(f, "no record #{record}"),
        }
    }
}

impl std::error::Error for MarkerError {}
