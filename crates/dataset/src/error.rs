//! Defines the error types returned while loading race records.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

/// The result type that uses [DatasetError] as the error type.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// The error type for loading a dataset of race records.
///
/// Any error aborts the whole load: a dataset is either fully normalized
/// or not produced at all.
#[derive(Debug)]
pub enum DatasetError {
    /// A [`std::io::Error`] encountered while reading the JSON document.
    Io(io::Error),

    /// A [`serde_json::Error`] encountered while decoding the JSON document.
    Json(serde_json::Error),

    /// A record that could not be normalized.
    Record {
        /// The position of the record in the source array.
        index: usize,
        /// The reason the record was rejected.
        source: RecordError,
    },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dataset_error = "dataset error:";

        match self {
            DatasetError::Io(error) => write!(f, "{dataset_error} I/O error: {error}"),
            DatasetError::Json(error) => {
                write!(f, "{dataset_error} JSON deserialization error: {error}")
            }
            DatasetError::Record { index, source } => {
                write!(f, "{dataset_error} invalid record at index {index}: {source}")
            }
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatasetError::Io(error) => Some(error),
            DatasetError::Json(error) => Some(error),
            DatasetError::Record { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(error: io::Error) -> Self {
        DatasetError::Io(error)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(error: serde_json::Error) -> Self {
        DatasetError::Json(error)
    }
}

/// The error type for normalizing a single raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The race time is not in the `minutes:seconds` format.
    InvalidTime(String),

    /// The year cannot be represented as a calendar date.
    InvalidYear(i32),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::InvalidTime(time) => write!(
                f,
                "the time \"{time}\" is not in the minutes:seconds format"
            ),
            RecordError::InvalidYear(year) => {
                write!(f, "the year {year} is not a valid calendar year")
            }
        }
    }
}

impl Error for RecordError {}
