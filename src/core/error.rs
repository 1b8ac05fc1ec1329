//! Error types for loading, filtering, and aggregation.

use std::path::PathBuf;

/// Error type for loading a city's trip data.
///
/// Any of these is fatal to the load step: the current analysis attempt
/// is aborted and the caller may start over with different input.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("unknown city '{0}' (expected chicago, new york city, or washington)")]
    UnknownCity(String),

    #[error("no data file for this city at {path}")]
    MissingSource { path: PathBuf },

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] polars::error::PolarsError),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: missing value in required column '{column}'")]
    MissingValue { column: &'static str, row: usize },

    #[error("row {row}: unparseable start time '{value}'")]
    Timestamp { row: usize, value: String },
}

/// Error type for an out-of-set month or day filter value.
///
/// Unknown values are rejected rather than silently treated as "all".
#[derive(Debug, thiserror::Error)]
pub enum InvalidFilterError {
    #[error("unknown month filter '{0}' (expected \"all\" or january..june)")]
    UnknownMonth(String),

    #[error("unknown day filter '{0}' (expected \"all\" or a weekday name)")]
    UnknownDay(String),
}

/// A frequency-based statistic was requested on a table with zero rows.
///
/// Recoverable: callers surface this as a "no data available" message for
/// the affected report without aborting the other reports.
#[derive(Debug, thiserror::Error)]
#[error("no rows to aggregate")]
pub struct EmptyAggregationError;
