use serde::Serialize;

use crate::core::domain::TripTable;
use crate::core::error::EmptyAggregationError;

/// Total and mean trip duration over the current table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DurationReport {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub trip_count: usize,
}

/// Sum of all trip durations in seconds; 0.0 for an empty table.
pub fn total_duration(table: &TripTable) -> f64 {
    table.trips().iter().map(|t| t.trip_duration).sum()
}

/// Arithmetic mean trip duration in seconds.
///
/// The mean of zero trips is undefined, so an empty table fails rather
/// than yielding NaN.
pub fn mean_duration(table: &TripTable) -> Result<f64, EmptyAggregationError> {
    if table.is_empty() {
        return Err(EmptyAggregationError);
    }
    Ok(total_duration(table) / table.len() as f64)
}

/// Compute the trip duration report for a table.
pub fn duration_stats(table: &TripTable) -> Result<DurationReport, EmptyAggregationError> {
    let mean_seconds = mean_duration(table)?;

    Ok(DurationReport {
        total_seconds: total_duration(table),
        mean_seconds,
        trip_count: table.len(),
    })
}
