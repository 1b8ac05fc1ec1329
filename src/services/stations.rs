use serde::Serialize;

use crate::core::domain::TripTable;
use crate::core::error::EmptyAggregationError;
use crate::services::frequency::{most_frequent, FrequencyCount};

/// Most popular start station, end station, and station combination.
#[derive(Debug, Clone, Serialize)]
pub struct StationReport {
    pub popular_start_station: FrequencyCount<String>,
    pub popular_end_station: FrequencyCount<String>,
    /// Most frequent ordered (start, end) pair; A->B and B->A are distinct.
    pub popular_trip: FrequencyCount<(String, String)>,
}

/// Compute the station popularity report for a table.
pub fn station_stats(table: &TripTable) -> Result<StationReport, EmptyAggregationError> {
    let popular_start_station =
        most_frequent(table.trips().iter().map(|t| t.start_station.clone()))?;

    let popular_end_station = most_frequent(table.trips().iter().map(|t| t.end_station.clone()))?;

    let popular_trip = most_frequent(
        table
            .trips()
            .iter()
            .map(|t| (t.start_station.clone(), t.end_station.clone())),
    )?;

    Ok(StationReport {
        popular_start_station,
        popular_end_station,
        popular_trip,
    })
}
