use serde::Serialize;

use crate::core::domain::{TripTable, DAY_NAMES};
use crate::core::error::EmptyAggregationError;
use crate::services::frequency::{most_frequent, FrequencyCount};

/// Most frequent times of travel: month, weekday, and start hour.
#[derive(Debug, Clone, Serialize)]
pub struct TravelTimesReport {
    /// Most frequent month of the start timestamp (1 = January).
    pub popular_month: FrequencyCount<u32>,
    /// Most frequent weekday, as a title-cased name.
    pub popular_day: FrequencyCount<String>,
    /// Most frequent hour of day (0-23).
    pub popular_hour: FrequencyCount<u32>,
}

/// Compute the time-of-travel report for a table.
///
/// Weekdays are counted by their Sunday-first index, so a frequency tie
/// breaks toward the earliest day of the week; months and hours tie-break
/// toward the smallest number.
pub fn travel_time_stats(table: &TripTable) -> Result<TravelTimesReport, EmptyAggregationError> {
    let popular_month = most_frequent(table.trips().iter().map(|t| t.month()))?;

    let day = most_frequent(table.trips().iter().map(|t| t.day_index()))?;
    let popular_day = FrequencyCount {
        value: DAY_NAMES[day.value as usize].to_string(),
        count: day.count,
    };

    let popular_hour = most_frequent(table.trips().iter().map(|t| t.start_hour()))?;

    Ok(TravelTimesReport {
        popular_month,
        popular_day,
        popular_hour,
    })
}
