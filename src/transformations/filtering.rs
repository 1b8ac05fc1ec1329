use chrono::Weekday;
use std::str::FromStr;

use crate::core::domain::TripTable;
use crate::core::error::InvalidFilterError;

/// Month names accepted as filter values; the data set covers January
/// through June only. A month's filter index is its 1-based position here.
pub const FILTER_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Optional month predicate: either no-op or one month (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl FromStr for MonthFilter {
    type Err = InvalidFilterError;

    /// Parses "all" or one of the six covered month names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "all" {
            return Ok(MonthFilter::All);
        }
        match FILTER_MONTHS.iter().position(|name| *name == lower) {
            Some(index) => Ok(MonthFilter::Month(index as u32 + 1)),
            None => Err(InvalidFilterError::UnknownMonth(s.to_string())),
        }
    }
}

/// Optional weekday predicate: either no-op or one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl FromStr for DayFilter {
    type Err = InvalidFilterError;

    /// Parses "all" or a weekday name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "all" {
            return Ok(DayFilter::All);
        }
        lower
            .parse::<Weekday>()
            .map(DayFilter::Day)
            .map_err(|_| InvalidFilterError::UnknownDay(s.to_string()))
    }
}

/// Narrow a table to the trips matching the month and day predicates.
///
/// Returns a new table with the matching trips in their original relative
/// order and the source table's schema flags. An empty result is not an
/// error; frequency statistics on it fail explicitly instead.
pub fn filter_trips(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let trips = table
        .trips()
        .iter()
        .filter(|t| match month {
            MonthFilter::All => true,
            MonthFilter::Month(m) => t.month() == m,
        })
        .filter(|t| match day {
            DayFilter::All => true,
            DayFilter::Day(d) => t.weekday() == d,
        })
        .cloned()
        .collect();

    TripTable::new(trips, table.has_gender(), table.has_birth_year())
}

/// Validate the raw filter values and narrow the table with them.
///
/// This is the string-facing contract used by the session controller:
/// out-of-set values are rejected with [`InvalidFilterError`] rather than
/// silently treated as "all".
pub fn apply_filters(
    table: &TripTable,
    month: &str,
    day: &str,
) -> Result<TripTable, InvalidFilterError> {
    let month = month.parse::<MonthFilter>()?;
    let day = day.parse::<DayFilter>()?;
    Ok(filter_trips(table, month, day))
}

/// Scan a loaded table for data-quality issues.
///
/// Advisory only: the issues are reported to the caller, which may log
/// them, but they do not abort the analysis.
pub fn validate_table(table: &TripTable) -> (bool, Vec<String>) {
    let mut issues: Vec<String> = Vec::new();

    let non_positive = table
        .trips()
        .iter()
        .filter(|t| t.trip_duration <= 0.0)
        .count();
    if non_positive > 0 {
        issues.push(format!(
            "{} trips have a non-positive duration",
            non_positive
        ));
    }

    let blank_stations = table
        .trips()
        .iter()
        .filter(|t| t.start_station.trim().is_empty() || t.end_station.trim().is_empty())
        .count();
    if blank_stations > 0 {
        issues.push(format!("{} trips have a blank station name", blank_stations));
    }

    let end_before_start = table
        .trips()
        .iter()
        .filter(|t| t.end_time.map(|end| end < t.start_time).unwrap_or(false))
        .count();
    if end_before_start > 0 {
        issues.push(format!(
            "{} trips end before they start",
            end_before_start
        ));
    }

    (issues.is_empty(), issues)
}
