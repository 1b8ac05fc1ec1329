use chrono::NaiveDateTime;
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::{TripRecord, TripTable};
use crate::core::error::DataLoadError;

/// Timestamp format used by the trip source files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a trip CSV file into a Polars DataFrame.
///
/// Timestamps stay as text here; they are parsed into typed values by
/// [`dataframe_to_trips`].
pub fn parse_trips_csv(csv_path: &Path) -> Result<DataFrame, DataLoadError> {
    if !csv_path.is_file() {
        return Err(DataLoadError::MissingSource {
            path: csv_path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()?;

    Ok(df)
}

/// Convert a trip DataFrame into a typed [`TripTable`].
///
/// Required columns are `Start Time`, `Trip Duration`, `Start Station`,
/// `End Station`, and `User Type`. `End Time`, `Gender`, and `Birth Year`
/// are schema variants: present for every row or absent entirely, which is
/// recorded in the table's schema flags.
pub fn dataframe_to_trips(df: &DataFrame) -> Result<TripTable, DataLoadError> {
    let starts = required_column(df, "Start Time")?.str()?;
    let start_stations = required_column(df, "Start Station")?.str()?;
    let end_stations = required_column(df, "End Station")?.str()?;
    let user_types = required_column(df, "User Type")?.str()?;

    // Duration and birth year may be inferred as integers if the file has
    // no decimal points; cast before extraction.
    let durations = required_column(df, "Trip Duration")?.cast(&DataType::Float64)?;
    let durations = durations.f64()?;

    let end_times = df.column("End Time").ok().and_then(|c| c.str().ok());
    let genders = df.column("Gender").ok().and_then(|c| c.str().ok());

    let birth_years = match df.column("Birth Year") {
        Ok(col) => Some(col.cast(&DataType::Float64)?),
        Err(_) => None,
    };
    let birth_years = match birth_years.as_ref() {
        Some(col) => Some(col.f64()?),
        None => None,
    };

    let has_gender = genders.is_some();
    let has_birth_year = birth_years.is_some();

    let mut trips = Vec::with_capacity(df.height());

    for row in 0..df.height() {
        let raw_start = starts.get(row).ok_or(DataLoadError::MissingValue {
            column: "Start Time",
            row,
        })?;
        let start_time =
            NaiveDateTime::parse_from_str(raw_start, TIMESTAMP_FORMAT).map_err(|_| {
                DataLoadError::Timestamp {
                    row,
                    value: raw_start.to_string(),
                }
            })?;

        // The end timestamp is implied by the duration; a missing or odd
        // End Time cell is not fatal.
        let end_time = end_times
            .and_then(|col| col.get(row))
            .and_then(|s| NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok());

        let trip_duration = durations.get(row).ok_or(DataLoadError::MissingValue {
            column: "Trip Duration",
            row,
        })?;

        let start_station = start_stations
            .get(row)
            .ok_or(DataLoadError::MissingValue {
                column: "Start Station",
                row,
            })?
            .to_string();

        let end_station = end_stations
            .get(row)
            .ok_or(DataLoadError::MissingValue {
                column: "End Station",
                row,
            })?
            .to_string();

        let user_type = user_types
            .get(row)
            .ok_or(DataLoadError::MissingValue {
                column: "User Type",
                row,
            })?
            .to_string();

        let gender = genders
            .and_then(|col| col.get(row))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        let birth_year = birth_years
            .and_then(|col| col.get(row))
            .map(|year| year as i32);

        trips.push(TripRecord {
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        });
    }

    Ok(TripTable::new(trips, has_gender, has_birth_year))
}

/// Parse a trip CSV file directly into a typed [`TripTable`].
pub fn parse_trips_csv_to_table(csv_path: &Path) -> Result<TripTable, DataLoadError> {
    let df = parse_trips_csv(csv_path)?;
    dataframe_to_trips(&df)
}

fn required_column<'a>(df: &'a DataFrame, name: &'static str) -> Result<&'a Column, DataLoadError> {
    df.column(name)
        .map_err(|_| DataLoadError::MissingColumn(name))
}
