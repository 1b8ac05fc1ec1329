//! Domain models for bikeshare trips and trip tables.
//!
//! This module provides the core data structures that represent individual
//! bike rental events and the in-memory tables they are analyzed in,
//! including the derived time fields (month, weekday, hour) computed from
//! the start timestamp.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Month names indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names in Sunday-first order, indexed by days since Sunday.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Represents a single bike rental event.
///
/// A `TripRecord` carries the parsed start timestamp, the trip duration in
/// seconds, the start/end station names, and the rider metadata. Gender and
/// birth year are optional because not every city publishes them.
///
/// The time-of-travel fields (month, weekday, hour) are never stored; they
/// are derived from `start_time` on access so they cannot drift from the
/// timestamp they describe.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::TripRecord;
/// use chrono::NaiveDateTime;
///
/// let trip = TripRecord {
///     start_time: NaiveDateTime::parse_from_str(
///         "2017-01-02 09:15:32",
///         "%Y-%m-%d %H:%M:%S",
///     )
///     .unwrap(),
///     end_time: None,
///     trip_duration: 321.0,
///     start_station: "Clark St & Lake St".to_string(),
///     end_station: "Canal St & Adams St".to_string(),
///     user_type: "Subscriber".to_string(),
///     gender: Some("Female".to_string()),
///     birth_year: Some(1987),
/// };
///
/// assert_eq!(trip.month(), 1);
/// assert_eq!(trip.weekday_name(), "Monday");
/// assert_eq!(trip.start_hour(), 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Returns the month of the start timestamp (1 = January, 12 = December).
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Returns the weekday of the start timestamp.
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Returns the weekday index of the start timestamp, with 0 = Sunday.
    pub fn day_index(&self) -> u32 {
        self.start_time.weekday().num_days_from_sunday()
    }

    /// Returns the title-cased weekday name of the start timestamp.
    pub fn weekday_name(&self) -> &'static str {
        DAY_NAMES[self.day_index() as usize]
    }

    /// Returns the hour of day of the start timestamp (0-23).
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// An ordered, in-memory table of trips sharing one city's schema.
///
/// The schema flags record whether the optional demographic columns were
/// present in the source file. They apply to the table as a whole: a city
/// either publishes a column for every row or not at all.
///
/// A `TripTable` is created once per session by the loader, optionally
/// narrowed into a filtered copy, and consumed read-only by the statistics
/// functions. Filtering never mutates the source table.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::TripTable;
///
/// let table = TripTable::new(vec![], false, false);
/// assert!(table.is_empty());
/// assert!(!table.has_gender());
/// ```
#[derive(Debug, Clone)]
pub struct TripTable {
    trips: Vec<TripRecord>,
    has_gender: bool,
    has_birth_year: bool,
}

impl TripTable {
    /// Creates a table from trips and explicit schema flags.
    pub fn new(trips: Vec<TripRecord>, has_gender: bool, has_birth_year: bool) -> Self {
        Self {
            trips,
            has_gender,
            has_birth_year,
        }
    }

    /// Creates a table from trips, inferring the schema flags from the rows.
    ///
    /// Intended for tests and programmatic construction; the loader knows
    /// the real schema from the CSV header and uses [`TripTable::new`].
    pub fn from_trips(trips: Vec<TripRecord>) -> Self {
        let has_gender = trips.iter().any(|t| t.gender.is_some());
        let has_birth_year = trips.iter().any(|t| t.birth_year.is_some());
        Self {
            trips,
            has_gender,
            has_birth_year,
        }
    }

    /// Returns the trips in their original order.
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    /// Returns the number of trips in the table.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns `true` if the table has no trips.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Returns `true` if the source file published a Gender column.
    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    /// Returns `true` if the source file published a Birth Year column.
    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// Returns a raw-row slice of at most `limit` trips starting at `offset`.
    ///
    /// Out-of-range offsets yield an empty slice, so a pager can advance
    /// past the end without bookkeeping.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare_rust::core::domain::TripTable;
    ///
    /// let table = TripTable::new(vec![], false, false);
    /// assert!(table.page(10, 5).is_empty());
    /// ```
    pub fn page(&self, offset: usize, limit: usize) -> &[TripRecord] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(limit).min(self.trips.len());
        &self.trips[start..end]
    }
}
