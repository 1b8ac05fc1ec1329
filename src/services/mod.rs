//! Statistics reports over trip tables.
//!
//! Four independent, order-insensitive reports are computed over a
//! (possibly filtered) [`TripTable`]:
//!
//! - [`travel_times`]: most frequent month, weekday, and start hour
//! - [`stations`]: most frequent start/end stations and station pair
//! - [`durations`]: total and mean trip duration
//! - [`users`]: counts by user type, and the optional demographic sections
//!
//! Every "most frequent" value uses the same deterministic tie-break: among
//! equally frequent values, the smallest one wins (numeric order for
//! months, hours, day indices, and birth years; lexicographic order for
//! station names and categories).
//!
//! Frequency statistics on an empty table fail with
//! [`EmptyAggregationError`] so callers can report "no data" instead of
//! receiving an arbitrary result. The reports are independent: one failing
//! does not prevent the others from completing.
//!
//! [`TripTable`]: crate::core::domain::TripTable
//! [`EmptyAggregationError`]: crate::core::error::EmptyAggregationError

pub mod durations;
pub mod frequency;
pub mod stations;
pub mod travel_times;
pub mod users;

pub use durations::{duration_stats, mean_duration, total_duration, DurationReport};
pub use frequency::{count_values, most_frequent, FrequencyCount};
pub use stations::{station_stats, StationReport};
pub use travel_times::{travel_time_stats, TravelTimesReport};
pub use users::{user_stats, BirthYearStats, UserReport};
