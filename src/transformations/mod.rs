//! Trip table transformations.
//!
//! This module narrows trip tables by the optional month and weekday
//! filters and provides a data-quality scan over loaded tables. Filtering
//! is pure: it never mutates the source table and always preserves the
//! original row order.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::transformations::apply_filters;
//! # use bikeshare_rust::core::domain::TripTable;
//! # fn example(table: TripTable) {
//! let june_mondays = apply_filters(&table, "june", "monday").unwrap();
//! println!("{} trips", june_mondays.len());
//! # }
//! ```

pub mod filtering;

pub use filtering::{apply_filters, filter_trips, validate_table, DayFilter, MonthFilter};
