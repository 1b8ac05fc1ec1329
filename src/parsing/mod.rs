//! Parsers for bikeshare trip data.
//!
//! This module turns a city's tabular source into typed [`TripRecord`]s,
//! using header-driven column access so the source column names are matched
//! verbatim rather than by position.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::parsing::csv_parser::parse_trips_csv_to_table;
//! use std::path::Path;
//!
//! let table = parse_trips_csv_to_table(Path::new("data/chicago.csv"))
//!     .expect("Failed to parse trip data");
//! println!("Loaded {} trips", table.len());
//! ```
//!
//! [`TripRecord`]: crate::core::domain::TripRecord

pub mod csv_parser;

#[cfg(test)]
mod csv_parser_tests;
