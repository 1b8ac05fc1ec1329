//! High-level data loading utilities.
//!
//! This module maps the fixed city keys onto their trip data files and
//! loads them into ready-to-analyze [`TripTable`]s, combining the CSV
//! parsing logic with the derived-field computation.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::io::loaders::{City, CityDataLoader};
//! use std::path::Path;
//!
//! let table = CityDataLoader::load(City::Chicago, Path::new("data"))
//!     .expect("Failed to load");
//! println!("Loaded {} trips", table.len());
//! ```
//!
//! [`TripTable`]: crate::core::domain::TripTable

pub mod loaders;


pub use loaders::{City, CityDataLoader};
