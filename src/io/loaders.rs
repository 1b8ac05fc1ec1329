use log::{debug, info};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::domain::TripTable;
use crate::core::error::DataLoadError;
use crate::parsing::csv_parser;

/// The three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// The fixed lookup key for this city.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of this city's trip data, relative to the data directory.
    pub fn source_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for City {
    type Err = DataLoadError;

    /// Parses one of the fixed city keys, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.key() == lower)
            .ok_or_else(|| DataLoadError::UnknownCity(s.to_string()))
    }
}

/// Loads a city's trip records into an in-memory table.
pub struct CityDataLoader;

impl CityDataLoader {
    /// Load the trip table for a city from its file under `data_dir`.
    pub fn load(city: City, data_dir: &Path) -> Result<TripTable, DataLoadError> {
        let path = data_dir.join(city.source_file());
        info!("Loading {} trip data from {}", city, path.display());

        let table = csv_parser::parse_trips_csv_to_table(&path)?;
        debug!(
            "Loaded {} trips for {} (gender: {}, birth year: {})",
            table.len(),
            city,
            table.has_gender(),
            table.has_birth_year()
        );

        Ok(table)
    }

    /// Load a trip table from an explicit CSV path.
    pub fn load_from_csv(path: &Path) -> Result<TripTable, DataLoadError> {
        csv_parser::parse_trips_csv_to_table(path)
    }
}
