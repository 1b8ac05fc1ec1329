use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::domain::TripTable;
use crate::core::error::EmptyAggregationError;
use crate::services::frequency::{count_values, most_frequent, FrequencyCount};

/// Earliest, most recent, and most common rider birth year.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: FrequencyCount<i32>,
}

/// Rider demographics for the current table.
///
/// The demographic sections are `None` when the city does not publish the
/// corresponding column; that is the "unavailable" result, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    pub user_type_counts: BTreeMap<String, usize>,
    pub gender_counts: Option<BTreeMap<String, usize>>,
    pub birth_years: Option<BirthYearStats>,
}

/// Compute the user demographics report for a table.
///
/// Rows with a null gender or birth year are excluded from those sections
/// only. A Birth Year column with no surviving values also reports
/// unavailable, since min/max/mode are undefined on nothing.
pub fn user_stats(table: &TripTable) -> Result<UserReport, EmptyAggregationError> {
    if table.is_empty() {
        return Err(EmptyAggregationError);
    }

    let user_type_counts = count_values(table.trips().iter().map(|t| t.user_type.clone()));

    let gender_counts = if table.has_gender() {
        Some(count_values(
            table.trips().iter().filter_map(|t| t.gender.clone()),
        ))
    } else {
        None
    };

    let birth_years = if table.has_birth_year() {
        birth_year_stats(table)
    } else {
        None
    };

    Ok(UserReport {
        user_type_counts,
        gender_counts,
        birth_years,
    })
}

fn birth_year_stats(table: &TripTable) -> Option<BirthYearStats> {
    let years: Vec<i32> = table.trips().iter().filter_map(|t| t.birth_year).collect();

    let earliest = years.iter().copied().min()?;
    let most_recent = years.iter().copied().max()?;
    let most_common = most_frequent(years).ok()?;

    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::TripRecord;
    use chrono::NaiveDateTime;

    fn trip(user_type: &str, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
        TripRecord {
            start_time: NaiveDateTime::parse_from_str(
                "2017-01-02 08:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            end_time: None,
            trip_duration: 60.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: user_type.to_string(),
            gender: gender.map(|g| g.to_string()),
            birth_year,
        }
    }

    #[test]
    fn test_user_stats_full_schema() {
        let table = TripTable::from_trips(vec![
            trip("Subscriber", Some("Female"), Some(1987)),
            trip("Subscriber", Some("Male"), Some(1987)),
            trip("Customer", None, Some(1990)),
        ]);

        let report = user_stats(&table).unwrap();

        assert_eq!(report.user_type_counts.get("Subscriber"), Some(&2));
        assert_eq!(report.user_type_counts.get("Customer"), Some(&1));

        let genders = report.gender_counts.unwrap();
        assert_eq!(genders.get("Female"), Some(&1));
        assert_eq!(genders.get("Male"), Some(&1));
        // The null gender row is excluded from the section, not counted.
        assert_eq!(genders.values().sum::<usize>(), 2);

        let years = report.birth_years.unwrap();
        assert_eq!(years.earliest, 1987);
        assert_eq!(years.most_recent, 1990);
        assert_eq!(years.most_common.value, 1987);
        assert_eq!(years.most_common.count, 2);
    }

    #[test]
    fn test_missing_demographic_columns_report_unavailable() {
        let table = TripTable::new(
            vec![trip("Subscriber", None, None)],
            false,
            false,
        );

        let report = user_stats(&table).unwrap();

        assert_eq!(report.user_type_counts.len(), 1);
        assert!(report.gender_counts.is_none());
        assert!(report.birth_years.is_none());
    }

    #[test]
    fn test_birth_year_mode_tie_breaks_to_smallest_year() {
        let table = TripTable::from_trips(vec![
            trip("Subscriber", None, Some(1990)),
            trip("Subscriber", None, Some(1985)),
        ]);

        let report = user_stats(&table).unwrap();
        let years = report.birth_years.unwrap();

        assert_eq!(years.most_common.value, 1985);
        assert_eq!(years.most_common.count, 1);
    }

    #[test]
    fn test_all_null_birth_years_report_unavailable() {
        let table = TripTable::new(
            vec![trip("Subscriber", None, None)],
            false,
            true,
        );

        let report = user_stats(&table).unwrap();
        assert!(report.birth_years.is_none());
    }

    #[test]
    fn test_empty_table_fails() {
        let table = TripTable::new(vec![], true, true);
        assert!(user_stats(&table).is_err());
    }
}
