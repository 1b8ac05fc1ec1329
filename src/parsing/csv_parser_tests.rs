#[cfg(test)]
mod tests {
    use crate::core::error::DataLoadError;
    use crate::parsing::csv_parser::{parse_trips_csv, parse_trips_csv_to_table};
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    const FULL_SCHEMA_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 09:15:32,2017-01-02 09:20:53,321,Clark St,Canal St,Subscriber,Female,1987
2017-02-03 18:00:00,2017-02-03 18:10:00,600,Canal St,Clark St,Customer,,
";

    /// Test parsing CSV with the full column set
    #[test]
    fn test_parse_full_schema() {
        let temp_file = create_temp_csv(FULL_SCHEMA_CSV);
        let table = parse_trips_csv_to_table(temp_file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.has_gender());
        assert!(table.has_birth_year());

        let first = &table.trips()[0];
        assert_eq!(first.trip_duration, 321.0);
        assert_eq!(first.start_station, "Clark St");
        assert_eq!(first.end_station, "Canal St");
        assert_eq!(first.user_type, "Subscriber");
        assert_eq!(first.gender.as_deref(), Some("Female"));
        assert_eq!(first.birth_year, Some(1987));
        assert_eq!(first.month(), 1);
        assert_eq!(first.start_hour(), 9);
        assert!(first.end_time.is_some());
    }

    /// Null cells in the optional demographic columns become None
    #[test]
    fn test_parse_null_demographics() {
        let temp_file = create_temp_csv(FULL_SCHEMA_CSV);
        let table = parse_trips_csv_to_table(temp_file.path()).unwrap();

        let second = &table.trips()[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
        // Column presence is a table-level property, not a row-level one.
        assert!(table.has_gender());
        assert!(table.has_birth_year());
    }

    /// Test parsing CSV without the demographic columns (Washington schema)
    #[test]
    fn test_parse_without_demographics() {
        let csv_content = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-03-05 07:30:00,2017-03-05 07:45:00,900,14th & Irving,Dupont Circle,Subscriber
";

        let temp_file = create_temp_csv(csv_content);
        let table = parse_trips_csv_to_table(temp_file.path()).unwrap();

        assert_eq!(table.len(), 1);
        assert!(!table.has_gender());
        assert!(!table.has_birth_year());
        assert_eq!(table.trips()[0].gender, None);
        assert_eq!(table.trips()[0].birth_year, None);
    }

    /// A missing source file is reported as such, not as a parse failure
    #[test]
    fn test_missing_file() {
        let result = parse_trips_csv(Path::new("/nonexistent/never_there.csv"));
        assert!(matches!(
            result,
            Err(DataLoadError::MissingSource { .. })
        ));
    }

    /// Test that a missing required column fails with its name
    #[test]
    fn test_missing_required_column() {
        let csv_content = "\
End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 09:20:53,321,Clark St,Canal St,Subscriber
";

        let temp_file = create_temp_csv(csv_content);
        let result = parse_trips_csv_to_table(temp_file.path());

        match result {
            Err(DataLoadError::MissingColumn(name)) => assert_eq!(name, "Start Time"),
            other => panic!("Expected MissingColumn, got {:?}", other.map(|t| t.len())),
        }
    }

    /// Test that an unparseable start timestamp is fatal and carries the row
    #[test]
    fn test_unparseable_start_timestamp() {
        let csv_content = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 09:15:32,2017-01-02 09:20:53,321,Clark St,Canal St,Subscriber
not-a-timestamp,2017-02-03 18:10:00,600,Canal St,Clark St,Customer
";

        let temp_file = create_temp_csv(csv_content);
        let result = parse_trips_csv_to_table(temp_file.path());

        match result {
            Err(DataLoadError::Timestamp { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "not-a-timestamp");
            }
            other => panic!("Expected Timestamp error, got {:?}", other.map(|t| t.len())),
        }
    }

    /// An End Time that does not parse is dropped rather than failing the load
    #[test]
    fn test_lenient_end_time() {
        let csv_content = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 09:15:32,garbled,321,Clark St,Canal St,Subscriber
";

        let temp_file = create_temp_csv(csv_content);
        let table = parse_trips_csv_to_table(temp_file.path()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.trips()[0].end_time, None);
    }
}
