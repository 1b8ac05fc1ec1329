use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use bikeshare_rust::core::domain::{TripRecord, TripTable, DAY_NAMES, MONTH_NAMES};
use bikeshare_rust::io::loaders::{City, CityDataLoader};
use bikeshare_rust::services::{duration_stats, station_stats, travel_time_stats, user_stats};
use bikeshare_rust::transformations::{apply_filters, validate_table, MonthFilter};

const PAGE_SIZE: usize = 5;
const NO_DATA: &str = "No data available for this filter selection.";

fn main() -> Result<()> {
    env_logger::init();

    let data_dir = data_dir();
    println!("Hello! Let's explore some US bikeshare data from Chicago, New York City or Washington!");

    loop {
        let (city, month, day) = get_filters()?;

        let table = match CityDataLoader::load(city, &data_dir) {
            Ok(table) => table,
            Err(err) => {
                eprintln!("Could not load {} data: {}", city, err);
                if wants_restart()? {
                    continue;
                }
                break;
            }
        };

        let (clean, issues) = validate_table(&table);
        if !clean {
            for issue in &issues {
                log::warn!("{}: {}", city, issue);
            }
        }

        // The prompt loop only hands out validated values, so this cannot
        // fail; the filter engine still rejects out-of-set values itself.
        let filtered = apply_filters(&table, &month, &day)?;
        println!(
            "{} of {} trips match the selected filters.",
            filtered.len(),
            table.len()
        );

        print_travel_times(&filtered);
        print_stations(&filtered);
        print_durations(&filtered);
        print_users(&filtered);

        browse_raw_rows(&filtered)?;

        if !wants_restart()? {
            break;
        }
    }

    Ok(())
}

/// Data directory: first CLI argument, else BIKESHARE_DATA_DIR, else ./data.
fn data_dir() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("BIKESHARE_DATA_DIR").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Ask the user for a city, month, and day to analyze.
///
/// Month and day come back as filter values ("all" or a lowercase name)
/// ready for the filter engine.
fn get_filters() -> Result<(City, String, String)> {
    let city = loop {
        let answer = prompt("Which city would you like to analyze? Chicago, New York City or Washington?")?;
        match answer.parse::<City>() {
            Ok(city) => {
                println!("Cool - thanks for your input. Your analysis will focus on {}.", city);
                break city;
            }
            Err(_) => println!(
                "I couldn't get your input. Please input one of the three cities Chicago, New York City or Washington."
            ),
        }
    };

    let mode = loop {
        let answer = prompt(
            "Would you like to filter the data by month, day, both, or not at all? Type \"none\" for no time filter.",
        )?
        .to_lowercase();
        if ["month", "day", "both", "none"].contains(&answer.as_str()) {
            break answer;
        }
        println!("I couldn't get your input. Please type \"month\", \"day\", \"both\", or \"none\".");
    };

    let month = if mode == "month" || mode == "both" {
        loop {
            let answer = prompt(
                "Which month? Please type \"all\", \"January\", \"February\", \"March\", \"April\", \"May\", or \"June\".",
            )?;
            if answer.parse::<MonthFilter>().is_ok() {
                break answer.to_lowercase();
            }
            println!(
                "I couldn't get your input. Please type \"all\" or one of the months January through June."
            );
        }
    } else {
        "all".to_string()
    };

    let day = if mode == "day" || mode == "both" {
        loop {
            let answer = prompt(
                "Which day of the week? Please type your response as an integer with 1=Sunday and 7=Saturday.",
            )?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=7).contains(&n) => break DAY_NAMES[n - 1].to_lowercase(),
                _ => println!(
                    "I couldn't get your input. Please type an integer between 1 and 7 (1=Sunday; ... 7=Saturday)."
                ),
            }
        }
    } else {
        "all".to_string()
    };

    print_divider();
    Ok((city, month, day))
}

fn print_travel_times(table: &TripTable) {
    print_divider();
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    let start = Instant::now();

    match travel_time_stats(table) {
        Ok(report) => {
            println!(
                "Most popular month has been {} with {} trips.",
                MONTH_NAMES[(report.popular_month.value - 1) as usize],
                report.popular_month.count
            );
            println!(
                "Most popular day of the week has been {} with {} trips.",
                report.popular_day.value, report.popular_day.count
            );
            println!(
                "Most popular hour has been {} with {} trips.",
                report.popular_hour.value, report.popular_hour.count
            );
        }
        Err(_) => println!("{}", NO_DATA),
    }

    print_elapsed(start);
}

fn print_stations(table: &TripTable) {
    print_divider();
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    let start = Instant::now();

    match station_stats(table) {
        Ok(report) => {
            println!(
                "The most popular start station has been \"{}\" with {} trips.",
                report.popular_start_station.value, report.popular_start_station.count
            );
            println!(
                "The most popular end station has been \"{}\" with {} trips.",
                report.popular_end_station.value, report.popular_end_station.count
            );
            let (from, to) = &report.popular_trip.value;
            println!(
                "The most popular start-/end station combination was from \"{}\" to \"{}\" with {} trips.",
                from, to, report.popular_trip.count
            );
        }
        Err(_) => println!("{}", NO_DATA),
    }

    print_elapsed(start);
}

fn print_durations(table: &TripTable) {
    print_divider();
    println!("\nCalculating Trip Duration...\n");
    let start = Instant::now();

    match duration_stats(table) {
        Ok(report) => {
            println!(
                "Total travel time has been {} seconds.",
                report.total_seconds
            );
            println!(
                "Average travel time per trip has been {} seconds.",
                report.mean_seconds
            );
        }
        Err(_) => println!("{}", NO_DATA),
    }

    print_elapsed(start);
}

fn print_users(table: &TripTable) {
    print_divider();
    println!("\nCalculating User Stats...\n");
    let start = Instant::now();

    match user_stats(table) {
        Ok(report) => {
            println!("Overview of trips by user types:");
            for (user_type, count) in &report.user_type_counts {
                println!("  {}: {}", user_type, count);
            }

            match &report.gender_counts {
                Some(counts) => {
                    println!("Overview of trips by gender:");
                    for (gender, count) in counts {
                        println!("  {}: {}", gender, count);
                    }
                }
                None => println!("No gender information available."),
            }

            match &report.birth_years {
                Some(years) => {
                    println!("The earliest year of birth is: {}", years.earliest);
                    println!("The most recent year of birth is: {}", years.most_recent);
                    println!("The most common year of birth is: {}", years.most_common.value);
                }
                None => println!("No birth year information available."),
            }
        }
        Err(_) => println!("{}", NO_DATA),
    }

    print_elapsed(start);
}

/// Show raw rows five at a time for as long as the user keeps asking.
fn browse_raw_rows(table: &TripTable) -> Result<()> {
    let mut offset = 0;

    loop {
        let answer = prompt(
            "\nIf you want to see some raw data, please type y or yes. Otherwise just press return.",
        )?;
        if !is_yes(&answer) {
            break;
        }

        let page = table.page(offset, PAGE_SIZE);
        if page.is_empty() {
            println!("No more rows to show.");
            break;
        }

        for (i, trip) in page.iter().enumerate() {
            print_raw_row(offset + i, trip);
        }
        offset += PAGE_SIZE;
    }

    Ok(())
}

fn print_raw_row(index: usize, trip: &TripRecord) {
    let mut extras = String::new();
    if let Some(gender) = &trip.gender {
        extras.push_str(&format!(" | {}", gender));
    }
    if let Some(year) = trip.birth_year {
        extras.push_str(&format!(" | born {}", year));
    }

    println!(
        "#{}: {} | {:.0} s | {} -> {} | {}{}",
        index + 1,
        trip.start_time,
        trip.trip_duration,
        trip.start_station,
        trip.end_station,
        trip.user_type,
        extras
    );
}

fn wants_restart() -> Result<bool> {
    let answer = prompt(
        "\nIf you want to restart the script, please type y or yes. Otherwise just press return.",
    )?;
    Ok(is_yes(&answer))
}

fn prompt(message: &str) -> Result<String> {
    println!("{}", message);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn print_divider() {
    println!("{}", "-".repeat(40));
}

fn print_elapsed(start: Instant) {
    println!("\nThis took {:.4} seconds.", start.elapsed().as_secs_f64());
    print_divider();
}
