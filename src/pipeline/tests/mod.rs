//! Tests for the cleaning and aggregation pipeline
//!
//! Shared fixture builders live here; each component has its own test file.

pub mod daily_stats_tests;
pub mod report_tests;
pub mod series_tests;

use crate::models::{RawRecord, WeatherRecord};
use crate::pipeline::series::Series;
use crate::pipeline::validation::AcceptedRow;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Parse an ISO date for fixtures
pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

/// Build a complete raw row
pub fn raw(date: &str, max_temp: f64, min_temp: f64, rainfall: f64, humidity: f64) -> RawRecord {
    RawRecord::from_readings(
        date,
        [Some(max_temp), Some(min_temp), Some(rainfall), Some(humidity)],
    )
}

/// Build a validated record
pub fn record(date_text: &str, max_temp: f64, min_temp: f64, rainfall: f64, humidity: f64) -> WeatherRecord {
    WeatherRecord::new(date(date_text), max_temp, min_temp, rainfall, humidity)
}

/// Wrap a record as an accepted row with no extra columns
pub fn accepted(record: WeatherRecord) -> AcceptedRow {
    AcceptedRow {
        record,
        extra: BTreeMap::new(),
    }
}

/// Series spanning January to March 2024 with hand-checked monthly totals
///
/// January rainfall: 0 + 5 + 5 = 10
/// February rainfall: 12.5 + 0.5 = 13
/// March rainfall: 2 + 3 = 5
pub fn three_month_series() -> Series {
    Series::from_sorted(vec![
        record("2024-01-01", 10.0, 2.0, 0.0, 80.0),
        record("2024-01-02", 11.0, 3.0, 5.0, 78.0),
        record("2024-01-03", 12.0, 4.0, 5.0, 70.0),
        record("2024-02-10", 15.0, 6.0, 12.5, 85.0),
        record("2024-02-11", 17.0, 7.0, 0.5, 65.0),
        record("2024-03-05", 21.0, 9.0, 2.0, 55.0),
        record("2024-03-06", 23.5, 10.0, 3.0, 50.0),
    ])
}

/// Assert two floats agree to within rounding error
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
