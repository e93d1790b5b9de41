//! Core data structures for weather table processing.
//!
//! Defines the raw row as supplied by a table reader, the validated daily
//! record, the tracked measurements and the calendar month key used for
//! monthly bucketing.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

/// The four measurements tracked for every day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measurement {
    MaxTemp,
    MinTemp,
    Rainfall,
    Humidity,
}

impl Measurement {
    /// All measurements in column order
    pub const ALL: [Measurement; 4] = [
        Measurement::MaxTemp,
        Measurement::MinTemp,
        Measurement::Rainfall,
        Measurement::Humidity,
    ];

    /// Short machine name
    pub fn name(&self) -> &'static str {
        match self {
            Measurement::MaxTemp => "max_temp",
            Measurement::MinTemp => "min_temp",
            Measurement::Rainfall => "rainfall",
            Measurement::Humidity => "humidity",
        }
    }

    /// Column header used in source and exported tables
    pub fn header(&self) -> &'static str {
        use crate::constants::columns;
        match self {
            Measurement::MaxTemp => columns::MAX_TEMP,
            Measurement::MinTemp => columns::MIN_TEMP,
            Measurement::Rainfall => columns::RAINFALL,
            Measurement::Humidity => columns::HUMIDITY,
        }
    }

    /// Read this measurement from a validated record
    pub fn value_of(&self, record: &WeatherRecord) -> f64 {
        match self {
            Measurement::MaxTemp => record.max_temp,
            Measurement::MinTemp => record.min_temp,
            Measurement::Rainfall => record.rainfall,
            Measurement::Humidity => record.humidity,
        }
    }

    /// Read this measurement's raw cell from an unvalidated row
    pub fn raw_of<'a>(&self, record: &'a RawRecord) -> Option<&'a str> {
        match self {
            Measurement::MaxTemp => record.max_temp.as_deref(),
            Measurement::MinTemp => record.min_temp.as_deref(),
            Measurement::Rainfall => record.rainfall.as_deref(),
            Measurement::Humidity => record.humidity.as_deref(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One input row as supplied by a table reader
///
/// `None` is the explicit absent marker and is distinct from a zero reading.
/// Cell text is not interpreted until validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub date: Option<String>,
    pub max_temp: Option<String>,
    pub min_temp: Option<String>,
    pub rainfall: Option<String>,
    pub humidity: Option<String>,
    /// Columns outside the tracked set, keyed by header
    pub extra: BTreeMap<String, String>,
}

impl RawRecord {
    /// Build a row from a date and numeric readings in column order
    ///
    /// Convenient for callers that already hold parsed numbers; `None`
    /// marks a missing reading.
    pub fn from_readings(date: &str, readings: [Option<f64>; 4]) -> Self {
        let [max_temp, min_temp, rainfall, humidity] = readings.map(|r| r.map(|v| v.to_string()));
        Self {
            date: Some(date.to_string()),
            max_temp,
            min_temp,
            rainfall,
            humidity,
            extra: BTreeMap::new(),
        }
    }

    /// Attach an untracked column value
    pub fn with_extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(column.into(), value.into());
        self
    }
}

/// A validated daily observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    pub max_temp: f64,
    pub min_temp: f64,
    pub rainfall: f64,
    pub humidity: f64,
}

impl WeatherRecord {
    pub fn new(date: NaiveDate, max_temp: f64, min_temp: f64, rainfall: f64, humidity: f64) -> Self {
        Self {
            date,
            max_temp,
            min_temp,
            rainfall,
            humidity,
        }
    }

    /// Calendar month this record falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Calendar month used as the monthly bucket key
///
/// Orders chronologically: by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Full English month name, e.g. "March"
    pub fn month_name(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B").to_string())
            .unwrap_or_else(|| format!("month {}", self.month))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
