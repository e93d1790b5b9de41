//! Row validation for raw weather tables
//!
//! Each raw row is judged on its own: it must carry all four readings as
//! finite numbers and a date that resolves to a calendar day. Rows that fail
//! are dropped and counted under one of two separate counters so callers can
//! tell incomplete rows apart from rows with unreadable dates.

use crate::constants::{DATE_FORMATS, DATETIME_FORMATS};
use crate::models::{Measurement, RawRecord, WeatherRecord};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Why a raw row was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RowDefect {
    /// The date cell is absent
    MissingDate,
    /// A reading is absent, non-numeric or non-finite
    MissingValue(Measurement),
    /// The date cell is present but does not resolve to a calendar day
    UnparsableDate(String),
}

impl RowDefect {
    /// True for defects counted as missing fields rather than bad dates
    pub fn is_missing_field(&self) -> bool {
        matches!(self, RowDefect::MissingDate | RowDefect::MissingValue(_))
    }
}

impl fmt::Display for RowDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDefect::MissingDate => write!(f, "missing date"),
            RowDefect::MissingValue(m) => write!(f, "missing or non-numeric {}", m),
            RowDefect::UnparsableDate(text) => write!(f, "unparsable date '{}'", text),
        }
    }
}

/// A row that passed validation, still carrying any untracked columns
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedRow {
    pub record: WeatherRecord,
    pub extra: BTreeMap<String, String>,
}

/// Result of validating a whole table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    /// Accepted rows in input order
    pub accepted: Vec<AcceptedRow>,
    /// Rows dropped for an absent or non-numeric field
    pub missing_field: usize,
    /// Rows dropped for a date that could not be parsed
    pub unparsable_date: usize,
}

impl ValidationOutcome {
    /// Number of rows that were examined
    pub fn total_input(&self) -> usize {
        self.accepted.len() + self.dropped()
    }

    /// Number of rows rejected for any reason
    pub fn dropped(&self) -> usize {
        self.missing_field + self.unparsable_date
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    fn record(&mut self, defect: &RowDefect) {
        if defect.is_missing_field() {
            self.missing_field += 1;
        } else {
            self.unparsable_date += 1;
        }
    }
}

/// Validate every row of a raw table
pub fn validate_records(raw: Vec<RawRecord>) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    for (index, row) in raw.into_iter().enumerate() {
        match validate_record(row) {
            Ok(accepted) => outcome.accepted.push(accepted),
            Err(defect) => {
                debug!("Row {} dropped: {}", index + 1, defect);
                outcome.record(&defect);
            }
        }
    }

    info!(
        "Validation complete: {} of {} rows accepted ({} missing fields, {} unparsable dates)",
        outcome.accepted_count(),
        outcome.total_input(),
        outcome.missing_field,
        outcome.unparsable_date
    );

    outcome
}

/// Validate a single row
///
/// Completeness is checked before the date is parsed, so a row that is both
/// incomplete and badly dated counts as a missing field.
pub fn validate_record(raw: RawRecord) -> Result<AcceptedRow, RowDefect> {
    let date_text = raw
        .date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RowDefect::MissingDate)?;

    let mut readings = [0.0; 4];
    for (slot, measurement) in readings.iter_mut().zip(Measurement::ALL) {
        *slot = measurement
            .raw_of(&raw)
            .and_then(parse_reading)
            .ok_or(RowDefect::MissingValue(measurement))?;
    }

    let date =
        parse_date(date_text).ok_or_else(|| RowDefect::UnparsableDate(date_text.to_string()))?;

    let [max_temp, min_temp, rainfall, humidity] = readings;
    Ok(AcceptedRow {
        record: WeatherRecord::new(date, max_temp, min_temp, rainfall, humidity),
        extra: raw.extra,
    })
}

/// Parse a date cell into a calendar day
///
/// Only year-first layouts are accepted; a time component is dropped.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse a reading cell into a finite number
pub fn parse_reading(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
