//! Date-indexed series construction
//!
//! Turns validated rows into a [`Series`]: sorted by date, one record per
//! calendar day, restricted to the four tracked measurements.

use super::validation::AcceptedRow;
use crate::models::{Measurement, WeatherRecord};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Validated daily records with strictly increasing, unique dates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    records: Vec<WeatherRecord>,
}

impl Series {
    /// An empty series
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeatherRecord> {
        self.records.iter()
    }

    /// Earliest date, or `None` for an empty series
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Latest date, or `None` for an empty series
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// Look up the record for a given day
    pub fn get(&self, date: NaiveDate) -> Option<&WeatherRecord> {
        self.records
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|index| &self.records[index])
    }

    /// All values of one measurement in date order
    pub fn values(&self, measurement: Measurement) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| measurement.value_of(r))
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a WeatherRecord;
    type IntoIter = std::slice::Iter<'a, WeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Result of building a series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesBuild {
    pub series: Series,
    /// Rows dropped because an earlier row already held the same date
    pub duplicates_removed: usize,
}

/// Build a series from validated rows
///
/// Rows are sorted by date with a stable sort, so among rows sharing a date
/// the one that came first in the input is kept. Untracked columns are
/// discarded. Empty input gives an empty series.
pub fn build_series(rows: Vec<AcceptedRow>) -> SeriesBuild {
    if rows.is_empty() {
        info!("Series build: no validated rows, series is empty");
        return SeriesBuild::default();
    }

    let mut records: Vec<WeatherRecord> = rows.into_iter().map(|row| row.record).collect();
    records.sort_by_key(|r| r.date);

    let before = records.len();
    records.dedup_by(|later, kept| {
        let duplicate = later.date == kept.date;
        if duplicate {
            debug!("Duplicate date {} dropped", later.date);
        }
        duplicate
    });
    let duplicates_removed = before - records.len();

    info!(
        "Series build complete: {} records, {} duplicate dates removed",
        records.len(),
        duplicates_removed
    );

    SeriesBuild {
        series: Series { records },
        duplicates_removed,
    }
}

#[cfg(test)]
impl Series {
    /// Wrap records that are already sorted and unique
    pub(crate) fn from_sorted(records: Vec<WeatherRecord>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].date < w[1].date));
        Self { records }
    }
}
