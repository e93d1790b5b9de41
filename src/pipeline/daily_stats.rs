//! Whole-series descriptive statistics
//!
//! Mean, minimum, maximum and sample standard deviation for each tracked
//! measurement, computed independently per field.

use super::numeric;
use super::series::Series;
use crate::models::Measurement;
use tracing::info;

/// Summary of one measurement over the whole series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1 denominator), 0 for a single value
    pub std: f64,
}

impl FieldStats {
    /// Summarise a non-empty set of values; `None` when there are none
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (min, max) = numeric::bounds(values)?;
        let mean = numeric::mean(values)?;

        Some(Self {
            mean,
            min,
            max,
            std: numeric::sample_std(values, mean),
        })
    }
}

/// Per-measurement statistics for a non-empty series
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStats {
    pub record_count: usize,
    pub max_temp: FieldStats,
    pub min_temp: FieldStats,
    pub rainfall: FieldStats,
    pub humidity: FieldStats,
}

impl DailyStats {
    pub fn get(&self, measurement: Measurement) -> &FieldStats {
        match measurement {
            Measurement::MaxTemp => &self.max_temp,
            Measurement::MinTemp => &self.min_temp,
            Measurement::Rainfall => &self.rainfall,
            Measurement::Humidity => &self.humidity,
        }
    }

    /// Iterate measurements with their statistics in column order
    pub fn iter(&self) -> impl Iterator<Item = (Measurement, &FieldStats)> {
        Measurement::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// Compute statistics for every measurement
///
/// Returns `None` for an empty series: the statistics are undefined there.
pub fn compute_daily_stats(series: &Series) -> Option<DailyStats> {
    if series.is_empty() {
        info!("Daily statistics undefined: series is empty");
        return None;
    }

    let field = |m: Measurement| {
        let values: Vec<f64> = series.values(m).collect();
        FieldStats::from_values(&values)
    };

    let stats = DailyStats {
        record_count: series.len(),
        max_temp: field(Measurement::MaxTemp)?,
        min_temp: field(Measurement::MinTemp)?,
        rainfall: field(Measurement::Rainfall)?,
        humidity: field(Measurement::Humidity)?,
    };

    info!("Daily statistics computed over {} records", stats.record_count);
    Some(stats)
}
