//! Cleaning and aggregation pipeline for daily weather tables
//!
//! This module turns raw table rows into a validated, date-indexed series and
//! the statistics a summary report is built from.
//!
//! # Architecture
//!
//! - [`validation`] - Row completeness and date checks, with per-defect counters
//! - [`series`] - Sorting, duplicate-date collapsing and projection to tracked fields
//! - [`daily_stats`] - Whole-series mean/min/max/std per measurement
//! - [`monthly`] - Calendar-month buckets with a fixed aggregation rule table
//! - [`report`] - Period, overall maximum temperature and peak rainfall month
//!
//! # Processing Pipeline
//!
//! Data flows strictly forward:
//!
//! 1. **Validation**: drop incomplete rows and rows with unreadable dates
//! 2. **Series build**: sort by date, keep the first row per date
//! 3. **Statistics**: daily summary and monthly buckets over the series
//! 4. **Report facts**: scalars derived from the above
//!
//! Empty input is not an error. Each stage passes an empty or `None` result
//! forward so the caller decides whether "no data" is acceptable.
//!
//! # Example Usage
//!
//! ```rust
//! use weather_summary::models::RawRecord;
//! use weather_summary::pipeline::run_pipeline;
//!
//! let rows = vec![
//!     RawRecord::from_readings("2024-01-01", [Some(10.0), Some(2.0), Some(0.0), Some(80.0)]),
//!     RawRecord::from_readings("2024-01-02", [None, Some(3.0), Some(5.0), Some(78.0)]),
//!     RawRecord::from_readings("2024-01-03", [Some(12.0), Some(4.0), Some(5.0), Some(70.0)]),
//! ];
//!
//! let outcome = run_pipeline(rows);
//! assert_eq!(outcome.diagnostics.missing_field, 1);
//! assert_eq!(outcome.series.len(), 2);
//! assert_eq!(outcome.buckets[0].rainfall_sum(), Some(5.0));
//! ```

pub mod daily_stats;
pub mod monthly;
mod numeric;
pub mod report;
pub mod series;
pub mod validation;

#[cfg(test)]
pub mod tests;

pub use daily_stats::{DailyStats, FieldStats, compute_daily_stats};
pub use monthly::{
    AggregationRule, MONTHLY_RULES, MonthBucket, MonthlyValue, aggregate_monthly,
    monthly_rainfall_totals, rules_for,
};
pub use report::{PeakRainfall, ReportFacts, derive_report_facts, peak_rainfall_month};
pub use series::{Series, SeriesBuild, build_series};
pub use validation::{AcceptedRow, RowDefect, ValidationOutcome, validate_records};

use crate::models::RawRecord;
use tracing::info;

/// Row accounting for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineDiagnostics {
    /// Rows supplied by the table reader
    pub total_rows: usize,
    /// Rows that passed validation
    pub accepted: usize,
    /// Rows dropped for an absent or non-numeric field
    pub missing_field: usize,
    /// Rows dropped for an unparsable date
    pub unparsable_date: usize,
    /// Validated rows dropped because their date was already present
    pub duplicates_removed: usize,
    /// Records in the final series
    pub series_len: usize,
}

impl PipelineDiagnostics {
    /// Rows that did not make it into the series
    pub fn dropped(&self) -> usize {
        self.missing_field + self.unparsable_date + self.duplicates_removed
    }

    /// Share of input rows dropped, 0 for empty input
    pub fn drop_ratio(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            self.dropped() as f64 / self.total_rows as f64
        }
    }

    /// Get summary of row accounting
    pub fn summary(&self) -> String {
        format!(
            "{} rows -> {} records | missing fields: {} | unparsable dates: {} | duplicate dates: {}",
            self.total_rows,
            self.series_len,
            self.missing_field,
            self.unparsable_date,
            self.duplicates_removed
        )
    }
}

/// Everything one pipeline run produces
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub series: Series,
    /// `None` when the series is empty
    pub daily: Option<DailyStats>,
    pub buckets: Vec<MonthBucket>,
    /// `None` when there are no buckets to summarise
    pub facts: Option<ReportFacts>,
    pub diagnostics: PipelineDiagnostics,
}

impl PipelineOutcome {
    /// True when no row survived cleaning
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Run every stage over a raw table
pub fn run_pipeline(raw: Vec<RawRecord>) -> PipelineOutcome {
    let total_rows = raw.len();

    let validation = validate_records(raw);
    let missing_field = validation.missing_field;
    let unparsable_date = validation.unparsable_date;
    let accepted = validation.accepted_count();

    let SeriesBuild {
        series,
        duplicates_removed,
    } = build_series(validation.accepted);

    let daily = compute_daily_stats(&series);
    let buckets = aggregate_monthly(&series);
    let facts = derive_report_facts(&series, daily.as_ref(), &buckets);

    let diagnostics = PipelineDiagnostics {
        total_rows,
        accepted,
        missing_field,
        unparsable_date,
        duplicates_removed,
        series_len: series.len(),
    };

    info!("Pipeline complete: {}", diagnostics.summary());

    PipelineOutcome {
        series,
        daily,
        buckets,
        facts,
        diagnostics,
    }
}
