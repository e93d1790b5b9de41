//! Calendar-month aggregation
//!
//! Partitions a series into one bucket per calendar month present in the
//! data and reduces each tracked measurement with a fixed set of rules.
//! Minimum temperature is summarised daily only and has no monthly rule.

use super::numeric;
use super::series::Series;
use crate::models::{Measurement, MonthKey};
use std::fmt;
use std::ops::Range;
use tracing::{debug, info};

/// Reduction applied to one measurement within a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationRule {
    Mean,
    Min,
    Max,
    Sum,
}

impl AggregationRule {
    /// Reduce a set of values; `None` if there are none
    pub fn apply(&self, values: &[f64]) -> Option<f64> {
        let (min, max) = numeric::bounds(values)?;
        let reduced = match self {
            AggregationRule::Mean => numeric::mean(values)?,
            AggregationRule::Min => min,
            AggregationRule::Max => max,
            AggregationRule::Sum => numeric::finite_sum(values),
        };
        Some(reduced)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AggregationRule::Mean => "mean",
            AggregationRule::Min => "min",
            AggregationRule::Max => "max",
            AggregationRule::Sum => "sum",
        }
    }
}

impl fmt::Display for AggregationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monthly rule table, in output column order
pub const MONTHLY_RULES: &[(Measurement, &[AggregationRule])] = &[
    (
        Measurement::MaxTemp,
        &[
            AggregationRule::Mean,
            AggregationRule::Min,
            AggregationRule::Max,
        ],
    ),
    (Measurement::Rainfall, &[AggregationRule::Sum]),
    (Measurement::Humidity, &[AggregationRule::Mean]),
];

/// Rules configured for a measurement; empty for daily-only measurements
pub fn rules_for(measurement: Measurement) -> &'static [AggregationRule] {
    MONTHLY_RULES
        .iter()
        .find(|(m, _)| *m == measurement)
        .map(|(_, rules)| *rules)
        .unwrap_or(&[])
}

/// One aggregated cell of a month bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyValue {
    pub measurement: Measurement,
    pub rule: AggregationRule,
    pub value: f64,
}

/// Aggregate of every record in one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub month: MonthKey,
    /// Positions of this month's records within the series
    pub records: Range<usize>,
    /// One entry per (measurement, rule) pair in [`MONTHLY_RULES`] order
    pub values: Vec<MonthlyValue>,
}

impl MonthBucket {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Look up an aggregated value
    pub fn value(&self, measurement: Measurement, rule: AggregationRule) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.measurement == measurement && v.rule == rule)
            .map(|v| v.value)
    }

    pub fn rainfall_sum(&self) -> Option<f64> {
        self.value(Measurement::Rainfall, AggregationRule::Sum)
    }
}

/// Group a series into ascending calendar-month buckets
///
/// The series is date-ordered, so each month occupies one contiguous run of
/// records and the buckets partition the series exactly.
pub fn aggregate_monthly(series: &Series) -> Vec<MonthBucket> {
    let mut buckets = Vec::new();
    let mut offset = 0;

    for chunk in series.records().chunk_by(|a, b| a.month() == b.month()) {
        let month = chunk[0].month();
        let records = offset..offset + chunk.len();
        offset = records.end;

        let mut values = Vec::new();
        for measurement in Measurement::ALL {
            let rules = rules_for(measurement);
            if rules.is_empty() {
                continue;
            }
            let column: Vec<f64> = chunk.iter().map(|r| measurement.value_of(r)).collect();
            for &rule in rules {
                if let Some(value) = rule.apply(&column) {
                    values.push(MonthlyValue {
                        measurement,
                        rule,
                        value,
                    });
                }
            }
        }

        debug!("Month {}: {} records aggregated", month, chunk.len());
        buckets.push(MonthBucket {
            month,
            records,
            values,
        });
    }

    info!(
        "Monthly aggregation complete: {} buckets from {} records",
        buckets.len(),
        series.len()
    );

    buckets
}

/// Rainfall total per month, in month order
pub fn monthly_rainfall_totals(buckets: &[MonthBucket]) -> Vec<(MonthKey, f64)> {
    buckets
        .iter()
        .filter_map(|b| b.rainfall_sum().map(|total| (b.month, total)))
        .collect()
}
