//! Report-ready scalars derived from the series, its statistics and buckets

use super::daily_stats::DailyStats;
use super::monthly::MonthBucket;
use super::series::Series;
use crate::models::MonthKey;
use chrono::NaiveDate;
use tracing::info;

/// Month with the greatest rainfall total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakRainfall {
    pub month: MonthKey,
    pub total: f64,
}

/// Values a summary report is built around
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFacts {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Highest daily maximum temperature in the series
    pub max_temp_overall: f64,
    pub peak_rainfall: PeakRainfall,
}

/// Derive the report facts
///
/// Returns `None` when there is nothing to summarise: no buckets, no daily
/// statistics or an empty series. This is distinct from a zero rainfall
/// peak, which is reported as a normal value.
pub fn derive_report_facts(
    series: &Series,
    daily: Option<&DailyStats>,
    buckets: &[MonthBucket],
) -> Option<ReportFacts> {
    let Some(peak_rainfall) = peak_rainfall_month(buckets) else {
        info!("Report facts unavailable: no monthly buckets");
        return None;
    };
    let daily = daily?;
    let period_start = series.first_date()?;
    let period_end = series.last_date()?;

    let facts = ReportFacts {
        period_start,
        period_end,
        max_temp_overall: daily.max_temp.max,
        peak_rainfall,
    };

    info!(
        "Report facts: {} to {}, peak rainfall {} ({:.2} mm), max temperature {:.1}",
        facts.period_start,
        facts.period_end,
        facts.peak_rainfall.month,
        facts.peak_rainfall.total,
        facts.max_temp_overall
    );

    Some(facts)
}

/// Find the bucket with the largest rainfall total; the earliest wins a tie
pub fn peak_rainfall_month(buckets: &[MonthBucket]) -> Option<PeakRainfall> {
    let mut peak: Option<PeakRainfall> = None;

    for bucket in buckets {
        let Some(total) = bucket.rainfall_sum() else {
            continue;
        };
        match peak {
            Some(current) if total <= current.total => {}
            _ => {
                peak = Some(PeakRainfall {
                    month: bucket.month,
                    total,
                })
            }
        }
    }

    peak
}
