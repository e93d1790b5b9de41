//! Tests for report fact derivation

use super::*;
use crate::models::MonthKey;
use crate::pipeline::daily_stats::compute_daily_stats;
use crate::pipeline::monthly::aggregate_monthly;
use crate::pipeline::report::{derive_report_facts, peak_rainfall_month};

#[test]
fn test_report_facts_from_three_months() {
    let series = three_month_series();
    let daily = compute_daily_stats(&series);
    let buckets = aggregate_monthly(&series);

    let facts = derive_report_facts(&series, daily.as_ref(), &buckets).unwrap();

    assert_eq!(facts.period_start, date("2024-01-01"));
    assert_eq!(facts.period_end, date("2024-03-06"));
    assert_eq!(facts.max_temp_overall, 23.5);
    assert_eq!(facts.peak_rainfall.month, MonthKey::new(2024, 2));
    assert_close(facts.peak_rainfall.total, 13.0);
    assert_eq!(facts.peak_rainfall.month.month_name(), "February");
}

#[test]
fn test_unavailable_without_buckets() {
    let series = Series::empty();
    let daily = compute_daily_stats(&series);

    assert!(derive_report_facts(&series, daily.as_ref(), &[]).is_none());
    assert!(peak_rainfall_month(&[]).is_none());
}

#[test]
fn test_zero_rainfall_is_available_not_unavailable() {
    let series = Series::from_sorted(vec![
        record("2024-06-01", 25.0, 15.0, 0.0, 40.0),
        record("2024-07-01", 28.0, 17.0, 0.0, 35.0),
    ]);
    let daily = compute_daily_stats(&series);
    let buckets = aggregate_monthly(&series);

    let facts = derive_report_facts(&series, daily.as_ref(), &buckets).unwrap();

    assert_eq!(facts.peak_rainfall.total, 0.0);
    assert_eq!(facts.peak_rainfall.month, MonthKey::new(2024, 6));
}

#[test]
fn test_peak_tie_goes_to_earliest_month() {
    let series = Series::from_sorted(vec![
        record("2024-01-01", 10.0, 2.0, 4.0, 80.0),
        record("2024-02-01", 10.0, 2.0, 7.0, 80.0),
        record("2024-03-01", 10.0, 2.0, 3.0, 80.0),
        record("2024-03-02", 10.0, 2.0, 4.0, 80.0),
    ]);
    let buckets = aggregate_monthly(&series);

    let peak = peak_rainfall_month(&buckets).unwrap();

    assert_eq!(peak.month, MonthKey::new(2024, 2));
    assert_eq!(peak.total, 7.0);
}

#[test]
fn test_max_temp_comes_from_daily_stats() {
    let series = three_month_series();
    let daily = compute_daily_stats(&series).unwrap();
    let buckets = aggregate_monthly(&series);

    let facts = derive_report_facts(&series, Some(&daily), &buckets).unwrap();

    assert_eq!(facts.max_temp_overall, daily.max_temp.max);
}
