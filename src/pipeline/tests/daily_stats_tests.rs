//! Tests for whole-series statistics

use super::*;
use crate::models::Measurement;
use crate::pipeline::daily_stats::{FieldStats, compute_daily_stats};

#[test]
fn test_empty_series_is_undefined() {
    assert!(compute_daily_stats(&Series::empty()).is_none());
}

#[test]
fn test_single_record_has_zero_std() {
    let series = Series::from_sorted(vec![record("2024-01-01", 10.0, 2.0, 0.0, 80.0)]);

    let stats = compute_daily_stats(&series).unwrap();

    assert_eq!(stats.record_count, 1);
    for (measurement, field) in stats.iter() {
        assert_eq!(field.std, 0.0, "{measurement} std");
        assert_eq!(field.min, field.max);
        assert_eq!(field.mean, field.min);
    }
}

#[test]
fn test_known_values() {
    let series = Series::from_sorted(vec![
        record("2024-01-01", 2.0, 1.0, 0.0, 80.0),
        record("2024-01-02", 4.0, 1.0, 10.0, 70.0),
        record("2024-01-03", 4.0, 1.0, 0.0, 60.0),
        record("2024-01-04", 4.0, 1.0, 0.0, 50.0),
        record("2024-01-05", 5.0, 1.0, 0.0, 40.0),
        record("2024-01-06", 5.0, 1.0, 0.0, 30.0),
        record("2024-01-07", 7.0, 1.0, 0.0, 20.0),
        record("2024-01-08", 9.0, 1.0, 0.0, 10.0),
    ]);

    let stats = compute_daily_stats(&series).unwrap();

    // max_temp: mean 5, squared deviations sum 32, sample variance 32/7
    let max_temp = stats.get(Measurement::MaxTemp);
    assert_close(max_temp.mean, 5.0);
    assert_eq!(max_temp.min, 2.0);
    assert_eq!(max_temp.max, 9.0);
    assert_close(max_temp.std, (32.0_f64 / 7.0).sqrt());

    let min_temp = stats.get(Measurement::MinTemp);
    assert_eq!(min_temp.std, 0.0);
    assert_close(min_temp.mean, 1.0);

    let rainfall = stats.get(Measurement::Rainfall);
    assert_close(rainfall.mean, 1.25);
    assert_eq!(rainfall.max, 10.0);

    let humidity = stats.get(Measurement::Humidity);
    assert_close(humidity.mean, 45.0);
    assert_eq!(humidity.min, 10.0);
}

#[test]
fn test_min_mean_max_ordering() {
    let stats = compute_daily_stats(&three_month_series()).unwrap();

    for (measurement, field) in stats.iter() {
        assert!(field.min <= field.mean, "{measurement}: min > mean");
        assert!(field.mean <= field.max, "{measurement}: mean > max");
        assert!(field.std >= 0.0);
    }
}

#[test]
fn test_fields_are_independent() {
    let stats = compute_daily_stats(&three_month_series()).unwrap();

    assert_eq!(stats.max_temp.max, 23.5);
    assert_eq!(stats.min_temp.max, 10.0);
    assert_eq!(stats.rainfall.max, 12.5);
    assert_eq!(stats.humidity.max, 85.0);
}

#[test]
fn test_field_stats_from_values() {
    assert!(FieldStats::from_values(&[]).is_none());

    let stats = FieldStats::from_values(&[1.0, 3.0]).unwrap();
    assert_close(stats.mean, 2.0);
    assert_close(stats.std, 2.0_f64.sqrt());
}

#[test]
fn test_large_readings_stay_finite() {
    let stats = FieldStats::from_values(&[1e308, 1e308]).unwrap();
    assert_eq!(stats.mean, 1e308);
    assert_eq!(stats.std, 0.0);

    let spread = FieldStats::from_values(&[1e308, 5e307]).unwrap();
    assert!(spread.std.is_finite());
    assert!(spread.mean >= spread.min && spread.mean <= spread.max);
    assert_close(spread.mean / 1e307, 7.5);
}
