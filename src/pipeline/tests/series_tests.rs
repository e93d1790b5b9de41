//! Tests for series construction

use super::*;
use crate::models::Measurement;
use crate::pipeline::series::build_series;

#[test]
fn test_build_series_sorts_by_date() {
    let rows = vec![
        accepted(record("2024-01-03", 12.0, 4.0, 5.0, 70.0)),
        accepted(record("2024-01-01", 10.0, 2.0, 0.0, 80.0)),
        accepted(record("2024-01-02", 11.0, 3.0, 1.0, 75.0)),
    ];

    let build = build_series(rows);

    let dates: Vec<_> = build.series.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")]);
    assert_eq!(build.duplicates_removed, 0);
}

#[test]
fn test_duplicate_dates_keep_first_occurrence() {
    let rows = vec![
        accepted(record("2024-02-01", 20.0, 10.0, 0.0, 50.0)),
        accepted(record("2024-02-01", 22.0, 11.0, 0.0, 55.0)),
    ];

    let build = build_series(rows);

    assert_eq!(build.series.len(), 1);
    assert_eq!(build.duplicates_removed, 1);
    assert_eq!(build.series.records()[0].max_temp, 20.0);
    assert_eq!(build.series.records()[0].humidity, 50.0);
}

#[test]
fn test_first_occurrence_is_by_input_order_not_sorted_position() {
    let rows = vec![
        accepted(record("2024-03-02", 1.0, 0.0, 0.0, 10.0)),
        accepted(record("2024-03-01", 2.0, 0.0, 0.0, 20.0)),
        accepted(record("2024-03-02", 3.0, 0.0, 0.0, 30.0)),
        accepted(record("2024-03-01", 4.0, 0.0, 0.0, 40.0)),
        accepted(record("2024-03-02", 5.0, 0.0, 0.0, 50.0)),
    ];

    let build = build_series(rows);

    assert_eq!(build.duplicates_removed, 3);
    let kept: Vec<f64> = build.series.values(Measurement::MaxTemp).collect();
    assert_eq!(kept, vec![2.0, 1.0]);
}

#[test]
fn test_extra_columns_are_discarded() {
    let mut row = accepted(record("2024-01-01", 10.0, 2.0, 0.0, 80.0));
    row.extra.insert("Wind (km/h)".to_string(), "14".to_string());

    let build = build_series(vec![row]);

    assert_eq!(build.series.records(), &[record("2024-01-01", 10.0, 2.0, 0.0, 80.0)]);
}

#[test]
fn test_empty_input_gives_empty_series() {
    let build = build_series(Vec::new());

    assert!(build.series.is_empty());
    assert_eq!(build.duplicates_removed, 0);
    assert_eq!(build.series.first_date(), None);
    assert_eq!(build.series.last_date(), None);
}

#[test]
fn test_series_dates_strictly_increasing() {
    let rows = vec![
        accepted(record("2024-05-02", 1.0, 0.0, 0.0, 1.0)),
        accepted(record("2023-12-31", 1.0, 0.0, 0.0, 1.0)),
        accepted(record("2024-05-02", 1.0, 0.0, 0.0, 1.0)),
        accepted(record("2024-01-01", 1.0, 0.0, 0.0, 1.0)),
    ];

    let build = build_series(rows);

    assert!(build.series.records().windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(build.series.first_date(), Some(date("2023-12-31")));
    assert_eq!(build.series.last_date(), Some(date("2024-05-02")));
}

#[test]
fn test_series_lookup_by_date() {
    let series = three_month_series();

    let found = series.get(date("2024-02-11")).unwrap();
    assert_eq!(found.rainfall, 0.5);
    assert!(series.get(date("2024-02-12")).is_none());
}
