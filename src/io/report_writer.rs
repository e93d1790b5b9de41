//! Markdown summary report
//!
//! Lays out the report facts, daily statistics and monthly buckets as
//! Markdown tables. Only the values are reported; no interpretation is added.

use crate::error::{Result, WeatherError};
use crate::models::Measurement;
use crate::pipeline::{AggregationRule, DailyStats, MonthBucket, ReportFacts};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

const TITLE: &str = "# Weather Data Analysis Report";

/// Render the report as Markdown
///
/// Falls back to a short "no data" report when facts or statistics are
/// unavailable.
pub fn render_report(
    facts: Option<&ReportFacts>,
    daily: Option<&DailyStats>,
    buckets: &[MonthBucket],
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{TITLE}")?;
    writeln!(out)?;

    let (Some(facts), Some(daily)) = (facts, daily) else {
        writeln!(out, "No data available: no rows survived cleaning.")?;
        return Ok(out);
    };

    writeln!(out, "## 1. Overview")?;
    writeln!(
        out,
        "This report covers weather data from {} to {} ({} daily records).",
        facts.period_start.format("%B %Y"),
        facts.period_end.format("%B %Y"),
        daily.record_count
    )?;
    writeln!(out)?;

    writeln!(out, "## 2. Daily Statistics")?;
    writeln!(out)?;
    write!(out, "| Metric |")?;
    for measurement in Measurement::ALL {
        write!(out, " {} |", measurement.header())?;
    }
    writeln!(out)?;
    writeln!(out, "| :--- | :--- | :--- | :--- | :--- |")?;
    let rows: [(&str, fn(&crate::pipeline::FieldStats) -> f64); 4] = [
        ("Mean", |s| s.mean),
        ("Min", |s| s.min),
        ("Max", |s| s.max),
        ("Std", |s| s.std),
    ];
    for (label, pick) in rows {
        write!(out, "| **{label}** |")?;
        for (_, stats) in daily.iter() {
            write!(out, " {:.2} |", pick(stats))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    writeln!(out, "## 3. Monthly Aggregates")?;
    writeln!(out)?;
    writeln!(
        out,
        "| Month | Max Temp mean | Max Temp min | Max Temp max | Rainfall total (mm) | Humidity mean (%) |"
    )?;
    writeln!(out, "| :--- | :--- | :--- | :--- | :--- | :--- |")?;
    for bucket in buckets {
        write!(out, "| {} |", bucket.month)?;
        let cells = [
            (Measurement::MaxTemp, AggregationRule::Mean),
            (Measurement::MaxTemp, AggregationRule::Min),
            (Measurement::MaxTemp, AggregationRule::Max),
            (Measurement::Rainfall, AggregationRule::Sum),
            (Measurement::Humidity, AggregationRule::Mean),
        ];
        for (measurement, rule) in cells {
            match bucket.value(measurement, rule) {
                Some(value) => write!(out, " {value:.2} |")?,
                None => write!(out, " - |")?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    writeln!(out, "## 4. Aggregation Highlight")?;
    writeln!(
        out,
        "- **Peak Rainfall Month:** {} showed the highest total rainfall of **{:.2} mm**.",
        facts.peak_rainfall.month.month_name(),
        facts.peak_rainfall.total
    )?;
    writeln!(
        out,
        "- **Maximum Temperature:** the highest recorded temperature was **{:.1} °C**.",
        facts.max_temp_overall
    )?;

    Ok(out)
}

/// Write a rendered report, creating parent directories as needed
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| WeatherError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| WeatherError::io(path, e))?;

    info!("Summary report saved to {}", path.display());
    Ok(())
}
