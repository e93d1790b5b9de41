//! Cleaned series export
//!
//! Writes the deduplicated, date-ordered series as CSV with one row per day
//! and exactly the four tracked measurements.

use crate::constants::{OUTPUT_DATE_FORMAT, columns};
use crate::error::{Result, WeatherError};
use crate::pipeline::Series;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the series to a CSV file, creating parent directories as needed
pub fn export_cleaned_series(series: &Series, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| WeatherError::io(parent, e))?;
    }

    let file = fs::File::create(path).map_err(|e| WeatherError::io(path, e))?;
    write_cleaned_series(series, file, path)?;

    info!(
        "Cleaned data exported to {} ({} records)",
        path.display(),
        series.len()
    );
    Ok(())
}

/// Write the series as CSV to any writer
///
/// `target` names the destination in error messages.
pub fn write_cleaned_series<W: Write>(series: &Series, writer: W, target: &Path) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(columns::CLEANED_HEADER)
        .map_err(|e| WeatherError::csv(target, e))?;

    for record in series {
        csv_writer
            .write_record([
                record.date.format(OUTPUT_DATE_FORMAT).to_string(),
                record.max_temp.to_string(),
                record.min_temp.to_string(),
                record.rainfall.to_string(),
                record.humidity.to_string(),
            ])
            .map_err(|e| WeatherError::csv(target, e))?;
    }

    csv_writer.flush().map_err(|e| WeatherError::io(target, e))?;
    Ok(())
}
