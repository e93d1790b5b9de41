//! CSV loading for raw weather tables
//!
//! Locates the date and measurement columns by header name, so column order
//! in the file does not matter. Cells are passed through as text for the
//! validator to judge, except for blank cells and missing-value tokens which
//! become the absent marker.

use crate::constants::{MISSING_TOKENS, column_aliases, columns};
use crate::error::{Result, WeatherError};
use crate::models::{Measurement, RawRecord};
use csv::{ByteRecord, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Raw rows plus the header they were read with
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Column positions for the tracked fields
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub date: usize,
    pub max_temp: usize,
    pub min_temp: usize,
    pub rainfall: usize,
    pub humidity: usize,
    /// Untracked columns as (index, header)
    pub extra: Vec<(usize, String)>,
}

impl ColumnMapping {
    /// Resolve tracked columns from a header row
    ///
    /// Display headers and snake_case aliases are both accepted. The first
    /// missing column is reported by its display header.
    pub fn analyze(headers: &StringRecord) -> std::result::Result<Self, String> {
        let name_to_index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (header.trim(), index))
            .collect();

        let find = |display: &str, alias: &str| {
            name_to_index
                .get(display)
                .or_else(|| name_to_index.get(alias))
                .copied()
                .ok_or_else(|| display.to_string())
        };

        let date = find(columns::DATE, column_aliases::DATE)?;
        let max_temp = find(columns::MAX_TEMP, column_aliases::MAX_TEMP)?;
        let min_temp = find(columns::MIN_TEMP, column_aliases::MIN_TEMP)?;
        let rainfall = find(columns::RAINFALL, column_aliases::RAINFALL)?;
        let humidity = find(columns::HUMIDITY, column_aliases::HUMIDITY)?;

        let tracked = [date, max_temp, min_temp, rainfall, humidity];
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| !tracked.contains(index))
            .map(|(index, header)| (index, header.trim().to_string()))
            .collect();

        Ok(Self {
            date,
            max_temp,
            min_temp,
            rainfall,
            humidity,
            extra,
        })
    }

    fn index_of(&self, measurement: Measurement) -> usize {
        match measurement {
            Measurement::MaxTemp => self.max_temp,
            Measurement::MinTemp => self.min_temp,
            Measurement::Rainfall => self.rainfall,
            Measurement::Humidity => self.humidity,
        }
    }

    /// Convert one CSV row into a raw record
    pub fn to_raw_record(&self, row: &StringRecord) -> RawRecord {
        let cell = |index: usize| row.get(index).and_then(present);

        let [max_temp, min_temp, rainfall, humidity] =
            Measurement::ALL.map(|m| cell(self.index_of(m)));

        let extra = self
            .extra
            .iter()
            .filter_map(|(index, header)| {
                row.get(*index)
                    .map(|value| (header.clone(), value.trim().to_string()))
            })
            .collect();

        RawRecord {
            date: cell(self.date),
            max_temp,
            min_temp,
            rainfall,
            humidity,
            extra,
        }
    }
}

/// Map a cell to the absent marker or its trimmed text
fn present(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    let missing = MISSING_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token));
    (!missing).then(|| trimmed.to_string())
}

/// Decode a row cell by cell
///
/// Invalid UTF-8 is replaced rather than rejected, so one mis-encoded cell
/// costs at most its own row instead of the whole table.
fn decode_lossy(row: &ByteRecord) -> StringRecord {
    let cells: Vec<String> = row
        .iter()
        .map(|cell| String::from_utf8_lossy(cell).into_owned())
        .collect();
    StringRecord::from(cells)
}

/// Load a raw table from a CSV file
pub fn load_raw_records(path: &Path) -> Result<RawTable> {
    info!("Loading weather data from {}", path.display());

    let file = File::open(path).map_err(|e| WeatherError::io(path, e))?;
    let table = parse_raw_records(file, path)?;

    info!(
        "Loaded {} rows with {} columns",
        table.len(),
        table.headers.len()
    );
    debug!("Columns: {}", table.headers.join(", "));
    if let Some(first) = table.records.first() {
        debug!("First row: {:?}", first);
    }

    Ok(table)
}

/// Parse a raw table from any reader
///
/// `source` names the input in error messages.
pub fn parse_raw_records<R: Read>(reader: R, source: &Path) -> Result<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let header_row = decode_lossy(
        csv_reader
            .byte_headers()
            .map_err(|e| WeatherError::csv(source, e))?,
    );

    let mapping =
        ColumnMapping::analyze(&header_row).map_err(|column| WeatherError::MissingColumn {
            path: source.to_path_buf(),
            column,
        })?;

    let mut records = Vec::new();
    for row in csv_reader.byte_records() {
        let row = row.map_err(|e| WeatherError::csv(source, e))?;
        records.push(mapping.to_raw_record(&decode_lossy(&row)));
    }

    Ok(RawTable {
        headers: header_row.iter().map(str::to_string).collect(),
        records,
    })
}
