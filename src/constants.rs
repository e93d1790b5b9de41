//! Application constants for the weather summary tool
//!
//! Column headers, default file locations and the date formats accepted
//! when validating raw rows.

// =============================================================================
// Column Headers
// =============================================================================

/// Column headers as they appear in the source weather table
pub mod columns {
    pub const DATE: &str = "Date";
    pub const MAX_TEMP: &str = "Max Temp (°C)";
    pub const MIN_TEMP: &str = "Min Temp (°C)";
    pub const RAINFALL: &str = "Rainfall (mm)";
    pub const HUMIDITY: &str = "Humidity (%)";

    /// Header row written by the cleaned-data exporter
    pub const CLEANED_HEADER: [&str; 5] = [DATE, MAX_TEMP, MIN_TEMP, RAINFALL, HUMIDITY];
}

/// snake_case aliases accepted by the loader in place of the display headers
pub mod column_aliases {
    pub const DATE: &str = "date";
    pub const MAX_TEMP: &str = "max_temp";
    pub const MIN_TEMP: &str = "min_temp";
    pub const RAINFALL: &str = "rainfall";
    pub const HUMIDITY: &str = "humidity";
}

/// Cell contents treated as an absent value (compared case-insensitively)
pub const MISSING_TOKENS: &[&str] = &["", "na", "n/a", "nan", "null"];

// =============================================================================
// Date Parsing
// =============================================================================

/// Year-first date formats accepted for the date column
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Year-first datetime formats; the time component is discarded
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date format used when writing the cleaned series
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Default Paths
// =============================================================================

pub const DEFAULT_INPUT_FILE: &str = "sample_weather_data.csv";
pub const DEFAULT_CLEANED_FILE: &str = "cleaned_weather_data.csv";
pub const DEFAULT_REPORT_FILE: &str = "weather_summary.md";

/// Environment filter target used when RUST_LOG is unset
pub const LOG_TARGET: &str = "weather_summary";
