//! Configuration management and validation.
//!
//! Provides the run configuration for the command-line tool: where the raw
//! table is read from, where cleaned data and the report are written, and
//! which outputs are produced. Values are layered: defaults, then an
//! optional JSON file, then command-line overrides.

use crate::constants::{DEFAULT_CLEANED_FILE, DEFAULT_INPUT_FILE, DEFAULT_REPORT_FILE};
use crate::error::{Result, WeatherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Run configuration for the weather summary tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Raw daily weather table (CSV)
    pub input_path: PathBuf,

    /// Destination for the cleaned series
    pub cleaned_output_path: PathBuf,

    /// Destination for the Markdown summary
    pub report_path: PathBuf,

    /// Write the cleaned series
    pub write_cleaned: bool,

    /// Write the Markdown summary
    pub write_report: bool,

    /// Warn when more than this share of rows is dropped (0.0 - 1.0)
    pub max_drop_ratio: Option<f64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            cleaned_output_path: PathBuf::from(DEFAULT_CLEANED_FILE),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            write_cleaned: true,
            write_report: true,
            max_drop_ratio: None,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Reading configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| WeatherError::io(path, e))?;
        let config: PipelineConfig =
            serde_json::from_str(&content).map_err(|e| WeatherError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// Set the input table path
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the cleaned-data output path
    pub fn with_cleaned_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.cleaned_output_path = path.into();
        self
    }

    /// Set the report output path
    pub fn with_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Set the dropped-row warning threshold
    pub fn with_max_drop_ratio(mut self, ratio: f64) -> Self {
        self.max_drop_ratio = Some(ratio);
        self
    }

    /// Skip writing the cleaned series
    pub fn without_cleaned_export(mut self) -> Self {
        self.write_cleaned = false;
        self
    }

    /// Skip writing the report
    pub fn without_report(mut self) -> Self {
        self.write_report = false;
        self
    }

    /// Validate configuration values
    ///
    /// Checks for:
    /// - A non-empty input path
    /// - No enabled output overwriting the input
    /// - The report and cleaned export not sharing a path
    /// - A drop ratio within [0, 1]
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(WeatherError::configuration("Input path cannot be empty"));
        }

        if self.write_cleaned && self.cleaned_output_path == self.input_path {
            return Err(WeatherError::configuration(format!(
                "Cleaned output path {} would overwrite the input table",
                self.cleaned_output_path.display()
            )));
        }

        if self.write_report && self.report_path == self.input_path {
            return Err(WeatherError::configuration(format!(
                "Report path {} would overwrite the input table",
                self.report_path.display()
            )));
        }

        if self.write_cleaned && self.write_report && self.report_path == self.cleaned_output_path
        {
            return Err(WeatherError::configuration(format!(
                "Report and cleaned output both target {}",
                self.report_path.display()
            )));
        }

        if let Some(ratio) = self.max_drop_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(WeatherError::configuration(format!(
                    "max_drop_ratio {} must be between 0 and 1",
                    ratio
                )));
            }
        }

        Ok(())
    }

    /// True when the given drop ratio is above the configured threshold
    pub fn exceeds_drop_ratio(&self, ratio: f64) -> bool {
        self.max_drop_ratio.is_some_and(|limit| ratio > limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_path, PathBuf::from("sample_weather_data.csv"));
        assert_eq!(config.cleaned_output_path, PathBuf::from("cleaned_weather_data.csv"));
        assert_eq!(config.report_path, PathBuf::from("weather_summary.md"));
        assert!(config.write_cleaned);
        assert!(config.write_report);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_input("in.csv")
            .with_cleaned_output("out/clean.csv")
            .with_report("out/report.md")
            .with_max_drop_ratio(0.25)
            .without_report();

        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.cleaned_output_path, PathBuf::from("out/clean.csv"));
        assert!(!config.write_report);
        assert!(config.exceeds_drop_ratio(0.3));
        assert!(!config.exceeds_drop_ratio(0.25));
    }

    #[test]
    fn test_validate_rejects_overwriting_input() {
        let config = PipelineConfig::default()
            .with_input("data.csv")
            .with_cleaned_output("data.csv");
        assert!(config.validate().is_err());

        assert!(config.without_cleaned_export().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_report_over_input() {
        let config = PipelineConfig::default()
            .with_input("data.csv")
            .with_report("data.csv");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("overwrite the input"));

        assert!(config.without_report().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_shared_output_path() {
        let config = PipelineConfig::default()
            .with_cleaned_output("out.csv")
            .with_report("out.csv");
        assert!(config.validate().is_err());

        assert!(config.clone().without_report().validate().is_ok());
        assert!(config.without_cleaned_export().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let config = PipelineConfig::default().with_max_drop_ratio(1.5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_drop_ratio"));
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        let config = PipelineConfig::default().with_input("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "input_path": "station.csv", "write_report": false }"#).unwrap();

        let config = PipelineConfig::load(&path).unwrap();

        assert_eq!(config.input_path, PathBuf::from("station.csv"));
        assert!(!config.write_report);
        assert_eq!(config.report_path, PathBuf::from("weather_summary.md"));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "inptu_path": "typo.csv" }"#).unwrap();

        let err = PipelineConfig::load(&path).unwrap_err();
        assert!(matches!(err, WeatherError::ConfigParse { .. }));
    }
}
