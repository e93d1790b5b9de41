//! Weather Summary Library
//!
//! A Rust library for turning a raw daily weather table into a validated,
//! date-indexed series and the daily and monthly statistics a summary
//! report is built from.
//!
//! This library provides tools for:
//! - Validating raw rows for completeness and parseable dates
//! - Building a sorted, duplicate-free daily series
//! - Computing whole-series mean, minimum, maximum and standard deviation
//! - Aggregating the series into calendar-month buckets
//! - Deriving report facts such as the peak rainfall month
//! - Loading CSV tables, exporting cleaned data and writing Markdown reports

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use error::{Result, WeatherError};
pub use models::{Measurement, MonthKey, RawRecord, WeatherRecord};
pub use pipeline::{PipelineDiagnostics, PipelineOutcome, run_pipeline};
