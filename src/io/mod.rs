//! File collaborators around the pipeline
//!
//! - [`loader`] - CSV table to raw rows
//! - [`exporter`] - Cleaned series to CSV
//! - [`report_writer`] - Facts and statistics to a Markdown report

pub mod exporter;
pub mod loader;
pub mod report_writer;

pub use exporter::{export_cleaned_series, write_cleaned_series};
pub use loader::{ColumnMapping, RawTable, load_raw_records, parse_raw_records};
pub use report_writer::{render_report, write_report};
