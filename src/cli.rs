//! Command-line interface components.

use crate::config::PipelineConfig;
use crate::constants::LOG_TARGET;
use crate::io::{export_cleaned_series, load_raw_records, render_report, write_report};
use crate::models::Measurement;
use crate::pipeline::{PipelineOutcome, run_pipeline};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "weather-summary")]
#[command(about = "Clean a daily weather table and summarise it by day and by month")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Raw daily weather table (CSV); defaults to sample_weather_data.csv
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Where to write the cleaned series
    #[arg(short = 'o', long = "cleaned", value_name = "PATH")]
    pub cleaned_output: Option<PathBuf>,

    /// Where to write the Markdown summary
    #[arg(short = 'r', long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not write the cleaned series
    #[arg(long)]
    pub no_export: bool,

    /// Do not write the Markdown summary
    #[arg(long)]
    pub no_report: bool,

    /// Warn when more than this share of rows is dropped (0.0 - 1.0)
    #[arg(long, value_name = "RATIO")]
    pub max_drop_ratio: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Build the run configuration: defaults, then config file, then flags
    pub fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(cleaned) = &self.cleaned_output {
            config.cleaned_output_path = cleaned.clone();
        }
        if let Some(report) = &self.report {
            config.report_path = report.clone();
        }
        if let Some(ratio) = self.max_drop_ratio {
            config.max_drop_ratio = Some(ratio);
        }
        if self.no_export {
            config.write_cleaned = false;
        }
        if self.no_report {
            config.write_report = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Run the whole tool for one configuration
pub fn run(config: &PipelineConfig) -> Result<PipelineOutcome> {
    let table = load_raw_records(&config.input_path).with_context(|| {
        format!(
            "Failed to load weather data from {}",
            config.input_path.display()
        )
    })?;

    let outcome = run_pipeline(table.records);

    let ratio = outcome.diagnostics.drop_ratio();
    if config.exceeds_drop_ratio(ratio) {
        warn!(
            "{:.1}% of rows were dropped during cleaning ({})",
            ratio * 100.0,
            outcome.diagnostics.summary()
        );
    }

    if config.write_cleaned {
        export_cleaned_series(&outcome.series, &config.cleaned_output_path)
            .context("Failed to export cleaned data")?;
    } else {
        info!("Cleaned data export disabled");
    }

    if config.write_report {
        let report = render_report(
            outcome.facts.as_ref(),
            outcome.daily.as_ref(),
            &outcome.buckets,
        )
        .context("Failed to render summary report")?;
        write_report(&config.report_path, &report).context("Failed to write summary report")?;
    } else {
        info!("Report generation disabled");
    }

    Ok(outcome)
}

/// Print a coloured run summary to stdout
pub fn print_summary(outcome: &PipelineOutcome, config: &PipelineConfig) {
    let diag = &outcome.diagnostics;

    println!("{}", "Weather Data Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Input:".bright_cyan(),
        config.input_path.display()
    );
    println!(
        "  {} {} of {}",
        "Rows kept:".bright_cyan(),
        diag.series_len.to_string().bright_white().bold(),
        diag.total_rows
    );
    if diag.dropped() > 0 {
        println!(
            "  {} {} missing fields, {} unparsable dates, {} duplicate dates",
            "Dropped:".bright_red(),
            diag.missing_field.to_string().bright_red(),
            diag.unparsable_date.to_string().bright_red(),
            diag.duplicates_removed.to_string().bright_red()
        );
    }

    let (Some(daily), Some(facts)) = (&outcome.daily, &outcome.facts) else {
        println!(
            "\n{}",
            "No data: no rows survived cleaning".bright_yellow().bold()
        );
        return;
    };

    println!(
        "  {} {} to {}",
        "Period:".bright_cyan(),
        facts.period_start,
        facts.period_end
    );

    println!("\n{}", "Daily statistics".bright_yellow());
    println!(
        "  {:<16} {:>10} {:>10} {:>10} {:>10}",
        "", "mean", "min", "max", "std"
    );
    for measurement in Measurement::ALL {
        let stats = daily.get(measurement);
        println!(
            "  {:<16} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            measurement.header(),
            stats.mean,
            stats.min,
            stats.max,
            stats.std
        );
    }

    println!("\n{}", "Monthly rainfall".bright_yellow());
    for (month, total) in crate::pipeline::monthly_rainfall_totals(&outcome.buckets) {
        println!("  {} {:>10.2} mm", month, total);
    }

    println!(
        "\n  {} {} ({:.2} mm)",
        "Peak rainfall month:".bright_cyan(),
        facts.peak_rainfall.month.month_name().bright_white().bold(),
        facts.peak_rainfall.total
    );
    println!(
        "  {} {:.1} °C",
        "Maximum temperature:".bright_cyan(),
        facts.max_temp_overall
    );

    if config.write_cleaned {
        println!(
            "  {} {}",
            "Cleaned data:".bright_cyan(),
            config.cleaned_output_path.display()
        );
    }
    if config.write_report {
        println!(
            "  {} {}",
            "Report:".bright_cyan(),
            config.report_path.display()
        );
    }
}
