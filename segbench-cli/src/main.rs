//! segbench command-line driver
//!
//! ## Usage
//!
//! ```bash
//! # Report every metric for a match result
//! segbench report --match-result match.json --output report.json
//!
//! # Use a configuration file, overriding the metrics
//! segbench report --match-result match.json --config report_config.json \
//!     --metric accuracy --metric iou_per_label
//!
//! # List supported metrics
//! segbench metrics
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use segbench::{MatchResult, ReportConfig, TestMetric};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "segbench")]
#[command(author, version, about = "Evaluation reports for semantic segmentation models")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute metrics from a match result and write the report
    Report {
        /// Match result JSON file
        #[arg(short, long)]
        match_result: PathBuf,

        /// Report configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the report path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the metrics to report (repeatable, in report order)
        #[arg(long = "metric")]
        metrics: Vec<TestMetric>,
    },

    /// List supported metrics
    Metrics,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_report(
    match_result_path: PathBuf,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    metrics: Vec<TestMetric>,
) -> Result<()> {
    // Load configuration
    let mut config = match &config_path {
        Some(path) => ReportConfig::from_file(path)?,
        None => match &output {
            Some(output) => ReportConfig::new(output.clone()),
            None => bail!("Either --config or --output must be provided"),
        },
    };

    // Apply command line overrides
    if let Some(output) = output {
        config.report_path = output;
    }
    if !metrics.is_empty() {
        config.metrics = metrics;
    }

    tracing::info!(path = %match_result_path.display(), "loading match result");
    let match_result = MatchResult::load(&match_result_path).with_context(|| {
        format!(
            "Failed to load match result: {}",
            match_result_path.display()
        )
    })?;

    let metric_names: Vec<_> = config.metrics.iter().map(ToString::to_string).collect();
    tracing::info!(
        labels = match_result.nb_labels(),
        nb_pixels = match_result.nb_pixels(),
        metrics = ?metric_names,
        "generating report",
    );

    config.generate(&match_result).with_context(|| {
        format!(
            "Failed to generate report at {}",
            config.report_path.display()
        )
    })?;

    println!("Report written to {}", config.report_path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Report {
            match_result,
            config,
            output,
            metrics,
        } => run_report(match_result, config, output, metrics),

        Commands::Metrics => {
            println!("Supported metrics:");
            for metric in TestMetric::ALL {
                let scope = if metric.is_per_label() {
                    "per label"
                } else {
                    "global"
                };
                println!("  - {metric} ({}, {scope})", metric.score_name());
            }
            Ok(())
        }
    }
}
