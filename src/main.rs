//! CLI entry point for the vitals cleaning pipeline.

use anyhow::{Result, anyhow};
use clap::Parser;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::info;
use vitals_processing::{Pipeline, PipelineConfig, dataset};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Patient vitals data cleaning pipeline",
    long_about = "Cleans a table of patient vitals in four steps: mean imputation,\n\
                  duplicate removal, z-score outlier filtering, and standardization.\n\n\
                  EXAMPLES:\n  \
                  # Clean the embedded 20-patient dataset\n  \
                  vitals-processing\n\n  \
                  # Clean a CSV with the same columns\n  \
                  vitals-processing -i vitals.csv\n\n  \
                  # Machine-readable summary\n  \
                  vitals-processing --json"
)]
struct Args {
    /// Path to a CSV file to process (defaults to the embedded dataset)
    #[arg(short, long)]
    input: Option<String>,

    /// Z-score magnitude threshold for outlier filtering
    #[arg(long, default_value = "3.0")]
    zscore_threshold: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the final result)
    #[arg(short, long)]
    quiet: bool,

    /// Output a JSON summary to stdout instead of the rendered table
    ///
    /// Disables all progress logs; only outputs the final JSON.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_csv(path: &str) -> Result<DataFrame> {
    if !std::path::Path::new(path).exists() {
        return Err(anyhow!("Input file not found: {}", path));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;
    Ok(df)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let data = match &args.input {
        Some(path) => {
            info!("Loading dataset from: {}", path);
            load_csv(path)?
        }
        None => {
            info!("Using the embedded patient vitals dataset");
            dataset::patient_vitals()?
        }
    };
    info!("Dataset loaded: {:?}", data.shape());

    let config = PipelineConfig::builder()
        .zscore_threshold(args.zscore_threshold)
        .build()?;

    let result = Pipeline::new(config)?.process(data)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        println!("\nCleaned Healthcare Data:\n{}", result.data);
        if !args.quiet && !result.summary.processing_steps.is_empty() {
            println!("Applied steps:");
            for step in &result.summary.processing_steps {
                println!("  - {step}");
            }
        }
    }

    Ok(())
}
