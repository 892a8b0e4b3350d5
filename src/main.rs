//! CLI entry point for the place statistics tool.
//!
//! Joins a location list with a metadata list and prints per-type counts,
//! average ratings, the most reviewed location, and locations lacking metadata.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use place_stats::output::{print_pretty, render_json, render_text};
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "place_stats")]
#[command(about = "Summarize locations joined with their metadata", long_about = None)]
struct Cli {
    /// Path or URL of the JSON location list
    #[arg(
        short,
        long,
        value_name = "FILE_OR_URL",
        env = "PLACE_STATS_LOCATIONS",
        default_value = "locations.json"
    )]
    locations: String,

    /// Path or URL of the JSON metadata list
    #[arg(
        short,
        long,
        value_name = "FILE_OR_URL",
        env = "PLACE_STATS_METADATA",
        default_value = "metadata.json"
    )]
    metadata: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing()?;

    let cli = Cli::parse();

    let result = place_stats::run(&cli.locations, &cli.metadata)
        .await
        .context("Failed to load input records")?;
    print_pretty(&result);

    match cli.format {
        Format::Text => print!("{}", render_text(&result)),
        Format::Json => println!("{}", render_json(&result)?),
    }

    Ok(())
}

/// Colored stderr logs plus a JSON rolling log file.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/place_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("place_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
