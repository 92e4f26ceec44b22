//! Command implementation for the xlsx2geojson CLI
//!
//! Sets up logging, runs the conversion and reports the result.

use crate::app::services::converter::{ConversionReport, convert};
use crate::cli::args::Args;
use crate::constants::DEFAULT_LOG_FILTER;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the default filter.
pub fn setup_logging() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized");
    Ok(())
}

/// Main command runner
pub fn run(args: Args) -> Result<ConversionReport> {
    setup_logging()?;
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    let report = convert(&config).with_context(|| {
        format!(
            "Failed to convert {} to GeoJSON",
            config.input_path.display()
        )
    })?;

    info!(
        "Wrote {} features to {} ({} rows, {} skipped, {:.1?})",
        report.stats.stations_parsed,
        report.output_path.display(),
        report.stats.total_rows,
        report.stats.rows_skipped,
        report.elapsed
    );

    Ok(report)
}
