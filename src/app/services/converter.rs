//! Workbook to GeoJSON conversion
//!
//! Runs the whole pipeline for one [`Config`]: read the active worksheet,
//! parse station rows, write the FeatureCollection. Nothing is written unless
//! every step succeeds.

use crate::app::services::geojson_writer::write_geojson;
use crate::app::services::station_parser::{ParseStats, StationParser};
use crate::app::services::workbook_reader::read_active_sheet;
use crate::config::Config;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Summary of a finished conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub sheet_name: String,
    pub stats: ParseStats,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

/// Convert `config.input_path` into `config.output_path`
pub fn convert(config: &Config) -> Result<ConversionReport> {
    let start_time = Instant::now();
    config.validate()?;

    info!("File: {}", config.input_path.display());

    let sheet = read_active_sheet(&config.input_path)?;
    let result = StationParser::new(config.header_rows).parse_sheet(&sheet)?;

    let bytes_written = write_geojson(&result.stations, &config.output_path)?;

    Ok(ConversionReport {
        input_path: config.input_path.clone(),
        output_path: config.output_path.clone(),
        sheet_name: sheet.name,
        stats: result.stats,
        bytes_written,
        elapsed: start_time.elapsed(),
    })
}
