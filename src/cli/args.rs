//! Command-line argument definitions for xlsx2geojson

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the railway station converter
#[derive(Debug, Clone, Parser)]
#[command(
    name = "xlsx2geojson",
    version,
    about = "Convert 전국 도시광역철도 역사정보 xlsx to GeoJSON.",
    long_about = "Reads the active worksheet of the South Korean urban railway station \
                  spreadsheet and writes railway-stations-south-korea.geojson to the \
                  current directory. Rows without coordinates are skipped."
)]
pub struct Args {
    /// Path to the input spreadsheet
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,
}

impl Args {
    /// Build the run configuration from these arguments
    pub fn to_config(&self) -> Config {
        Config::new(&self.filename)
    }
}
