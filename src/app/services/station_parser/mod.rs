//! Station parser for the railway station worksheet
//!
//! ## Architecture
//!
//! - [`column_mapping`] - The fixed column-to-field table
//! - [`parser`] - Row parsing and coordinate filtering
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use xlsx2geojson::app::services::station_parser::StationParser;
//! use xlsx2geojson::app::services::workbook_reader::read_active_sheet;
//!
//! # fn example() -> xlsx2geojson::Result<()> {
//! let sheet = read_active_sheet(std::path::Path::new("stations.xlsx"))?;
//! let result = StationParser::new(1).parse_sheet(&sheet)?;
//!
//! println!("Parsed {} stations from {} rows",
//!          result.stats.stations_parsed,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod parser;
pub mod stats;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnSpec, STATION_COLUMNS, StationField};
pub use parser::{StationParser, StationRow};
pub use stats::{ParseResult, ParseStats};
