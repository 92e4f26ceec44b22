//! Row parsing for the station worksheet
//!
//! Each data row is coerced column by column through [`STATION_COLUMNS`].
//! Rows without both coordinates are dropped with a warning; any coercion
//! failure aborts parsing.

use super::column_mapping::{STATION_COLUMNS, StationField};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Station;
use crate::app::services::cell_coercion::{CellValue, coerce};
use crate::app::services::workbook_reader::{ActiveSheet, SheetRow, data_rows};
use crate::Result;
use tracing::{debug, info, warn};

/// Coerced row before the coordinate check
///
/// Every field except the coordinates is stored straight into `station`;
/// its own coordinates stay at zero until [`StationRow::into_station`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationRow {
    pub station: Station,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl StationRow {
    /// Store a coerced value in the slot for `field`
    pub fn apply(&mut self, field: StationField, value: CellValue) -> Result<()> {
        let key = field.key();
        let station = &mut self.station;
        match field {
            StationField::OperatorName => station.operator_name = value.into_text(key)?,
            StationField::LineName => station.line_name = value.into_text(key)?,
            StationField::StationNumber => station.station_number = value.into_text(key)?,
            StationField::KoreanName => station.korean_name = value.into_text(key)?,
            StationField::EnglishName => station.english_name = value.into_text(key)?,
            StationField::RomanizedName => station.romanized_name = value.into_text(key)?,
            StationField::JapaneseName => station.japanese_name = value.into_text(key)?,
            StationField::ChineseSimplifiedName => {
                station.chinese_simplified_name = value.into_text(key)?
            }
            StationField::ChineseTraditionalName => {
                station.chinese_traditional_name = value.into_text(key)?
            }
            StationField::SubName => station.sub_name = value.into_text(key)?,
            StationField::HasTransfer => station.has_transfer = value.into_bool(key)?,
            StationField::TransferLineNames => {
                station.transfer_line_names = value.into_text(key)?
            }
            StationField::Longitude => self.longitude = value.into_decimal(key)?,
            StationField::Latitude => self.latitude = value.into_decimal(key)?,
            StationField::RoadAddress => station.road_address = value.into_text(key)?,
            StationField::PhoneNumber => station.phone_number = value.into_text(key)?,
            StationField::OpeningDate => station.opening_date = value.into_text(key)?,
            StationField::DataReferenceDate => {
                station.data_reference_date = value.into_text(key)?
            }
        }
        Ok(())
    }

    /// Promote to a [`Station`] when both coordinates are present
    pub fn into_station(self) -> Option<Station> {
        Some(Station {
            longitude: self.longitude?,
            latitude: self.latitude?,
            ..self.station
        })
    }
}

/// Coerce every mapped column of `row`
pub fn parse_row(row: &SheetRow<'_>) -> Result<StationRow> {
    let mut station = StationRow::default();

    for spec in STATION_COLUMNS {
        let value = coerce(row.cell(spec.index), spec.target)
            .map_err(|e| e.at_cell(row.number, spec.index, spec.field.key()))?;
        station.apply(spec.field, value)?;
    }

    Ok(station)
}

/// Parse rows in order, dropping those without coordinates
pub fn parse_rows<'a, I>(rows: I) -> Result<ParseResult>
where
    I: IntoIterator<Item = SheetRow<'a>>,
{
    let mut stations = Vec::new();
    let mut stats = ParseStats::new();

    for row in rows {
        let parsed = parse_row(&row)?;
        let name = parsed.station.korean_name.clone();

        match parsed.into_station() {
            Some(station) => {
                stations.push(station);
                stats.record_station();
            }
            None => {
                let name = name.as_deref().unwrap_or("None");
                warn!(
                    "Skipping station with missing coordinates: {} (row {})",
                    name, row.number
                );
                stats.record_skip(format!("row {}: {}", row.number, name));
            }
        }
    }

    Ok(ParseResult { stations, stats })
}

/// Parser for the active worksheet
#[derive(Debug, Clone)]
pub struct StationParser {
    header_rows: usize,
}

impl StationParser {
    /// Create a parser that skips `header_rows` leading rows
    pub fn new(header_rows: usize) -> Self {
        Self { header_rows }
    }

    /// Parse every data row of `sheet`
    pub fn parse_sheet(&self, sheet: &ActiveSheet) -> Result<ParseResult> {
        debug!(
            "Parsing worksheet '{}' (skipping {} header rows)",
            sheet.name, self.header_rows
        );

        let result = parse_rows(data_rows(&sheet.range, self.header_rows))?;

        info!("Parsed {} stations.", result.stats.stations_parsed);
        if result.stats.rows_skipped > 0 {
            debug!(
                "{} of {} rows skipped for missing coordinates",
                result.stats.rows_skipped, result.stats.total_rows
            );
        }

        Ok(result)
    }
}

impl Default for StationParser {
    fn default() -> Self {
        Self::new(crate::constants::HEADER_ROWS)
    }
}
