//! Tests for station row parsing

use super::*;
use crate::Error;
use crate::app::services::station_parser::parser::{StationParser, parse_row, parse_rows};
use crate::app::services::workbook_reader::{ActiveSheet, SheetRow};
use calamine::Range;

#[test]
fn test_parse_complete_row() {
    let cells = gangnam_row();
    let row = SheetRow::new(2, 0, &cells);

    let station = parse_row(&row).unwrap().into_station().unwrap();

    assert_eq!(station.operator_name.as_deref(), Some("서울교통공사"));
    assert_eq!(station.line_name.as_deref(), Some("2호선"));
    assert_eq!(station.station_number.as_deref(), Some("222"));
    assert_eq!(station.korean_name.as_deref(), Some("강남"));
    assert_eq!(station.romanized_name, None);
    assert_eq!(station.sub_name, None);
    assert!(station.has_transfer);
    assert_eq!(station.longitude, 127.027);
    assert_eq!(station.latitude, 37.497);
    assert_eq!(
        station.road_address.as_deref(),
        Some("서울특별시 강남구 강남대로 지하 396")
    );
    assert_eq!(station.opening_date, None);
    assert_eq!(station.data_reference_date.as_deref(), Some("2024-01-01"));
}

#[test]
fn test_parse_row_with_missing_transfer_defaults_false() {
    let mut cells = gangnam_row();
    cells[11] = Data::Empty;
    let row = SheetRow::new(2, 0, &cells);

    let parsed = parse_row(&row).unwrap();
    assert!(!parsed.station.has_transfer);
}

#[test]
fn test_row_missing_longitude_is_not_a_station() {
    let mut cells = gangnam_row();
    cells[18] = text("-");
    let row = SheetRow::new(2, 0, &cells);

    let parsed = parse_row(&row).unwrap();
    assert_eq!(parsed.longitude, None);
    assert_eq!(parsed.latitude, Some(37.497));
    assert!(parsed.into_station().is_none());
}

#[test]
fn test_short_row_reads_missing_columns_as_empty() {
    let cells = vec![text("서울교통공사"), text("1호선")];
    let row = SheetRow::new(5, 0, &cells);

    let parsed = parse_row(&row).unwrap();
    assert_eq!(parsed.station.operator_name.as_deref(), Some("서울교통공사"));
    assert_eq!(parsed.longitude, None);
}

#[test]
fn test_coordinates_fill_station_only_when_both_present() {
    let cells = gangnam_row();
    let row = SheetRow::new(2, 0, &cells);

    let parsed = parse_row(&row).unwrap();
    assert_eq!(parsed.station.longitude, 0.0);
    assert_eq!(parsed.station.korean_name.as_deref(), Some("강남"));

    let station = parsed.clone().into_station().unwrap();
    assert_eq!((station.longitude, station.latitude), (127.027, 37.497));
    assert_eq!(station.korean_name, parsed.station.korean_name);
}

#[test]
fn test_non_numeric_coordinate_is_fatal() {
    let mut cells = gangnam_row();
    cells[18] = text("abc");
    let row = SheetRow::new(7, 0, &cells);

    let err = parse_row(&row).unwrap_err();
    match err {
        Error::InvalidCell {
            row, column, field, ..
        } => {
            assert_eq!(row, 7);
            assert_eq!(column, 18);
            assert_eq!(field, "경도");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_rows_drops_missing_coordinates_and_keeps_order() {
    let mut first = gangnam_row();
    first[4] = text("첫째");
    let mut dropped = gangnam_row();
    dropped[4] = text("빠짐");
    dropped[19] = text("해당없음");
    let mut unnamed = gangnam_row();
    unnamed[4] = Data::Empty;
    unnamed[18] = Data::Empty;
    let mut last = gangnam_row();
    last[4] = text("마지막");
    last[18] = Data::Float(126.9);

    let rows = [first, dropped, unnamed, last];
    let result = parse_rows(
        rows.iter()
            .enumerate()
            .map(|(i, cells)| SheetRow::new(i + 2, 0, cells)),
    )
    .unwrap();

    let names: Vec<&str> = result
        .stations
        .iter()
        .map(|station| station.display_name())
        .collect();
    assert_eq!(names, vec!["첫째", "마지막"]);
    assert_eq!(result.stations[1].longitude, 126.9);

    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.stats.stations_parsed, 2);
    assert_eq!(result.stats.rows_skipped, 2);
    assert_eq!(
        result.stats.skipped,
        vec!["row 3: 빠짐".to_string(), "row 4: None".to_string()]
    );
    assert_eq!(result.stats.retention_rate(), 50.0);
}

#[test]
fn test_parse_rows_empty() {
    let result = parse_rows(std::iter::empty()).unwrap();
    assert!(result.stations.is_empty());
    assert_eq!(result.stats.total_rows, 0);
    assert_eq!(result.stats.retention_rate(), 0.0);
}

#[test]
fn test_parser_skips_header_row() {
    let header: Vec<Data> = (0..28).map(|i| text(&format!("col{}", i))).collect();
    let data = gangnam_row();

    let mut range: Range<Data> = Range::new((0, 0), (1, 27));
    for (column, value) in header.into_iter().enumerate() {
        range.set_value((0, column as u32), value);
    }
    for (column, value) in data.into_iter().enumerate() {
        range.set_value((1, column as u32), value);
    }

    let sheet = ActiveSheet {
        name: "Sheet1".to_string(),
        range,
    };
    let result = StationParser::default().parse_sheet(&sheet).unwrap();

    assert_eq!(result.stats.total_rows, 1);
    assert_eq!(result.stations.len(), 1);
    assert_eq!(result.stations[0].display_name(), "강남");
}
