//! Test utilities for station parser testing

use calamine::Data;

use super::column_mapping::required_width;

mod parser_tests;

/// Build a full-width row from `(column, value)` pairs
pub fn row_with(cells: &[(usize, Data)]) -> Vec<Data> {
    let mut row = vec![Data::Empty; required_width()];
    for (index, value) in cells {
        row[*index] = value.clone();
    }
    row
}

pub fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

/// A complete row for 강남 with text coordinates
pub fn gangnam_row() -> Vec<Data> {
    row_with(&[
        (0, text("서울교통공사")),
        (1, text("2호선")),
        (2, text("ignored")),
        (3, Data::Float(222.0)),
        (4, text("강남")),
        (5, text("Gangnam")),
        (6, text("-")),
        (7, text("江南")),
        (8, text("江南")),
        (9, text("江南")),
        (10, text("해당없음")),
        (11, text("있음")),
        (12, text("신분당선")),
        (18, text("127.027")),
        (19, text("37.497")),
        (21, text(" 서울특별시 강남구 강남대로 지하 396 ")),
        (22, text("02-6110-2221")),
        (23, text("")),
        (27, text("2024-01-01")),
    ])
}
