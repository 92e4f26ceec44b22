//! Fixed column layout of the station worksheet
//!
//! The sheet is read by position, not by header text. [`STATION_COLUMNS`] is
//! the single place where column indices appear.

use crate::app::services::cell_coercion::TargetType;

/// Station field filled from one worksheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationField {
    OperatorName,
    LineName,
    StationNumber,
    KoreanName,
    EnglishName,
    RomanizedName,
    JapaneseName,
    ChineseSimplifiedName,
    ChineseTraditionalName,
    SubName,
    HasTransfer,
    TransferLineNames,
    Longitude,
    Latitude,
    RoadAddress,
    PhoneNumber,
    OpeningDate,
    DataReferenceDate,
}

impl StationField {
    /// Korean property name used in the output
    pub fn key(self) -> &'static str {
        match self {
            StationField::OperatorName => "운영기관명",
            StationField::LineName => "노선명",
            StationField::StationNumber => "역번호",
            StationField::KoreanName => "한글역명",
            StationField::EnglishName => "영어역명",
            StationField::RomanizedName => "로마자역명",
            StationField::JapaneseName => "일본어역명",
            StationField::ChineseSimplifiedName => "중국어간체역명",
            StationField::ChineseTraditionalName => "중국어번체역명",
            StationField::SubName => "부역명",
            StationField::HasTransfer => "환승",
            StationField::TransferLineNames => "환승노선명",
            StationField::Longitude => "경도",
            StationField::Latitude => "위도",
            StationField::RoadAddress => "도로명주소",
            StationField::PhoneNumber => "전화번호",
            StationField::OpeningDate => "신설일자",
            StationField::DataReferenceDate => "데이터기준일자",
        }
    }
}

/// One mapped worksheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// 0-based column index
    pub index: usize,
    pub field: StationField,
    pub target: TargetType,
}

const fn column(index: usize, field: StationField, target: TargetType) -> ColumnSpec {
    ColumnSpec {
        index,
        field,
        target,
    }
}

/// Column table in output field order; unlisted columns are ignored
pub const STATION_COLUMNS: &[ColumnSpec] = &[
    column(0, StationField::OperatorName, TargetType::Text),
    column(1, StationField::LineName, TargetType::Text),
    column(3, StationField::StationNumber, TargetType::Text),
    column(4, StationField::KoreanName, TargetType::Text),
    column(5, StationField::EnglishName, TargetType::Text),
    column(6, StationField::RomanizedName, TargetType::Text),
    column(7, StationField::JapaneseName, TargetType::Text),
    column(8, StationField::ChineseSimplifiedName, TargetType::Text),
    column(9, StationField::ChineseTraditionalName, TargetType::Text),
    column(10, StationField::SubName, TargetType::Text),
    column(11, StationField::HasTransfer, TargetType::Boolean),
    column(12, StationField::TransferLineNames, TargetType::Text),
    column(18, StationField::Longitude, TargetType::Decimal),
    column(19, StationField::Latitude, TargetType::Decimal),
    column(21, StationField::RoadAddress, TargetType::Text),
    column(22, StationField::PhoneNumber, TargetType::Text),
    column(23, StationField::OpeningDate, TargetType::Text),
    column(27, StationField::DataReferenceDate, TargetType::Text),
];

/// Column spec for `field`
pub fn column_for(field: StationField) -> Option<&'static ColumnSpec> {
    STATION_COLUMNS.iter().find(|spec| spec.field == field)
}

/// Number of columns a row needs to cover every mapped field
pub fn required_width() -> usize {
    STATION_COLUMNS
        .iter()
        .map(|spec| spec.index + 1)
        .max()
        .unwrap_or(0)
}
