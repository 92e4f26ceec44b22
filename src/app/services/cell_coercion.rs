//! Cell coercion for raw worksheet values
//!
//! Every raw cell goes through [`normalize`] first, which trims text and maps
//! blank, dash and "해당없음" cells to absent. The four target types then see
//! only normalized input.

use crate::constants::{affirmative, sentinels};
use crate::{Error, Result};
use calamine::Data;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Semantic type a cell is coerced into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Text,
    Decimal,
    Whole,
    Boolean,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetType::Text => "text",
            TargetType::Decimal => "decimal number",
            TargetType::Whole => "whole number",
            TargetType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Result of coercing one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Absent,
    Text(String),
    Decimal(f64),
    Whole(i64),
    Boolean(bool),
}

impl CellValue {
    /// Unwrap an optional text field
    pub fn into_text(self, field: &'static str) -> Result<Option<String>> {
        match self {
            CellValue::Absent => Ok(None),
            CellValue::Text(text) => Ok(Some(text)),
            other => Err(Error::unsupported_target(field, other.target())),
        }
    }

    /// Unwrap an optional decimal field
    pub fn into_decimal(self, field: &'static str) -> Result<Option<f64>> {
        match self {
            CellValue::Absent => Ok(None),
            CellValue::Decimal(value) => Ok(Some(value)),
            other => Err(Error::unsupported_target(field, other.target())),
        }
    }

    /// Unwrap an optional whole-number field
    pub fn into_whole(self, field: &'static str) -> Result<Option<i64>> {
        match self {
            CellValue::Absent => Ok(None),
            CellValue::Whole(value) => Ok(Some(value)),
            other => Err(Error::unsupported_target(field, other.target())),
        }
    }

    /// Unwrap a boolean field
    pub fn into_bool(self, field: &'static str) -> Result<bool> {
        match self {
            CellValue::Boolean(value) => Ok(value),
            other => Err(Error::unsupported_target(field, other.target())),
        }
    }

    fn target(&self) -> TargetType {
        match self {
            // Absent never reaches the mismatch arms above
            CellValue::Absent | CellValue::Text(_) => TargetType::Text,
            CellValue::Decimal(_) => TargetType::Decimal,
            CellValue::Whole(_) => TargetType::Whole,
            CellValue::Boolean(_) => TargetType::Boolean,
        }
    }
}

/// Raw cell after trimming and sentinel handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized<'a> {
    Absent,
    Text(&'a str),
    Other(&'a Data),
}

/// Trim text and map empty cells and sentinels to absent
pub fn normalize(value: &Data) -> Normalized<'_> {
    match value {
        Data::Empty => Normalized::Absent,
        Data::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || sentinels::ALL.contains(&trimmed) {
                Normalized::Absent
            } else {
                Normalized::Text(trimmed)
            }
        }
        other => Normalized::Other(other),
    }
}

/// Coerce a raw cell into `target`
///
/// Absent cells become `false` for boolean targets and [`CellValue::Absent`]
/// otherwise. Numeric targets fail on values with no numeric form.
pub fn coerce(value: &Data, target: TargetType) -> Result<CellValue> {
    let normalized = normalize(value);

    if let Normalized::Absent = normalized {
        return Ok(match target {
            TargetType::Boolean => CellValue::Boolean(false),
            _ => CellValue::Absent,
        });
    }

    match target {
        TargetType::Boolean => Ok(CellValue::Boolean(to_bool(normalized))),
        TargetType::Text => Ok(CellValue::Text(to_text(normalized))),
        TargetType::Decimal => to_decimal(normalized).map(CellValue::Decimal),
        TargetType::Whole => to_whole(normalized).map(CellValue::Whole),
    }
}

fn to_bool(value: Normalized<'_>) -> bool {
    match value {
        Normalized::Text(text) => affirmative::ALL.contains(&text),
        Normalized::Other(other) => {
            warn!("Cannot convert {:?} to bool, returning false", other);
            false
        }
        Normalized::Absent => false,
    }
}

fn to_text(value: Normalized<'_>) -> String {
    match value {
        Normalized::Text(text) => text.to_string(),
        Normalized::Other(other) => stringify(other),
        Normalized::Absent => String::new(),
    }
}

/// Canonical text form of a non-text cell
pub fn stringify(value: &Data) -> String {
    match value {
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::String(s) => s.clone(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => format_datetime(datetime),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}

/// `YYYY-MM-DD HH:MM:SS`, fractional seconds dropped
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn to_decimal(value: Normalized<'_>) -> Result<f64> {
    match value {
        Normalized::Text(text) => text.parse::<f64>().map_err(|e| {
            Error::cell_coercion(text, TargetType::Decimal, e.to_string())
        }),
        Normalized::Other(Data::Float(f)) => Ok(*f),
        Normalized::Other(Data::Int(i)) => Ok(*i as f64),
        Normalized::Other(Data::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Normalized::Other(other) => Err(Error::cell_coercion(
            stringify(other),
            TargetType::Decimal,
            "cell has no numeric value",
        )),
        Normalized::Absent => Err(Error::cell_coercion(
            "",
            TargetType::Decimal,
            "cell is empty",
        )),
    }
}

fn to_whole(value: Normalized<'_>) -> Result<i64> {
    match value {
        Normalized::Text(text) => text
            .parse::<i64>()
            .map_err(|e| Error::cell_coercion(text, TargetType::Whole, e.to_string())),
        Normalized::Other(Data::Int(i)) => Ok(*i),
        Normalized::Other(Data::Float(f)) => {
            if f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                Ok(f.trunc() as i64)
            } else {
                Err(Error::cell_coercion(
                    f.to_string(),
                    TargetType::Whole,
                    "value is out of range",
                ))
            }
        }
        Normalized::Other(Data::Bool(b)) => Ok(i64::from(*b)),
        Normalized::Other(other) => Err(Error::cell_coercion(
            stringify(other),
            TargetType::Whole,
            "cell has no numeric value",
        )),
        Normalized::Absent => Err(Error::cell_coercion(
            "",
            TargetType::Whole,
            "cell is empty",
        )),
    }
}
