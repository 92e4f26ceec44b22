//! xlsx2geojson Library
//!
//! Converts the South Korean urban railway station spreadsheet
//! (전국 도시광역철도 역사정보) into a GeoJSON FeatureCollection.
//!
//! This library provides tools for:
//! - Reading the active worksheet of a workbook through `calamine`
//! - Coercing raw cells into typed values with sentinel handling
//! - Mapping fixed column positions onto station records
//! - Dropping stations without coordinates
//! - Writing the FeatureCollection atomically as UTF-8 GeoJSON

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cell_coercion;
        pub mod converter;
        pub mod geojson_writer;
        pub mod station_parser;
        pub mod workbook_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Station;
pub use app::services::cell_coercion::{CellValue, TargetType};
pub use app::services::converter::{ConversionReport, convert};
pub use config::Config;

use std::path::Path;

/// Result type alias for xlsx2geojson
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for spreadsheet conversion
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Workbook could not be opened or read
    #[error("Workbook error in file '{path}': {message}")]
    Workbook {
        path: String,
        message: String,
        #[source]
        source: calamine::Error,
    },

    /// Workbook package metadata could not be read
    #[error("Malformed workbook metadata in file '{path}': {message}")]
    WorkbookMetadata { path: String, message: String },

    /// Workbook has no active worksheet
    #[error("No active worksheet found in {path}")]
    NoActiveWorksheet { path: String },

    /// Cell value has no representation in the requested type
    #[error("Cannot convert '{value}' to {target}: {reason}")]
    CellCoercion {
        value: String,
        target: TargetType,
        reason: String,
    },

    /// Cell coercion failed at a known worksheet position
    #[error("Invalid cell at row {row}, column {column} ({field})")]
    InvalidCell {
        row: usize,
        column: usize,
        field: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// A field was given a value of a type it cannot hold
    #[error("Unsupported coercion target {target} for field {field}")]
    UnsupportedTarget {
        field: &'static str,
        target: TargetType,
    },

    /// Coordinate is NaN or infinite
    #[error("Non-finite coordinate for station {station}: [{longitude}, {latitude}]")]
    NonFiniteCoordinate {
        station: String,
        longitude: f64,
        latitude: f64,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Create a workbook error
    pub fn workbook(
        path: impl AsRef<Path>,
        message: impl Into<String>,
        source: calamine::Error,
    ) -> Self {
        Self::Workbook {
            path: path.as_ref().display().to_string(),
            message: message.into(),
            source,
        }
    }

    /// Create a workbook metadata error
    pub fn workbook_metadata(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::WorkbookMetadata {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    /// Create a missing active worksheet error
    pub fn no_active_worksheet(path: impl AsRef<Path>) -> Self {
        Self::NoActiveWorksheet {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Create a cell coercion error
    pub fn cell_coercion(
        value: impl Into<String>,
        target: TargetType,
        reason: impl Into<String>,
    ) -> Self {
        Self::CellCoercion {
            value: value.into(),
            target,
            reason: reason.into(),
        }
    }

    /// Attach a worksheet position to this error
    pub fn at_cell(self, row: usize, column: usize, field: &'static str) -> Self {
        Self::InvalidCell {
            row,
            column,
            field,
            source: Box::new(self),
        }
    }

    /// Create an unsupported target error
    pub fn unsupported_target(field: &'static str, target: TargetType) -> Self {
        Self::UnsupportedTarget { field, target }
    }

    /// Create a non-finite coordinate error
    pub fn non_finite_coordinate(station: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self::NonFiniteCoordinate {
            station: station.into(),
            longitude,
            latitude,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
