//! Configuration management and validation.
//!
//! The converter takes very little configuration: the input workbook, the
//! output file and the number of header rows to skip. Defaults come from
//! [`crate::constants`].

use crate::constants::{HEADER_ROWS, OUTPUT_FILE_NAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Workbook to read
    pub input_path: PathBuf,

    /// GeoJSON file to write
    pub output_path: PathBuf,

    /// Leading worksheet rows that are not data
    pub header_rows: usize,
}

impl Config {
    /// Configuration with default output path and header rows
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
            header_rows: HEADER_ROWS,
        }
    }

    /// Override the output path
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Check paths before any work is done
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::file_not_found(&self.input_path));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if self.output_path.as_os_str().is_empty() || self.output_path.is_dir() {
            return Err(Error::configuration(format!(
                "Output path must be a file: '{}'",
                self.output_path.display()
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
