//! Parsing statistics and result structures for station rows

use crate::app::models::Station;
use serde::{Deserialize, Serialize};

/// Parsing result with stations and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Retained stations in worksheet order
    pub stations: Vec<Station>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of stations retained
    pub stations_parsed: usize,

    /// Number of rows dropped for missing coordinates
    pub rows_skipped: usize,

    /// Description of each dropped row
    pub skipped: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a retained station
    pub fn record_station(&mut self) {
        self.total_rows += 1;
        self.stations_parsed += 1;
    }

    /// Record a dropped row
    pub fn record_skip(&mut self, description: impl Into<String>) {
        self.total_rows += 1;
        self.rows_skipped += 1;
        self.skipped.push(description.into());
    }

    /// Percentage of rows that became stations
    pub fn retention_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.stations_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}
