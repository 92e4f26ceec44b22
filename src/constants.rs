//! Application constants for xlsx2geojson
//!
//! This module contains the fixed output location, the cell sentinels and
//! tokens used by cell coercion, and the logging defaults.

// =============================================================================
// Input and Output
// =============================================================================

/// Output file written to the current working directory
pub const OUTPUT_FILE_NAME: &str = "railway-stations-south-korea.geojson";

/// Number of header rows at the top of the worksheet
pub const HEADER_ROWS: usize = 1;

// =============================================================================
// Cell Coercion
// =============================================================================

/// Text values that mean "no value" once trimmed
pub mod sentinels {
    /// Dash used for blank entries
    pub const DASH: &str = "-";

    /// "Not applicable"
    pub const NOT_APPLICABLE: &str = "해당없음";

    /// All non-empty sentinel values
    pub const ALL: &[&str] = &[DASH, NOT_APPLICABLE];
}

/// Text values accepted as `true` for boolean columns
pub mod affirmative {
    /// "Possible"
    pub const AVAILABLE: &str = "가능";

    /// Circle mark
    pub const MARK: &str = "O";

    /// "Exists"
    pub const PRESENT: &str = "있음";

    /// All affirmative tokens, matched exactly
    pub const ALL: &[&str] = &[AVAILABLE, MARK, PRESENT];
}

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "xlsx2geojson=info";
