//! Wind calculator errors

use parapet_domain::AsceVersion;
use thiserror::Error;

/// Errors from the pressure calculator
///
/// Lookup misses never appear here; callers resolve unknown exposure or
/// version strings to defaults before building params. These variants
/// are input validation and data-table bugs only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindError {
    #[error("basic wind speed must be positive and finite, got {speed_mph}")]
    InvalidWindSpeed { speed_mph: f64 },

    #[error("building height must be finite, got {height_ft}")]
    InvalidBuildingHeight { height_ft: f64 },

    #[error("no roof pressure coefficient table for ASCE {version}")]
    MissingCoefficientTable { version: AsceVersion },

    #[error(
        "computed zone pressures violate magnitude ordering \
         (field {field}, perimeter inner {perimeter_inner}, \
         perimeter outer {perimeter_outer}, corner {corner})"
    )]
    PressureOrderingViolated {
        field: f64,
        perimeter_inner: f64,
        perimeter_outer: f64,
        corner: f64,
    },
}

/// Result type alias for wind operations
pub type Result<T> = std::result::Result<T, WindError>;
