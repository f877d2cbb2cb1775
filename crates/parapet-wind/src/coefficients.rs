//! Roof pressure coefficients per ASCE edition
//!
//! External pressure coefficients GCp for components and cladding on
//! low-slope roofs, keyed by edition. 7-10 publishes three roof zones;
//! 7-16 subdivided the field into Zone 1' (interior) and Zone 1, so it
//! and 7-22 carry four. Values are data, not code paths: a future
//! edition is a new row here, not a new calculator.

use parapet_domain::AsceVersion;

use crate::error::{Result, WindError};

/// GCp per roof zone for one edition, suction negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofCoefficients {
    /// Interior field (Zone 1' where the edition defines it)
    pub field: f64,
    /// Inner perimeter (Zone 1)
    pub perimeter_inner: f64,
    /// Outer perimeter (Zone 2)
    pub perimeter_outer: f64,
    /// Corner (Zone 3)
    pub corner: f64,
}

/// ASCE 7-10 Figure 30.4-2A, three zones; the field carries the Zone 1
/// coefficient because the interior subdivision did not exist yet
const GCP_7_10: RoofCoefficients = RoofCoefficients {
    field: -1.0,
    perimeter_inner: -1.0,
    perimeter_outer: -1.8,
    corner: -2.8,
};

/// ASCE 7-16 Figure 30.3-2A, four zones with the Zone 1' interior field
const GCP_7_16: RoofCoefficients = RoofCoefficients {
    field: -0.9,
    perimeter_inner: -1.7,
    perimeter_outer: -2.3,
    corner: -3.2,
};

/// Roof coefficients for an edition
///
/// 7-22 carried the 7-16 figure forward unchanged; it keeps its own
/// table row so a divergence is a data edit.
pub fn roof_coefficients(version: AsceVersion) -> Result<RoofCoefficients> {
    let table = match version {
        AsceVersion::V7_10 => Some(GCP_7_10),
        AsceVersion::V7_16 | AsceVersion::V7_22 => Some(GCP_7_16),
    };
    table.ok_or(WindError::MissingCoefficientTable { version })
}
