//! Wind analysis inputs and outputs
//!
//! [`WindAnalysisParams`] fully determines a calculation: the engine is
//! a pure function from params to pressures, so equal inputs always
//! produce byte-equal outputs.

use serde::{Deserialize, Serialize};

use crate::code_profile::AsceVersion;

/// ASCE 7 exposure category
///
/// B = urban/suburban terrain, C = open terrain, D = flat unobstructed
/// coastal. C is the conventional default when terrain is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExposureCategory {
    B,
    C,
    D,
}

impl ExposureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExposureCategory::B => "B",
            ExposureCategory::C => "C",
            ExposureCategory::D => "D",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Some(ExposureCategory::B),
            "C" => Some(ExposureCategory::C),
            "D" => Some(ExposureCategory::D),
            _ => None,
        }
    }
}

impl Default for ExposureCategory {
    fn default() -> Self {
        ExposureCategory::C
    }
}

/// Complete input set for a pressure calculation
///
/// Coordinates ride along for the engineering record; the calculation
/// itself uses wind speed, elevation, exposure, height, and version.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindAnalysisParams {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_ft: f64,
    pub exposure: ExposureCategory,
    pub building_height_ft: f64,
    pub asce_version: AsceVersion,
    pub base_wind_speed_mph: f64,
}

/// Net uplift per roof zone, psf
///
/// Negative values are suction, which is the governing direction for
/// membrane attachment. The magnitude ordering
/// |corner| >= |perimeter outer| >= |perimeter inner| >= |field|
/// holds for every physically valid coefficient table and is enforced
/// by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZonePressures {
    pub field: f64,
    pub perimeter_inner: f64,
    pub perimeter_outer: f64,
    pub corner: f64,
}

impl ZonePressures {
    /// Check the zone magnitude ordering invariant
    pub fn ordering_valid(&self) -> bool {
        let corner = self.corner.abs();
        let outer = self.perimeter_outer.abs();
        let inner = self.perimeter_inner.abs();
        let field = self.field.abs();
        corner >= outer && outer >= inner && inner >= field
    }

    /// Largest suction magnitude across zones, psf
    ///
    /// This is the design pressure used for approval screening and
    /// fastening derivation.
    pub fn max_uplift_magnitude(&self) -> f64 {
        self.field
            .abs()
            .max(self.perimeter_inner.abs())
            .max(self.perimeter_outer.abs())
            .max(self.corner.abs())
    }
}

/// Intermediate factors retained for the engineering record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpliftFactors {
    /// Velocity pressure exposure coefficient at roof height
    pub kh: f64,
    /// Topographic factor derived from site elevation
    pub kzt: f64,
    /// Wind directionality factor
    pub kd: f64,
    /// Velocity pressure at roof height, psf
    pub qh_psf: f64,
}
