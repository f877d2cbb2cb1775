//! Velocity pressure factors
//!
//! Named constants and factor functions cited by the engineering notes
//! downstream, so every number that enters `qh` has a name and a code
//! reference.

use parapet_domain::{AsceVersion, ExposureCategory};

use crate::terrain::terrain_params;

/// Velocity pressure constant from ASCE 7 Eq. 26.10-1 (psf per mph^2)
pub const VELOCITY_PRESSURE_CONSTANT: f64 = 0.00256;

/// Wind directionality factor Kd for buildings, ASCE 7 Table 26.6-1
pub const DIRECTIONALITY_FACTOR: f64 = 0.85;

/// Importance factor for Risk Category II structures
pub const IMPORTANCE_FACTOR: f64 = 1.0;

/// Internal pressure coefficient GCpi for enclosed buildings,
/// ASCE 7 Table 26.13-1
pub const GCPI_ENCLOSED: f64 = 0.18;

/// Minimum height used for the exposure coefficient, ft
///
/// Buildings shorter than 15 ft use the 15 ft coefficient per code
/// convention.
pub const MIN_COEFFICIENT_HEIGHT_FT: f64 = 15.0;

/// Velocity pressure exposure coefficient Kh at mean roof height
///
/// Power-law profile anchored at the tabulated 15 ft value:
/// `Kh = Kh15 * (max(h, 15)/15)^(2*alpha/zg)`. Monotone non-decreasing
/// in height for every exposure category.
pub fn kh(exposure: ExposureCategory, building_height_ft: f64) -> f64 {
    let params = terrain_params(exposure);
    let effective_height = building_height_ft.max(MIN_COEFFICIENT_HEIGHT_FT);
    let exponent = 2.0 * params.alpha / params.gradient_height_ft;
    params.kh_at_15ft * (effective_height / MIN_COEFFICIENT_HEIGHT_FT).powf(exponent)
}

/// Elevation bands for the topographic factor, (threshold ft, Kzt)
///
/// Step function of site elevation; a crude stand-in for the full
/// speed-up procedure, adequate for flat-roof screening. Bands are
/// declared ascending and Kzt never decreases with elevation.
const KZT_BANDS: &[(f64, f64)] = &[(1000.0, 1.05), (2000.0, 1.10), (3000.0, 1.15)];

/// ASCE 7-22 shifts the band thresholds down slightly
const KZT_BANDS_7_22: &[(f64, f64)] = &[(900.0, 1.05), (1900.0, 1.10), (2900.0, 1.15)];

/// Topographic factor Kzt as a step function of site elevation
pub fn kzt(asce_version: AsceVersion, elevation_ft: f64) -> f64 {
    let bands = match asce_version {
        AsceVersion::V7_10 | AsceVersion::V7_16 => KZT_BANDS,
        AsceVersion::V7_22 => KZT_BANDS_7_22,
    };
    let mut factor = 1.0;
    for (threshold_ft, band_factor) in bands {
        if elevation_ft >= *threshold_ft {
            factor = *band_factor;
        }
    }
    factor
}

/// Velocity pressure at roof height, psf
///
/// `qh = 0.00256 * Kh * Kzt * Kd * I * V^2` with V in mph.
pub fn velocity_pressure(kh: f64, kzt: f64, wind_speed_mph: f64) -> f64 {
    VELOCITY_PRESSURE_CONSTANT
        * kh
        * kzt
        * DIRECTIONALITY_FACTOR
        * IMPORTANCE_FACTOR
        * wind_speed_mph
        * wind_speed_mph
}
