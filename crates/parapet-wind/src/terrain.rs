//! Terrain exposure parameters
//!
//! ASCE 7 Table 26.11-1 ground-roughness constants, one row per
//! exposure category. The same rows apply across the 7-10/7-16/7-22
//! editions; only the roof coefficient tables differ by edition.

use parapet_domain::ExposureCategory;

/// Power-law constants for one exposure category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    /// Gust-speed power-law exponent alpha
    pub alpha: f64,
    /// Gradient height zg, ft
    pub gradient_height_ft: f64,
    /// Velocity pressure exposure coefficient evaluated at 15 ft
    pub kh_at_15ft: f64,
}

const TERRAIN_TABLE: &[(ExposureCategory, TerrainParams)] = &[
    (
        ExposureCategory::B,
        TerrainParams {
            alpha: 7.0,
            gradient_height_ft: 1200.0,
            kh_at_15ft: 0.57,
        },
    ),
    (
        ExposureCategory::C,
        TerrainParams {
            alpha: 9.5,
            gradient_height_ft: 900.0,
            kh_at_15ft: 0.85,
        },
    ),
    (
        ExposureCategory::D,
        TerrainParams {
            alpha: 11.5,
            gradient_height_ft: 700.0,
            kh_at_15ft: 1.03,
        },
    ),
];

/// Terrain constants for an exposure category
pub fn terrain_params(exposure: ExposureCategory) -> TerrainParams {
    // The table covers every enum variant; the fallback row is
    // unreachable but keeps the lookup total.
    TERRAIN_TABLE
        .iter()
        .find(|(cat, _)| *cat == exposure)
        .map(|(_, params)| *params)
        .unwrap_or(TERRAIN_TABLE[1].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_exposure_has_a_row() {
        for exposure in [
            ExposureCategory::B,
            ExposureCategory::C,
            ExposureCategory::D,
        ] {
            let params = terrain_params(exposure);
            assert!(params.alpha > 0.0);
            assert!(params.gradient_height_ft > 0.0);
            assert!(params.kh_at_15ft > 0.0);
        }
    }

    #[test]
    fn rougher_terrain_means_lower_kh() {
        // B (urban) shields the building; D (open water) does not.
        let b = terrain_params(ExposureCategory::B);
        let c = terrain_params(ExposureCategory::C);
        let d = terrain_params(ExposureCategory::D);
        assert!(b.kh_at_15ft < c.kh_at_15ft);
        assert!(c.kh_at_15ft < d.kh_at_15ft);
    }
}
