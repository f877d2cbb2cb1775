//! Uplift pressure calculation
//!
//! Pure and deterministic: equal [`WindAnalysisParams`] always produce
//! byte-equal output. No I/O, no interior mutability, no clock.

use parapet_domain::{UpliftFactors, WindAnalysisParams, ZonePressures};
use tracing::debug;

use crate::{
    coefficients::roof_coefficients,
    error::{Result, WindError},
    factors::{
        kh, kzt, velocity_pressure, DIRECTIONALITY_FACTOR, GCPI_ENCLOSED,
    },
};

/// Pressures plus the intermediate factors behind them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindAnalysis {
    pub pressures: ZonePressures,
    pub factors: UpliftFactors,
}

/// Compute per-zone net uplift pressures
///
/// Zone net pressure is `qh * (GCp - GCpi)` with GCpi taken positive
/// (internal pressurization), which governs for suction. The zone
/// magnitude ordering is checked before returning; a violation means a
/// broken coefficient table and is surfaced, never emitted.
pub fn compute_pressures(params: &WindAnalysisParams) -> Result<WindAnalysis> {
    if !params.base_wind_speed_mph.is_finite() || params.base_wind_speed_mph <= 0.0 {
        return Err(WindError::InvalidWindSpeed {
            speed_mph: params.base_wind_speed_mph,
        });
    }
    if !params.building_height_ft.is_finite() {
        return Err(WindError::InvalidBuildingHeight {
            height_ft: params.building_height_ft,
        });
    }

    let kh = kh(params.exposure, params.building_height_ft);
    let kzt = kzt(params.asce_version, params.elevation_ft.max(0.0));
    let qh = velocity_pressure(kh, kzt, params.base_wind_speed_mph);
    let gcp = roof_coefficients(params.asce_version)?;

    let zone = |gcp_zone: f64| qh * (gcp_zone - GCPI_ENCLOSED);
    let pressures = ZonePressures {
        field: zone(gcp.field),
        perimeter_inner: zone(gcp.perimeter_inner),
        perimeter_outer: zone(gcp.perimeter_outer),
        corner: zone(gcp.corner),
    };

    if !pressures.ordering_valid() {
        return Err(WindError::PressureOrderingViolated {
            field: pressures.field,
            perimeter_inner: pressures.perimeter_inner,
            perimeter_outer: pressures.perimeter_outer,
            corner: pressures.corner,
        });
    }

    debug!(
        asce = %params.asce_version,
        exposure = params.exposure.as_str(),
        kh,
        kzt,
        qh_psf = qh,
        corner_psf = pressures.corner,
        "computed zone uplift pressures"
    );

    Ok(WindAnalysis {
        pressures,
        factors: UpliftFactors {
            kh,
            kzt,
            kd: DIRECTIONALITY_FACTOR,
            qh_psf: qh,
        },
    })
}
