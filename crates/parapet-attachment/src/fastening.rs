//! Fastening pattern derivation
//!
//! Spacing is a monotone step function of the worst-case zone pressure,
//! tightened per zone and per template family, and clamped at the
//! physical 2-inch floor. A clamp is a finding, recorded and never
//! silent, because it means the pressure has outrun what spacing alone
//! can carry.

use parapet_domain::{DataQualityWarning, FasteningSpec, TemplateFamily, WarningKind};
use tracing::debug;

/// Physical minimum center-to-center spacing, inches
///
/// Closer spacing tears the membrane at the plate; requests below this
/// are clamped, not emitted.
pub const MIN_SPACING_IN: f64 = 2.0;

/// Minimum required pullout regardless of pressure, lbf
pub const MIN_PULLOUT_LBF: f64 = 200.0;

/// Pullout demand per psf of design pressure, lbf
pub const PULLOUT_PER_PSF: f64 = 8.0;

/// Standard deck penetration, inches
pub const PENETRATION_STANDARD_IN: f64 = 1.0;

/// Deepened penetration for HVHZ and enhanced assemblies, inches
pub const PENETRATION_ENHANCED_IN: f64 = 1.25;

/// Field spacing bands: (upper pressure bound psf, spacing in)
///
/// Ascending bounds, descending spacing; pressures above the last bound
/// use the terminal value.
const SPACING_BANDS: &[(f64, f64)] = &[(30.0, 12.0), (45.0, 9.0), (60.0, 6.0), (90.0, 4.0)];

/// Spacing above the last band, inches
const SPACING_EXTREME_IN: f64 = 3.0;

/// Perimeter zones run this much tighter than the field, inches
const PERIMETER_REDUCTION_IN: f64 = 2.0;

/// Corners run this much tighter than the field, inches
const CORNER_REDUCTION_IN: f64 = 4.0;

/// Additional reduction per template family, inches
fn family_reduction_in(family: TemplateFamily) -> f64 {
    match family {
        TemplateFamily::Standard => 0.0,
        TemplateFamily::Enhanced => 1.0,
        TemplateFamily::Hvhz => 2.0,
        TemplateFamily::DualAttachment => 2.0,
    }
}

/// Uplift test protocols cited per family
fn protocol_citations(family: TemplateFamily) -> &'static [&'static str] {
    match family {
        TemplateFamily::Standard => &["FM 4474", "ANSI/SPRI FX-1"],
        TemplateFamily::Enhanced => &["FM 4474", "ANSI/SPRI FX-1", "ASTM D1761"],
        TemplateFamily::Hvhz => &["TAS 105", "TAS 114"],
        TemplateFamily::DualAttachment => &["FM 4474", "ANSI/SPRI FX-1", "ASTM D1761"],
    }
}

fn base_field_spacing_in(pressure_magnitude: f64) -> f64 {
    for (bound_psf, spacing_in) in SPACING_BANDS {
        if pressure_magnitude <= *bound_psf {
            return *spacing_in;
        }
    }
    SPACING_EXTREME_IN
}

/// Derive the fastening pattern for a design pressure and family
///
/// `max_zone_pressure_psf` is the worst-case zone uplift; sign is
/// ignored (suction is negative by convention).
pub fn derive_fastening(
    max_zone_pressure_psf: f64,
    family: TemplateFamily,
) -> (FasteningSpec, Vec<DataQualityWarning>) {
    let magnitude = max_zone_pressure_psf.abs();
    let base = base_field_spacing_in(magnitude);
    let reduction = family_reduction_in(family);

    let mut warnings = Vec::new();
    let mut clamp = |zone: &str, raw_in: f64| -> f64 {
        if raw_in < MIN_SPACING_IN {
            warnings.push(DataQualityWarning::new(
                WarningKind::SpacingClamped,
                format!(
                    "{zone} spacing of {raw_in:.1} in clamped to the {MIN_SPACING_IN:.0} in \
                     physical minimum"
                ),
            ));
            MIN_SPACING_IN
        } else {
            raw_in
        }
    };

    let field_spacing_in = clamp("field", base - reduction);
    let perimeter_spacing_in = clamp("perimeter", base - PERIMETER_REDUCTION_IN - reduction);
    let corner_spacing_in = clamp("corner", base - CORNER_REDUCTION_IN - reduction);

    let required_pullout_lbf = (PULLOUT_PER_PSF * magnitude).max(MIN_PULLOUT_LBF);
    let penetration_depth_in = match family {
        TemplateFamily::Hvhz | TemplateFamily::Enhanced => PENETRATION_ENHANCED_IN,
        TemplateFamily::Standard | TemplateFamily::DualAttachment => PENETRATION_STANDARD_IN,
    };

    let mut engineering_notes = vec![
        format!("Governing zone uplift pressure: {magnitude:.1} psf"),
        format!(
            "Fastener pullout resistance of {required_pullout_lbf:.0} lbf required \
             (max of {MIN_PULLOUT_LBF:.0} lbf and {PULLOUT_PER_PSF:.0} lbf/psf)"
        ),
        format!(
            "Minimum deck penetration {penetration_depth_in:.2} in for {} assembly",
            family.as_str()
        ),
    ];
    engineering_notes.push(format!(
        "Uplift resistance verified per {}",
        protocol_citations(family).join(", ")
    ));

    debug!(
        pressure_psf = magnitude,
        family = family.as_str(),
        field_in = field_spacing_in,
        corner_in = corner_spacing_in,
        clamped = !warnings.is_empty(),
        "derived fastening pattern"
    );

    (
        FasteningSpec {
            field_spacing_in,
            perimeter_spacing_in,
            corner_spacing_in,
            penetration_depth_in,
            required_pullout_lbf,
            engineering_notes,
        },
        warnings,
    )
}
