//! Minimum capacity policy
//!
//! The single owner of the MCRF threshold table. Every call site that
//! needs a required rating goes through [`minimum_required_mcrf`];
//! nothing else may restate these numbers.

/// Pressure breakpoints (psf) to required MCRF (lbf), highest first
pub const MCRF_THRESHOLDS: &[(f64, f64)] = &[(40.0, 300.0), (30.0, 285.0)];

/// Required rating below every breakpoint, lbf
pub const MCRF_FLOOR_LBF: f64 = 250.0;

/// Required MCRF for a design pressure
///
/// Step function of the worst-case uplift magnitude. HVHZ work raises
/// the floor to the top tier regardless of pressure.
pub fn minimum_required_mcrf(max_pressure_psf: f64, hvhz: bool) -> f64 {
    let magnitude = max_pressure_psf.abs();
    let mut required = MCRF_FLOOR_LBF;
    for (breakpoint_psf, rating_lbf) in MCRF_THRESHOLDS.iter().rev() {
        if magnitude > *breakpoint_psf {
            required = *rating_lbf;
        }
    }
    if hvhz {
        required = required.max(MCRF_THRESHOLDS[0].1);
    }
    required
}
