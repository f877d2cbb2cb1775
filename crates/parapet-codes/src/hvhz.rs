//! High-velocity hurricane zone policy
//!
//! The HVHZ designation is a closed enumerated set of Florida counties.
//! Membership is exact match after canonicalization ("County" suffix
//! optional, case-insensitive), never substring or fuzzy. This module
//! is the single owner of that set; nothing else decides HVHZ.

use parapet_domain::{
    geography::{canonical_county, canonical_state},
    CodeProfile, DataQualityWarning, WarningKind,
};

/// The closed set of HVHZ counties, canonical form
pub const HVHZ_COUNTIES: &[&str] = &["miami-dade", "broward", "monroe", "palm beach"];

/// The only state whose counties can carry the HVHZ designation
pub const HVHZ_STATE: &str = "FL";

/// Whether a (county, state) pair is in the high-velocity hurricane zone
pub fn is_hvhz_county(county: &str, state: &str) -> bool {
    if canonical_state(state) != HVHZ_STATE {
        return false;
    }
    let canonical = canonical_county(county);
    HVHZ_COUNTIES.iter().any(|c| *c == canonical)
}

/// Flag an `hvhz=true` profile outside Florida
///
/// The profile is never silently corrected; a warning is produced for
/// the orchestrator to record, leaving the data-quality problem
/// visible.
pub fn validate_hvhz_consistency(
    profile: &CodeProfile,
    state: &str,
) -> Option<DataQualityWarning> {
    if profile.hvhz && canonical_state(state) != HVHZ_STATE {
        return Some(DataQualityWarning::new(
            WarningKind::HvhzOutsideFlorida,
            format!(
                "code profile claims HVHZ but state is {state}; \
                 HVHZ designations exist only in Florida"
            ),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use parapet_domain::AsceVersion;

    use super::*;

    #[test]
    fn hvhz_set_matches_with_and_without_suffix() {
        assert!(is_hvhz_county("Miami-Dade", "FL"));
        assert!(is_hvhz_county("Miami-Dade County", "Florida"));
        assert!(is_hvhz_county("PALM BEACH COUNTY", "fl"));
        assert!(is_hvhz_county("broward", "FL"));
        assert!(is_hvhz_county("Monroe", "FL"));
    }

    #[test]
    fn hvhz_requires_exact_membership() {
        assert!(!is_hvhz_county("Miami", "FL"));
        assert!(!is_hvhz_county("Dade", "FL"));
        assert!(!is_hvhz_county("Orange", "FL"));
    }

    #[test]
    fn hvhz_is_florida_only() {
        assert!(!is_hvhz_county("Miami-Dade", "TX"));
        assert!(!is_hvhz_county("Broward", "GA"));
    }

    #[test]
    fn consistency_check_flags_hvhz_outside_florida() {
        let profile =
            CodeProfile::new("2021 IBC", AsceVersion::V7_16, 115.0).with_hvhz(true);
        let warning = validate_hvhz_consistency(&profile, "TX").unwrap();
        assert_eq!(warning.kind, WarningKind::HvhzOutsideFlorida);
        assert!(warning.message.contains("TX"));
    }

    #[test]
    fn consistency_check_accepts_florida_hvhz() {
        let profile =
            CodeProfile::new("2023 FBC", AsceVersion::V7_16, 185.0).with_hvhz(true);
        assert!(validate_hvhz_consistency(&profile, "FL").is_none());
        assert!(validate_hvhz_consistency(&profile, "Florida").is_none());
    }

    #[test]
    fn consistency_check_ignores_non_hvhz_profiles() {
        let profile = CodeProfile::new("2021 IBC", AsceVersion::V7_16, 115.0);
        assert!(validate_hvhz_consistency(&profile, "TX").is_none());
    }
}
