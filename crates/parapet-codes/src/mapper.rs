//! Jurisdiction to code profile mapping
//!
//! Lookup ladder: exact county override, then state default, then the
//! global static default. Infallible by construction; a miss at every
//! rung is the global default at low confidence, never an error. A
//! per-process memo serves repeat lookups.

use std::collections::HashMap;
use std::sync::RwLock;

use parapet_domain::{
    geography::{canonical_county, canonical_state},
    CodeProfile, Confidence, JurisdictionIdentity, Provenance, Source,
};
use tracing::debug;

use crate::{
    hvhz::is_hvhz_county,
    table::{StateEntry, TABLE},
};

/// Maps jurisdictions to code profiles with provenance
///
/// Cheap to construct; the underlying table is process-global and
/// parsed once. The memo is per-mapper so tests get isolation for
/// free.
pub struct CodeMapper {
    memo: RwLock<HashMap<(String, String), (CodeProfile, Provenance)>>,
}

impl CodeMapper {
    pub fn new() -> Self {
        Self {
            memo: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve the code profile for a jurisdiction
    pub fn map_code(&self, jurisdiction: &JurisdictionIdentity) -> (CodeProfile, Provenance) {
        self.lookup_code(&jurisdiction.county, &jurisdiction.state)
    }

    /// Resolve by raw (county, state) strings
    ///
    /// The narrow accessor for callers that already know the
    /// jurisdiction and skip geocoding.
    pub fn lookup_code(&self, county: &str, state: &str) -> (CodeProfile, Provenance) {
        let key = (canonical_county(county), canonical_state(state));

        if let Ok(memo) = self.memo.read() {
            if let Some((profile, provenance)) = memo.get(&key) {
                return (profile.clone(), provenance.cached());
            }
        }

        let (profile, provenance) = resolve(&key.0, &key.1);
        debug!(
            county = %key.0,
            state = %key.1,
            code_cycle = %profile.code_cycle,
            source = provenance.source.as_str(),
            "resolved code profile"
        );

        if let Ok(mut memo) = self.memo.write() {
            // Concurrent misses may race to insert; last writer wins and
            // the values are identical, so nothing is lost.
            memo.insert(key, (profile.clone(), provenance));
        }
        (profile, provenance)
    }
}

impl Default for CodeMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn profile_from_state(entry: &StateEntry) -> CodeProfile {
    CodeProfile {
        code_cycle: entry.code_cycle.clone(),
        asce_version: entry.asce_version,
        hvhz: false,
        base_wind_speed_mph: entry.base_wind_speed_mph,
        special_requirements: entry.special_requirements.clone(),
    }
}

fn resolve(county: &str, state: &str) -> (CodeProfile, Provenance) {
    if let Some(state_entry) = TABLE.state(state) {
        let mut profile = profile_from_state(state_entry);

        if let Some(county_entry) = TABLE.county(county, state) {
            if let Some(speed) = county_entry.base_wind_speed_mph {
                profile.base_wind_speed_mph = speed;
            }
            profile.hvhz = county_entry.hvhz || is_hvhz_county(county, state);
            profile
                .special_requirements
                .extend(county_entry.special_requirements.iter().cloned());
            return (
                profile,
                Provenance::new(Source::LocalTable, Confidence::High),
            );
        }

        // State default still applies HVHZ policy in case the county
        // row is missing from the table.
        profile.hvhz = is_hvhz_county(county, state);
        return (
            profile,
            Provenance::new(Source::LocalTable, Confidence::Medium),
        );
    }

    (
        profile_from_state(&TABLE.global_default),
        Provenance::new(Source::StaticDefault, Confidence::Low),
    )
}

#[cfg(test)]
mod tests {
    use parapet_domain::AsceVersion;

    use super::*;

    #[test]
    fn miami_dade_resolves_to_hvhz_fbc() {
        let mapper = CodeMapper::new();
        let (profile, provenance) = mapper.lookup_code("Miami-Dade County", "Florida");
        assert!(profile.hvhz);
        assert_eq!(profile.code_cycle, "2023 FBC");
        assert!(profile.base_wind_speed_mph >= 175.0);
        assert_eq!(provenance.source, Source::LocalTable);
        assert_eq!(provenance.confidence, Confidence::High);
    }

    #[test]
    fn unlisted_county_falls_to_state_default() {
        let mapper = CodeMapper::new();
        let (profile, provenance) = mapper.lookup_code("Dallas", "TX");
        assert!(!profile.hvhz);
        assert_eq!(profile.code_cycle, "2021 IBC");
        assert_eq!(profile.base_wind_speed_mph, 115.0);
        assert_eq!(provenance.source, Source::LocalTable);
        assert_eq!(provenance.confidence, Confidence::Medium);
    }

    #[test]
    fn unknown_state_falls_to_global_default() {
        let mapper = CodeMapper::new();
        let (profile, provenance) = mapper.lookup_code("Anywhere", "ZZ");
        assert!(!profile.hvhz);
        assert_eq!(profile.code_cycle, "2021 IBC");
        assert_eq!(profile.asce_version, AsceVersion::V7_16);
        assert_eq!(profile.base_wind_speed_mph, 115.0);
        assert_eq!(provenance.source, Source::StaticDefault);
        assert_eq!(provenance.confidence, Confidence::Low);
    }

    #[test]
    fn repeat_lookup_is_served_from_memo() {
        let mapper = CodeMapper::new();
        let (first, first_prov) = mapper.lookup_code("Galveston", "TX");
        let (second, second_prov) = mapper.lookup_code("galveston county", "texas");
        assert_eq!(first, second);
        assert_eq!(first_prov.source, Source::LocalTable);
        assert_eq!(second_prov.source, Source::Cache);
        assert_eq!(second_prov.confidence, first_prov.confidence);
    }

    #[test]
    fn county_requirements_stack_on_state_requirements() {
        let mapper = CodeMapper::new();
        let (profile, _) = mapper.lookup_code("Miami-Dade", "FL");
        assert!(profile
            .special_requirements
            .iter()
            .any(|r| r.contains("NOA")));
        assert!(profile
            .special_requirements
            .iter()
            .any(|r| r.contains("Florida Product Approval")));
    }
}
