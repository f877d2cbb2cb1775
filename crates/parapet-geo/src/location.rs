//! Resolved locations and queries

use parapet_domain::{
    Coordinates, DataQualityWarning, ExposureCategory, JurisdictionIdentity, Provenance,
};
use serde::{Deserialize, Serialize};

/// What the caller hands the resolver
#[derive(Debug, Clone, PartialEq)]
pub enum GeoQuery {
    Address(String),
    Point(Coordinates),
}

impl GeoQuery {
    /// Cache key for this query
    ///
    /// Coordinates round to six decimals; addresses are lowercased with
    /// whitespace collapsed so trivially different spellings share an
    /// entry.
    pub fn cache_key(&self) -> String {
        match self {
            GeoQuery::Point(coords) => coords.rounded_key(),
            GeoQuery::Address(address) => format!("addr:{}", normalize_address(address)),
        }
    }
}

/// Normalize an address string for cache keying
pub fn normalize_address(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A fully resolved project location
///
/// Coordinates are always present; address-only fallbacks backfill them
/// from region centers because the wind calculation downstream needs a
/// point. The exposure hint is the approximate coastal/urban terrain
/// classification from the region table, overridable by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub jurisdiction: JurisdictionIdentity,
    pub coordinates: Coordinates,
    pub elevation_ft: f64,
    pub provenance: Provenance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_hint: Option<ExposureCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DataQualityWarning>,
}
