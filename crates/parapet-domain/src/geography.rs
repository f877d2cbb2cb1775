//! Locations and jurisdiction identity
//!
//! Coordinates are validated at construction. Jurisdiction fields are
//! canonicalized so that lookups hit regardless of how an upstream
//! geocoder spells them ("Miami-Dade" vs "Miami-Dade County", "FL" vs
//! "Florida").

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// A validated point on the globe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        let coords = Self {
            latitude,
            longitude,
        };
        coords.validate()?;
        Ok(coords)
    }

    /// Validate range and finiteness
    pub fn validate(&self) -> DomainResult<()> {
        let in_range = self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude);
        if in_range {
            Ok(())
        } else {
            Err(DomainError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Cache key rounded to six decimal places (~0.1 m)
    ///
    /// Two queries for effectively the same point share a key even when
    /// the raw floats differ in their low bits.
    pub fn rounded_key(&self) -> String {
        format!("{:.6},{:.6}", self.latitude, self.longitude)
    }

    /// Great-circle-free squared distance, good enough for nearest-region
    /// selection over the continental US
    pub fn distance_squared(&self, other: &Coordinates) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlng = self.longitude - other.longitude;
        dlat * dlat + dlng * dlng
    }
}

/// Where a project sits for code-compliance purposes
///
/// `county` and `state` are stored canonicalized; see [`canonical_county`]
/// and [`canonical_state`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionIdentity {
    pub county: String,
    pub state: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl JurisdictionIdentity {
    /// Build a US jurisdiction from raw county/state strings
    pub fn us(county: &str, state: &str) -> Self {
        Self {
            county: canonical_county(county),
            state: canonical_state(state),
            country: "US".to_string(),
            city: None,
            postal_code: None,
        }
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.trim().to_string());
        self
    }

    pub fn with_postal_code(mut self, postal_code: &str) -> Self {
        self.postal_code = Some(postal_code.trim().to_string());
        self
    }
}

/// Full state names to USPS abbreviations
const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
    ("district of columbia", "DC"),
];

/// Canonicalize a county name for table lookups
///
/// Lowercases, collapses interior whitespace, and strips a trailing
/// "County" or "Parish" suffix so "Miami-Dade County" and "miami-dade"
/// compare equal.
pub fn canonical_county(raw: &str) -> String {
    let collapsed = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    for suffix in [" county", " parish"] {
        if let Some(stripped) = collapsed.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    collapsed
}

/// Canonicalize a state to its USPS abbreviation
///
/// Two-letter inputs are uppercased as-is; full names go through the
/// abbreviation table. Anything unrecognized is returned trimmed so the
/// caller can still fall through to the global default profile.
pub fn canonical_state(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return trimmed.to_ascii_uppercase();
    }
    let lowered = trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    for (name, abbr) in STATE_ABBREVIATIONS {
        if *name == lowered {
            return (*abbr).to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_accept_valid_range() {
        assert!(Coordinates::new(25.7617, -80.1918).is_ok());
        assert!(Coordinates::new(-90.0, 180.0).is_ok());
        assert!(Coordinates::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn coordinates_reject_out_of_range() {
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(-90.5, 0.0).is_err());
        assert!(Coordinates::new(0.0, 180.1).is_err());
        assert!(Coordinates::new(0.0, -181.0).is_err());
    }

    #[test]
    fn coordinates_reject_non_finite() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
        assert!(Coordinates::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn rounded_key_is_six_decimals() {
        let coords = Coordinates::new(25.761_681_2, -80.191_789_9).unwrap();
        assert_eq!(coords.rounded_key(), "25.761681,-80.191790");
    }

    #[test]
    fn rounded_key_collapses_nearby_points() {
        let a = Coordinates::new(25.7617680, -80.1917900).unwrap();
        let b = Coordinates::new(25.7617684, -80.1917903).unwrap();
        assert_eq!(a.rounded_key(), b.rounded_key());
    }

    #[test]
    fn canonical_county_strips_suffix() {
        assert_eq!(canonical_county("Miami-Dade County"), "miami-dade");
        assert_eq!(canonical_county("miami-dade"), "miami-dade");
        assert_eq!(canonical_county("  Palm   Beach  County "), "palm beach");
        assert_eq!(canonical_county("Orleans Parish"), "orleans");
    }

    #[test]
    fn canonical_county_keeps_embedded_words() {
        // "County" only comes off the tail, never the middle
        assert_eq!(canonical_county("County Line"), "county line");
    }

    #[test]
    fn canonical_state_maps_full_names() {
        assert_eq!(canonical_state("Florida"), "FL");
        assert_eq!(canonical_state("new  york"), "NY");
        assert_eq!(canonical_state("District of Columbia"), "DC");
    }

    #[test]
    fn canonical_state_passes_abbreviations_through() {
        assert_eq!(canonical_state("fl"), "FL");
        assert_eq!(canonical_state(" TX "), "TX");
    }

    #[test]
    fn canonical_state_leaves_unknowns_trimmed() {
        assert_eq!(canonical_state(" Ontario "), "Ontario");
    }

    #[test]
    fn us_jurisdiction_canonicalizes_on_construction() {
        let j = JurisdictionIdentity::us("Miami-Dade County", "Florida");
        assert_eq!(j.county, "miami-dade");
        assert_eq!(j.state, "FL");
        assert_eq!(j.country, "US");
        assert!(j.city.is_none());
    }
}
