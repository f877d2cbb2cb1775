//! Local jurisdiction region dataset
//!
//! Bounding boxes around the metro areas the product operates in, each
//! carrying its county, a representative elevation, and an approximate
//! terrain exposure hint (coastal boxes lean D, dense-urban cores B).
//! The hints are acknowledged approximations of the coastal/urban
//! heuristics; a proper geospatial dataset is a pending product
//! decision, and a caller-supplied exposure always wins.

use parapet_domain::{Coordinates, ExposureCategory, JurisdictionIdentity};

/// Axis-aligned bounding box, degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn contains(&self, coords: &Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&coords.latitude)
            && (self.min_lng..=self.max_lng).contains(&coords.longitude)
    }
}

/// One known metro region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Display name, also matched against address tokens
    pub name: &'static str,
    pub county: &'static str,
    pub state: &'static str,
    pub bbox: BoundingBox,
    pub center: (f64, f64),
    /// Representative ground elevation, ft
    pub elevation_ft: f64,
    /// Approximate terrain classification for the box
    pub exposure_hint: Option<ExposureCategory>,
}

impl Region {
    pub fn jurisdiction(&self) -> JurisdictionIdentity {
        JurisdictionIdentity::us(self.county, self.state)
    }

    pub fn center_coordinates(&self) -> Coordinates {
        // Centers are hardcoded valid points; construct without the
        // fallible path.
        Coordinates {
            latitude: self.center.0,
            longitude: self.center.1,
        }
    }
}

macro_rules! region {
    ($name:expr, $county:expr, $state:expr,
     [$min_lat:expr, $max_lat:expr, $min_lng:expr, $max_lng:expr],
     ($clat:expr, $clng:expr), $elev:expr, $hint:expr) => {
        Region {
            name: $name,
            county: $county,
            state: $state,
            bbox: BoundingBox {
                min_lat: $min_lat,
                max_lat: $max_lat,
                min_lng: $min_lng,
                max_lng: $max_lng,
            },
            center: ($clat, $clng),
            elevation_ft: $elev,
            exposure_hint: $hint,
        }
    };
}

/// Known regions, checked in order; first containing box wins
pub const REGIONS: &[Region] = &[
    region!("Miami", "miami-dade", "FL", [25.2, 26.0, -80.9, -80.1], (25.7617, -80.1918), 7.0, Some(ExposureCategory::D)),
    region!("Fort Lauderdale", "broward", "FL", [26.0, 26.4, -80.5, -80.05], (26.1224, -80.1373), 9.0, Some(ExposureCategory::D)),
    region!("West Palm Beach", "palm beach", "FL", [26.4, 27.0, -80.7, -79.95], (26.7153, -80.0534), 13.0, Some(ExposureCategory::D)),
    region!("Key West", "monroe", "FL", [24.4, 25.2, -82.2, -80.25], (24.5551, -81.78), 5.0, Some(ExposureCategory::D)),
    region!("Tampa", "hillsborough", "FL", [27.7, 28.2, -82.6, -82.2], (27.9506, -82.4572), 48.0, Some(ExposureCategory::C)),
    region!("Orlando", "orange", "FL", [28.3, 28.7, -81.6, -81.1], (28.5384, -81.3789), 82.0, None),
    region!("Jacksonville", "duval", "FL", [30.1, 30.6, -82.0, -81.3], (30.3322, -81.6557), 16.0, Some(ExposureCategory::C)),
    region!("Houston", "harris", "TX", [29.5, 30.1, -95.8, -95.0], (29.7604, -95.3698), 80.0, None),
    region!("Galveston", "galveston", "TX", [29.0, 29.5, -95.2, -94.5], (29.3013, -94.7977), 7.0, Some(ExposureCategory::D)),
    region!("Dallas", "dallas", "TX", [32.5, 33.1, -97.1, -96.4], (32.7767, -96.797), 430.0, None),
    region!("New Orleans", "orleans", "LA", [29.85, 30.2, -90.2, -89.6], (29.9511, -90.0715), 2.0, Some(ExposureCategory::C)),
    region!("Charleston", "charleston", "SC", [32.6, 33.0, -80.2, -79.7], (32.7765, -79.9311), 20.0, Some(ExposureCategory::D)),
    region!("Savannah", "chatham", "GA", [31.9, 32.2, -81.4, -80.8], (32.0809, -81.0912), 49.0, Some(ExposureCategory::C)),
    region!("New York", "new york", "NY", [40.5, 40.95, -74.3, -73.6], (40.7128, -74.006), 33.0, Some(ExposureCategory::B)),
    region!("Chicago", "cook", "IL", [41.6, 42.1, -88.0, -87.4], (41.8781, -87.6298), 594.0, Some(ExposureCategory::B)),
    region!("Los Angeles", "los angeles", "CA", [33.7, 34.4, -118.7, -117.8], (34.0522, -118.2437), 285.0, None),
    region!("Phoenix", "maricopa", "AZ", [33.2, 33.8, -112.4, -111.7], (33.4484, -112.074), 1086.0, None),
    region!("Denver", "denver", "CO", [39.5, 39.95, -105.2, -104.6], (39.7392, -104.9903), 5280.0, None),
    region!("Seattle", "king", "WA", [47.3, 47.8, -122.5, -121.9], (47.6062, -122.3321), 175.0, Some(ExposureCategory::C)),
];

/// The region used when nothing else matches an address
///
/// Dallas sits on the global-default code profile, so a blind fallback
/// lands on the most conservative generic answer rather than a coastal
/// special case.
pub const DEFAULT_REGION: &Region = &REGIONS[9];

/// First region whose bounding box contains the point
pub fn region_containing(coords: &Coordinates) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.bbox.contains(coords))
}

/// Region whose center is closest to the point; always succeeds
pub fn nearest_region(coords: &Coordinates) -> &'static Region {
    let mut best = &REGIONS[0];
    let mut best_distance = f64::INFINITY;
    for region in REGIONS {
        let distance = coords.distance_squared(&region.center_coordinates());
        if distance < best_distance {
            best = region;
            best_distance = distance;
        }
    }
    best
}

/// Deterministic token scan of an address against region vocabulary
///
/// Matches region name, county, or state token in that priority. Used
/// only by the last-resort tier; a hit is still Low confidence.
pub fn region_matching_address(address: &str) -> Option<&'static Region> {
    let lowered = address.to_lowercase();
    REGIONS
        .iter()
        .find(|region| lowered.contains(&region.name.to_lowercase()))
        .or_else(|| {
            REGIONS
                .iter()
                .find(|region| lowered.contains(region.county))
        })
        .or_else(|| {
            REGIONS.iter().find(|region| {
                lowered
                    .split(|c: char| !c.is_ascii_alphanumeric())
                    .any(|token| token.eq_ignore_ascii_case(region.state))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_are_well_formed() {
        for region in REGIONS {
            assert!(region.bbox.min_lat < region.bbox.max_lat, "{}", region.name);
            assert!(region.bbox.min_lng < region.bbox.max_lng, "{}", region.name);
            assert!(
                region.bbox.contains(&region.center_coordinates()),
                "center of {} must sit inside its own box",
                region.name
            );
        }
    }

    #[test]
    fn downtown_miami_is_contained() {
        let coords = Coordinates::new(25.7743, -80.1937).unwrap();
        let region = region_containing(&coords).unwrap();
        assert_eq!(region.county, "miami-dade");
        assert_eq!(region.state, "FL");
        assert_eq!(region.exposure_hint, Some(ExposureCategory::D));
    }

    #[test]
    fn open_ocean_is_not_contained_but_has_a_nearest() {
        let coords = Coordinates::new(27.0, -77.0).unwrap();
        assert!(region_containing(&coords).is_none());
        let nearest = nearest_region(&coords);
        assert_eq!(nearest.state, "FL");
    }

    #[test]
    fn address_scan_prefers_name_over_state() {
        let region = region_matching_address("742 Ocean Dr, Miami, FL 33139").unwrap();
        assert_eq!(region.county, "miami-dade");
        let by_state = region_matching_address("1 Nowhere Rd, TX").unwrap();
        assert_eq!(by_state.state, "TX");
        assert!(region_matching_address("10 Rue de Rivoli, Paris").is_none());
    }

    #[test]
    fn default_region_is_dallas() {
        assert_eq!(DEFAULT_REGION.county, "dallas");
        assert_eq!(DEFAULT_REGION.state, "TX");
    }
}
