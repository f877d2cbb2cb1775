//! Tiered location resolution
//!
//! Cache, then the local bounding-box dataset, then the external
//! geocoder, then a deterministic static fallback. First success wins;
//! only invalid input is an error. Every tier below the first costs
//! confidence, and the chosen tier is recorded in provenance.

use std::sync::Arc;

use parapet_domain::{
    Confidence, Coordinates, DataQualityWarning, JurisdictionIdentity, Provenance, Source,
    WarningKind,
};
use tracing::{debug, warn};

use crate::{
    cache::{GeoCache, GeoCacheConfig, MemoryGeoCache},
    error::{GeoError, Result},
    geocoder::{GeocodeHit, GeocoderConfig, GeocodingProvider, HttpGeocoder},
    location::{GeoQuery, ResolvedLocation},
    regions::{nearest_region, region_containing, region_matching_address, Region, DEFAULT_REGION},
};

/// Resolves addresses and coordinates to jurisdictions
pub struct GeoResolver {
    cache: Arc<dyn GeoCache>,
    geocoder: Option<Arc<dyn GeocodingProvider>>,
}

impl GeoResolver {
    /// Production resolver: in-memory cache plus HTTP geocoder
    pub fn new(geocoder_config: GeocoderConfig, cache_config: GeoCacheConfig) -> Result<Self> {
        let geocoder = HttpGeocoder::new(geocoder_config)?;
        Ok(Self {
            cache: Arc::new(MemoryGeoCache::new(cache_config)),
            geocoder: Some(Arc::new(geocoder)),
        })
    }

    /// Resolver with injected collaborators, for tests and embedding
    pub fn with_parts(
        cache: Arc<dyn GeoCache>,
        geocoder: Option<Arc<dyn GeocodingProvider>>,
    ) -> Self {
        Self { cache, geocoder }
    }

    /// Resolver that never touches the network
    pub fn offline(cache_config: GeoCacheConfig) -> Self {
        Self {
            cache: Arc::new(MemoryGeoCache::new(cache_config)),
            geocoder: None,
        }
    }

    /// Resolve a query through the tier ladder
    pub async fn resolve(&self, query: &GeoQuery) -> Result<ResolvedLocation> {
        match query {
            GeoQuery::Point(coords) => coords.validate().map_err(GeoError::from)?,
            GeoQuery::Address(address) => {
                if address.trim().is_empty() {
                    return Err(GeoError::EmptyAddress);
                }
            }
        }

        let key = query.cache_key();
        if let Some(mut hit) = self.cache.get(&key).await {
            debug!(%key, "geo cache hit");
            hit.provenance = hit.provenance.cached();
            return Ok(hit);
        }

        if let GeoQuery::Point(coords) = query {
            if let Some(region) = region_containing(coords) {
                debug!(region = region.name, "resolved from local region dataset");
                return Ok(from_region(
                    region,
                    *coords,
                    Provenance::new(Source::LocalTable, Confidence::High),
                    Vec::new(),
                ));
            }
        }

        let mut warnings = Vec::new();
        if let Some(geocoder) = &self.geocoder {
            match self.resolve_external(geocoder.as_ref(), query).await {
                Ok(location) => {
                    self.cache.set(&key, location.clone()).await;
                    return Ok(location);
                }
                Err(err) => {
                    warn!(error = %err, "external geocoding failed, using static fallback");
                    warnings.push(DataQualityWarning::new(
                        WarningKind::UpstreamUnavailable,
                        format!("geocoding service unavailable: {err}"),
                    ));
                }
            }
        }

        Ok(self.static_fallback(query, warnings))
    }

    async fn resolve_external(
        &self,
        geocoder: &dyn GeocodingProvider,
        query: &GeoQuery,
    ) -> Result<ResolvedLocation> {
        let hit = match query {
            GeoQuery::Address(address) => geocoder.forward(address).await?,
            GeoQuery::Point(coords) => {
                let mut hit = geocoder.reverse(coords).await?;
                // The caller's point is authoritative; reverse answers
                // snap to the matched feature.
                hit.coordinates = *coords;
                hit
            }
        };

        let mut warnings = Vec::new();
        let coords = hit.coordinates;
        let (jurisdiction, confidence) = jurisdiction_from_hit(&hit, &coords);

        let elevation_ft = match geocoder.elevation(&coords).await {
            Ok(elevation) => elevation,
            Err(err) => {
                warn!(error = %err, "elevation lookup failed, using region estimate");
                warnings.push(DataQualityWarning::new(
                    WarningKind::UpstreamUnavailable,
                    format!("elevation service unavailable: {err}"),
                ));
                region_containing(&coords)
                    .map(|r| r.elevation_ft)
                    .unwrap_or(0.0)
            }
        };

        Ok(ResolvedLocation {
            jurisdiction,
            coordinates: coords,
            elevation_ft,
            provenance: Provenance::new(Source::ExternalService, confidence),
            exposure_hint: region_containing(&coords).and_then(|r| r.exposure_hint),
            warnings,
        })
    }

    fn static_fallback(
        &self,
        query: &GeoQuery,
        warnings: Vec<DataQualityWarning>,
    ) -> ResolvedLocation {
        let provenance = Provenance::new(Source::StaticDefault, Confidence::Low);
        match query {
            GeoQuery::Point(coords) => {
                let region = nearest_region(coords);
                debug!(region = region.name, "static fallback to nearest region");
                from_region(region, *coords, provenance, warnings)
            }
            GeoQuery::Address(address) => {
                let region = region_matching_address(address).unwrap_or(DEFAULT_REGION);
                debug!(region = region.name, "static fallback from address tokens");
                from_region(region, region.center_coordinates(), provenance, warnings)
            }
        }
    }
}

fn from_region(
    region: &Region,
    coordinates: Coordinates,
    provenance: Provenance,
    warnings: Vec<DataQualityWarning>,
) -> ResolvedLocation {
    ResolvedLocation {
        jurisdiction: region.jurisdiction(),
        coordinates,
        elevation_ft: region.elevation_ft,
        provenance,
        exposure_hint: region.exposure_hint,
        warnings,
    }
}

/// Build a jurisdiction from a geocoder hit, backfilling gaps
///
/// Both county and state present is a full hit. Missing fields come
/// from the nearest known region and cost a confidence level.
fn jurisdiction_from_hit(
    hit: &GeocodeHit,
    coords: &Coordinates,
) -> (JurisdictionIdentity, Confidence) {
    let fallback = nearest_region(coords);
    let complete = hit.county.is_some() && hit.state.is_some();
    let county = hit.county.as_deref().unwrap_or(fallback.county);
    let state = hit.state.as_deref().unwrap_or(fallback.state);

    let mut jurisdiction = JurisdictionIdentity::us(county, state);
    if let Some(city) = &hit.city {
        jurisdiction = jurisdiction.with_city(city);
    }
    if let Some(postal_code) = &hit.postal_code {
        jurisdiction = jurisdiction.with_postal_code(postal_code);
    }

    let confidence = if complete {
        Confidence::High
    } else {
        Confidence::Medium
    };
    (jurisdiction, confidence)
}
