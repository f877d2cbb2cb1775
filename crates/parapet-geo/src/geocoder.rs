//! External geocoding provider
//!
//! Forward/reverse geocoding against a Nominatim-style endpoint plus an
//! Open-Elevation-style elevation lookup, both behind a trait so the
//! resolver can be tested with fakes and the HTTP client with a local
//! mock server. Every call carries a timeout; a slow upstream costs one
//! tier, never a hung request.

use std::time::Duration;

use async_trait::async_trait;
use parapet_domain::Coordinates;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{GeoError, Result};

/// Feet per meter; elevation services answer in meters
const FEET_PER_METER: f64 = 3.28084;

/// Geocoder endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Nominatim-compatible base URL
    #[serde(default = "default_geocode_url")]
    pub geocode_base_url: String,

    /// Open-Elevation-compatible base URL
    #[serde(default = "default_elevation_url")]
    pub elevation_base_url: String,

    /// Per-call timeout
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// User agent sent upstream (public endpoints require one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocode_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_elevation_url() -> String {
    "https://api.open-elevation.com".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(4)
}

fn default_user_agent() -> String {
    format!("parapet/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            geocode_base_url: default_geocode_url(),
            elevation_base_url: default_elevation_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl GeocoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geocode_base_url(mut self, url: &str) -> Self {
        self.geocode_base_url = url.to_string();
        self
    }

    pub fn with_elevation_base_url(mut self, url: &str) -> Self {
        self.elevation_base_url = url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// One geocoding answer, raw fields as the upstream spelled them
///
/// Canonicalization happens when the resolver builds the jurisdiction,
/// not here.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub coordinates: Coordinates,
    pub county: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// External geocoding operations
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Address to coordinates and address components
    async fn forward(&self, address: &str) -> Result<GeocodeHit>;

    /// Coordinates to address components
    async fn reverse(&self, coords: &Coordinates) -> Result<GeocodeHit>;

    /// Ground elevation at a point, ft
    async fn elevation(&self, coords: &Coordinates) -> Result<f64>;
}

/// Production geocoder over HTTP
pub struct HttpGeocoder {
    client: reqwest::Client,
    config: GeocoderConfig,
}

impl HttpGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self> {
        if config.geocode_base_url.trim().is_empty() {
            return Err(GeoError::Upstream(
                "geocoder base URL is required".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    fn geocode_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let base = format!("{}{}", self.config.geocode_base_url.trim_end_matches('/'), path);
        Url::parse_with_params(&base, params)
            .map_err(|e| GeoError::Upstream(format!("bad geocoder URL: {e}")))
    }

    async fn fetch_one(&self, url: Url) -> Result<NominatimPlace> {
        debug!(%url, "geocoder request");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_place(&body)
    }
}

#[async_trait]
impl GeocodingProvider for HttpGeocoder {
    async fn forward(&self, address: &str) -> Result<GeocodeHit> {
        let url = self.geocode_url(
            "/search",
            &[
                ("q", address),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ],
        )?;
        self.fetch_one(url).await?.into_hit()
    }

    async fn reverse(&self, coords: &Coordinates) -> Result<GeocodeHit> {
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();
        let url = self.geocode_url(
            "/reverse",
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
            ],
        )?;
        self.fetch_one(url).await?.into_hit()
    }

    async fn elevation(&self, coords: &Coordinates) -> Result<f64> {
        let locations = format!("{},{}", coords.latitude, coords.longitude);
        let base = format!(
            "{}/api/v1/lookup",
            self.config.elevation_base_url.trim_end_matches('/')
        );
        let url = Url::parse_with_params(&base, &[("locations", locations.as_str())])
            .map_err(|e| GeoError::Upstream(format!("bad elevation URL: {e}")))?;
        debug!(%url, "elevation request");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: ElevationResponse = response.json().await?;
        let meters = body
            .results
            .first()
            .map(|r| r.elevation)
            .ok_or_else(|| GeoError::MalformedResponse("empty elevation results".to_string()))?;
        Ok(meters * FEET_PER_METER)
    }
}

/// Nominatim `jsonv2` place record, the fields this engine reads
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    #[serde(default)]
    county: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    postcode: Option<String>,
}

impl NominatimPlace {
    fn into_hit(self) -> Result<GeocodeHit> {
        let latitude: f64 = self
            .lat
            .parse()
            .map_err(|_| GeoError::MalformedResponse(format!("bad latitude: {}", self.lat)))?;
        let longitude: f64 = self
            .lon
            .parse()
            .map_err(|_| GeoError::MalformedResponse(format!("bad longitude: {}", self.lon)))?;
        let coordinates = Coordinates::new(latitude, longitude)
            .map_err(|e| GeoError::MalformedResponse(e.to_string()))?;
        Ok(GeocodeHit {
            coordinates,
            county: self.address.county,
            state: self.address.state,
            city: self.address.city.or(self.address.town),
            postal_code: self.address.postcode,
        })
    }
}

/// Search answers arrive as an array, reverse answers as one object
fn parse_place(body: &str) -> Result<NominatimPlace> {
    if body.trim_start().starts_with('[') {
        let mut places: Vec<NominatimPlace> = serde_json::from_str(body)
            .map_err(|e| GeoError::MalformedResponse(e.to_string()))?;
        if places.is_empty() {
            return Err(GeoError::MalformedResponse(
                "no geocoding results".to_string(),
            ));
        }
        Ok(places.remove(0))
    } else {
        serde_json::from_str(body).map_err(|e| GeoError::MalformedResponse(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    results: Vec<ElevationResult>,
}

#[derive(Debug, Deserialize)]
struct ElevationResult {
    elevation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_is_rejected() {
        let config = GeocoderConfig::new().with_geocode_base_url("  ");
        assert!(HttpGeocoder::new(config).is_err());
    }

    #[test]
    fn parse_place_handles_array_and_object() {
        let array = r#"[{"lat": "25.76", "lon": "-80.19",
            "address": {"county": "Miami-Dade County", "state": "Florida"}}]"#;
        let place = parse_place(array).unwrap();
        let hit = place.into_hit().unwrap();
        assert_eq!(hit.county.as_deref(), Some("Miami-Dade County"));

        let object = r#"{"lat": "32.77", "lon": "-96.79", "address": {}}"#;
        assert!(parse_place(object).is_ok());

        assert!(parse_place("[]").is_err());
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        let body = r#"{"lat": "not-a-number", "lon": "-96.79"}"#;
        let place = parse_place(body).unwrap();
        assert!(matches!(
            place.into_hit(),
            Err(GeoError::MalformedResponse(_))
        ));
    }
}
