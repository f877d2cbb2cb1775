//! Engine configuration

use parapet_geo::{GeoCacheConfig, GeocoderConfig};
use serde::{Deserialize, Serialize};

/// Configuration for the analysis engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// External geocoder endpoints and timeout
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Location cache tuning
    #[serde(default)]
    pub cache: GeoCacheConfig,

    /// Building height assumed when the request omits one, ft
    #[serde(default = "default_building_height_ft")]
    pub default_building_height_ft: f64,

    /// Product type screened when the request omits one
    #[serde(default = "default_product_type")]
    pub default_product_type: String,
}

fn default_building_height_ft() -> f64 {
    // Typical low-rise commercial roof.
    30.0
}

fn default_product_type() -> String {
    "single-ply membrane".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            geocoder: GeocoderConfig::default(),
            cache: GeoCacheConfig::default(),
            default_building_height_ft: default_building_height_ft(),
            default_product_type: default_product_type(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geocoder(mut self, geocoder: GeocoderConfig) -> Self {
        self.geocoder = geocoder;
        self
    }

    pub fn with_cache(mut self, cache: GeoCacheConfig) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_default_building_height_ft(mut self, height_ft: f64) -> Self {
        self.default_building_height_ft = height_ft;
        self
    }

    pub fn with_default_product_type(mut self, product_type: &str) -> Self {
        self.default_product_type = product_type.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = EngineConfig::default();
        assert_eq!(config.default_building_height_ft, 30.0);
        assert_eq!(config.default_product_type, "single-ply membrane");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"default_building_height_ft": 45.0}"#).unwrap();
        assert_eq!(config.default_building_height_ft, 45.0);
        assert_eq!(config.default_product_type, "single-ply membrane");
    }
}
