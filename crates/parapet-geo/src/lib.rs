//! Address and coordinate resolution for Parapet
//!
//! Turns an address or coordinate pair into jurisdiction identity,
//! elevation, and an exposure hint through a tiered ladder: injected
//! cache, local bounding-box region dataset, external geocoding
//! service, deterministic static fallback. Only invalid coordinates or
//! an empty address fail; everything else degrades with recorded
//! provenance.

pub mod cache;
pub mod error;
pub mod geocoder;
pub mod location;
pub mod regions;
pub mod resolver;

pub use cache::{GeoCache, GeoCacheConfig, MemoryGeoCache};
pub use error::{GeoError, Result};
pub use geocoder::{GeocodeHit, GeocoderConfig, GeocodingProvider, HttpGeocoder};
pub use location::{normalize_address, GeoQuery, ResolvedLocation};
pub use resolver::GeoResolver;
