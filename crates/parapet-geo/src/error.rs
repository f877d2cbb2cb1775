//! Geo resolution errors

use parapet_domain::DomainError;
use thiserror::Error;

/// Errors from geo resolution
///
/// Only input validation is fatal to a request. Upstream variants exist
/// so the HTTP layer has a typed channel, but the resolver consumes
/// them internally and falls through to the next tier.
#[derive(Error, Debug)]
pub enum GeoError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("address must not be empty")]
    EmptyAddress,

    #[error("geocoding upstream failed: {0}")]
    Upstream(String),

    #[error("geocoding response malformed: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for GeoError {
    fn from(err: reqwest::Error) -> Self {
        GeoError::Upstream(err.to_string())
    }
}

/// Result type alias for geo operations
pub type Result<T> = std::result::Result<T, GeoError>;
